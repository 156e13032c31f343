//! End-to-end derivation and resolution checks against known voicings.

use chord_shapes::{
    chord_notes, diagrams_for, parse_symbol, resolve_diagram, ChordDiagram,
    FingerPosition, Pitch, Quality,
};
use std::collections::BTreeSet;

fn pos(string: u8, fret: u8) -> FingerPosition {
    FingerPosition::new(string, fret)
}

#[test]
fn d_major_symbol_derives_the_right_note_set() {
    let (root, quality) = parse_symbol("D").unwrap();
    assert_eq!(root, Pitch::D);
    assert_eq!(quality, Quality::Major);

    let notes: BTreeSet<Pitch> = chord_notes(root, quality).into_iter().collect();
    let expected: BTreeSet<Pitch> = [Pitch::D, Pitch::Fs, Pitch::A].into_iter().collect();
    assert_eq!(notes, expected);
}

#[test]
fn derived_diagrams_are_selectable_by_index() {
    let diagrams = diagrams_for("D").unwrap();
    assert!(!diagrams.is_empty());

    // Same symbol, same enumeration order.
    let again = diagrams_for("D").unwrap();
    assert_eq!(diagrams, again);

    // Each diagram only frets chord tones.
    let tones: BTreeSet<Pitch> = chord_notes(Pitch::D, Quality::Major).into_iter().collect();
    let board = chord_shapes::Fretboard::new();
    for diagram in &diagrams {
        for p in diagram.shape() {
            let pitch = board.note_at(p.string, p.fret).unwrap();
            assert!(tones.contains(&pitch), "{pitch} is not a D major tone");
        }
    }
}

#[test]
fn open_g_major_resolves_by_diagram() {
    let diagram = ChordDiagram::new(
        vec![pos(1, 3), pos(5, 2), pos(6, 3)],
        vec![2, 3, 4],
        vec![],
    )
    .unwrap();
    let resolved = resolve_diagram(&diagram).unwrap();
    assert_eq!(resolved.root, Pitch::G);
    assert_eq!(resolved.quality, Some(Quality::Major));
}

#[test]
fn open_a_minor_resolves_by_diagram() {
    // x 0 2 2 1 0 low to high: A E A C E, root A on string 5.
    let diagram = ChordDiagram::new(
        vec![pos(2, 1), pos(3, 2), pos(4, 2)],
        vec![1, 5],
        vec![6],
    )
    .unwrap();
    let resolved = resolve_diagram(&diagram).unwrap();
    assert_eq!(resolved.root, Pitch::A);
    assert_eq!(resolved.root_position, pos(5, 0));
    assert_eq!(resolved.quality, Some(Quality::Minor));
    assert_eq!(resolved.to_string(), "A minor");
}

#[test]
fn unplayable_symbol_yields_an_empty_list_not_an_error() {
    // A ninth chord needs five distinct strings inside a two-fret span;
    // whether any voicing survives, the call itself must succeed.
    let diagrams = diagrams_for("Cmaj9").unwrap();
    for diagram in &diagrams {
        assert_eq!(diagram.shape().len(), 5);
    }
}

#[test]
fn diagram_serializes_for_the_rendering_boundary() {
    let diagrams = diagrams_for("Em").unwrap();
    let json = serde_json::to_string(&diagrams[0]).unwrap();
    let back: ChordDiagram = serde_json::from_str(&json).unwrap();
    assert_eq!(back, diagrams[0]);
}
