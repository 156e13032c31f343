//! Exhaustive derivation/resolution sweep over every root and quality.

use chord_shapes::{
    chord_notes, ChordNameResolver, Fretboard, Pitch, Quality, ShapeGenerator,
    ALL_QUALITIES, CHROMATIC_ORDER,
};
use lazy_static::lazy_static;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

lazy_static! {
    static ref ALL_CHORDS: Vec<(Pitch, Quality)> = CHROMATIC_ORDER
        .iter()
        .flat_map(|&root| ALL_QUALITIES.iter().map(move |&q| (root, q)))
        .collect();
}

/// Check one derived diagram against the playability and partition
/// invariants, returning a description of the first violation.
fn check_invariants(diagram: &chord_shapes::ChordDiagram) -> Result<(), String> {
    let frets: Vec<u8> = diagram.shape().iter().map(|p| p.fret).collect();
    if let (Some(&lo), Some(&hi)) = (frets.iter().min(), frets.iter().max()) {
        if hi - lo >= 3 {
            return Err(format!("fret span {} too wide", hi - lo));
        }
    }

    let mut strings: Vec<u8> = diagram
        .shape()
        .iter()
        .map(|p| p.string)
        .chain(diagram.open_strings().iter().copied())
        .chain(diagram.muted_strings().iter().copied())
        .collect();
    strings.sort_unstable();
    if strings != [1, 2, 3, 4, 5, 6] {
        return Err(format!("strings {strings:?} do not partition 1..6"));
    }
    Ok(())
}

#[test]
fn every_derived_diagram_is_playable_and_resolvable() {
    let generator = ShapeGenerator::new();
    let resolver = ChordNameResolver::new();
    let fretboard = Fretboard::new();
    let failures = Arc::new(Mutex::new(Vec::<String>::new()));

    ALL_CHORDS.par_iter().for_each(|&(root, quality)| {
        let notes: BTreeSet<Pitch> = chord_notes(root, quality).into_iter().collect();

        for (idx, diagram) in generator.diagrams(root, quality).iter().enumerate() {
            let fail = |msg: String| {
                failures
                    .lock()
                    .unwrap()
                    .push(format!("{root} {quality} #{idx}: {msg}"));
            };

            if let Err(msg) = check_invariants(diagram) {
                fail(msg);
                continue;
            }

            let resolved = match resolver.resolve(diagram) {
                Ok(r) => r,
                Err(e) => {
                    fail(format!("resolution failed: {e}"));
                    continue;
                }
            };

            // The resolver reads the lowest sounded register as the root.
            let lowest = diagram
                .sounded_positions()
                .max_by_key(|p| p.string)
                .expect("derived diagrams sound at least the shape");
            if resolved.root_position != lowest {
                fail(format!("root taken from {:?}", resolved.root_position));
                continue;
            }

            // Root-position voicings whose sounded pitches are exactly the
            // chord tones must round-trip to the same (root, quality).
            // Inverted voicings and voicings with extra scale-tone open
            // strings are legitimately allowed to read differently.
            let sounded: BTreeSet<Pitch> = diagram
                .sounded_positions()
                .map(|p| {
                    fretboard
                        .note_at(p.string, p.fret)
                        .expect("positions of a valid diagram are on the board")
                })
                .collect();
            if resolved.root == root
                && sounded == notes
                && resolved.quality != Some(quality)
            {
                fail(format!(
                    "round-trip quality {} instead of {quality}",
                    resolved.quality_name()
                ));
            }
        }
    });

    let failures = Arc::try_unwrap(failures).unwrap().into_inner().unwrap();
    assert!(
        failures.is_empty(),
        "{} sweep failures:\n{}",
        failures.len(),
        failures.join("\n")
    );
}

#[test]
fn derivation_order_is_stable() {
    let generator = ShapeGenerator::new();
    let first = generator.diagrams(Pitch::C, Quality::Major);
    let second = generator.diagrams(Pitch::C, Quality::Major);
    assert_eq!(first, second);
}
