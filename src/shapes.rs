//! Shape Generator
//!
//! Enumerates every physically playable fret-diagram for a (root, quality)
//! pair: one candidate position per chord tone, filtered by the fret-span
//! and one-note-per-string rules, then completed by classifying every
//! unused string as open or muted.

use itertools::Itertools;

use crate::diagram::{ChordDiagram, FingerPosition};
use crate::formula::{chord_notes, Quality};
use crate::fretboard::{Fretboard, NUM_STRINGS};
use crate::pitch::{scale_pitches, Pitch};
use crate::symbol::{parse_symbol, ChordSyntaxError};

/// A fretting hand cannot span this many frets; candidates whose chosen
/// frets stretch `max - min >= FRET_SPAN_LIMIT` are unplayable.
const FRET_SPAN_LIMIT: u8 = 3;

/// Enumerates playable chord diagrams over one fretboard.
pub struct ShapeGenerator {
    fretboard: Fretboard,
}

impl ShapeGenerator {
    /// Generator over the default fretboard (standard tuning, 13 frets).
    pub fn new() -> Self {
        ShapeGenerator {
            fretboard: Fretboard::new(),
        }
    }

    /// Generator over a custom fretboard.
    pub fn with_fretboard(fretboard: Fretboard) -> Self {
        ShapeGenerator { fretboard }
    }

    /// The fretboard positions are drawn from.
    pub fn fretboard(&self) -> &Fretboard {
        &self.fretboard
    }

    /// Every playable fretted shape for the chord, before open/mute
    /// classification. Each shape holds one position per chord tone,
    /// sorted by ascending string number. Output order is the stable
    /// product-enumeration order, so a shape keeps its index between
    /// calls.
    pub fn raw_shapes(&self, root: Pitch, quality: Quality) -> Vec<Vec<FingerPosition>> {
        let candidates: Vec<Vec<FingerPosition>> = chord_notes(root, quality)
            .into_iter()
            .map(|note| self.fretboard.positions_of(note))
            .collect();

        candidates
            .into_iter()
            .multi_cartesian_product()
            .filter(|combo| Self::playable(combo))
            .map(|mut combo| {
                combo.sort_unstable_by_key(|pos| pos.string);
                combo
            })
            .collect()
    }

    /// Span and string-collision filters: all chosen frets must sit
    /// within the hand span, and one string cannot sound two pitches.
    fn playable(combo: &[FingerPosition]) -> bool {
        let (mut lo, mut hi) = (u8::MAX, 0);
        for pos in combo {
            lo = lo.min(pos.fret);
            hi = hi.max(pos.fret);
        }
        if hi - lo >= FRET_SPAN_LIMIT {
            return false;
        }
        combo
            .iter()
            .map(|pos| pos.string)
            .all_unique()
    }

    /// Every playable chord diagram for the chord: each raw shape
    /// completed with its open/muted string classification, in raw-shape
    /// order.
    pub fn diagrams(&self, root: Pitch, quality: Quality) -> Vec<ChordDiagram> {
        self.raw_shapes(root, quality)
            .into_iter()
            .map(|shape| self.classify_unused_strings(shape, root, quality))
            .collect()
    }

    /// Derivation entry point: parse a chord symbol and enumerate its
    /// diagrams. An empty result is a valid outcome (no playable shape),
    /// not an error.
    pub fn diagrams_for_symbol(&self, symbol: &str) -> Result<Vec<ChordDiagram>, ChordSyntaxError> {
        let (root, quality) = parse_symbol(symbol)?;
        Ok(self.diagrams(root, quality))
    }

    /// Open/mute classification for one shape. Strings lower in register
    /// than the shape's lowest fretted note are muted unconditionally; the
    /// rest ring open when their open pitch belongs to the chord's parent
    /// scale, and are muted otherwise.
    fn classify_unused_strings(
        &self,
        shape: Vec<FingerPosition>,
        root: Pitch,
        quality: Quality,
    ) -> ChordDiagram {
        let parent = scale_pitches(root, quality.family());
        let lowest_played = shape.iter().map(|pos| pos.string).max().unwrap_or(0);

        let mut open_strings = Vec::new();
        let mut muted_strings = Vec::new();
        for string in 1..=NUM_STRINGS {
            if shape.iter().any(|pos| pos.string == string) {
                continue;
            }
            let open_pitch = self.fretboard.tuning()[(string - 1) as usize];
            if string <= lowest_played && parent.contains(&open_pitch) {
                open_strings.push(string);
            } else {
                muted_strings.push(string);
            }
        }

        ChordDiagram::from_parts(shape, open_strings, muted_strings)
    }
}

impl Default for ShapeGenerator {
    fn default() -> Self {
        Self::new()
    }
}
