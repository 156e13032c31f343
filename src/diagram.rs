//! Chord diagrams
//!
//! The complete playable-position description of a chord: fretted
//! positions plus open and muted strings. Every string of the instrument
//! is accounted for exactly once.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fretboard::NUM_STRINGS;

/// Errors raised when a caller-supplied diagram violates the
/// one-classification-per-string invariant.
#[derive(Debug, Error)]
pub enum DiagramError {
    /// A string number fell outside 1..=6.
    #[error("string number {0} is outside 1..={NUM_STRINGS}")]
    StringOutOfRange(u8),

    /// A string appeared in more than one of the fretted, open and muted
    /// sets (or twice in the shape).
    #[error("string {0} is classified more than once")]
    DuplicateString(u8),

    /// A string appeared in none of the three sets.
    #[error("string {0} is neither fretted, open nor muted")]
    MissingString(u8),
}

/// One fretted (or open, at fret 0) position: string 1 (highest pitch)
/// through 6 (lowest pitch), fret 0 for the open string.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct FingerPosition {
    /// String number, 1..=6.
    pub string: u8,
    /// Fret number, 0 = open.
    pub fret: u8,
}

impl FingerPosition {
    /// Position on `string` at `fret`.
    pub const fn new(string: u8, fret: u8) -> Self {
        FingerPosition { string, fret }
    }
}

/// A finished chord diagram. The fretted shape, open strings and muted
/// strings partition `{1..6}` exactly; instances are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordDiagram {
    shape: Vec<FingerPosition>,
    open_strings: Vec<u8>,
    muted_strings: Vec<u8>,
}

impl ChordDiagram {
    /// Build a diagram from caller-supplied parts, validating that every
    /// string 1..=6 is classified exactly once. `shape` is stored sorted
    /// by ascending string number; the open and muted sets sorted
    /// ascending.
    pub fn new(
        shape: Vec<FingerPosition>,
        open_strings: Vec<u8>,
        muted_strings: Vec<u8>,
    ) -> Result<Self, DiagramError> {
        let mut seen = [false; NUM_STRINGS as usize];
        let mut claim = |string: u8| {
            if !(1..=NUM_STRINGS).contains(&string) {
                return Err(DiagramError::StringOutOfRange(string));
            }
            let slot = &mut seen[(string - 1) as usize];
            if *slot {
                return Err(DiagramError::DuplicateString(string));
            }
            *slot = true;
            Ok(())
        };

        for pos in &shape {
            claim(pos.string)?;
        }
        for &s in open_strings.iter().chain(muted_strings.iter()) {
            claim(s)?;
        }
        if let Some(missing) = seen.iter().position(|&taken| !taken) {
            return Err(DiagramError::MissingString(missing as u8 + 1));
        }

        let mut shape = shape;
        shape.sort_unstable_by_key(|pos| pos.string);
        let mut open_strings = open_strings;
        open_strings.sort_unstable();
        let mut muted_strings = muted_strings;
        muted_strings.sort_unstable();

        Ok(ChordDiagram {
            shape,
            open_strings,
            muted_strings,
        })
    }

    /// Internal constructor for parts already known to satisfy the
    /// partition invariant (generator output).
    pub(crate) fn from_parts(
        shape: Vec<FingerPosition>,
        open_strings: Vec<u8>,
        muted_strings: Vec<u8>,
    ) -> Self {
        ChordDiagram {
            shape,
            open_strings,
            muted_strings,
        }
    }

    /// The fretted positions, sorted by ascending string number.
    pub fn shape(&self) -> &[FingerPosition] {
        &self.shape
    }

    /// Strings that ring open, ascending.
    pub fn open_strings(&self) -> &[u8] {
        &self.open_strings
    }

    /// Strings deliberately prevented from sounding, ascending.
    pub fn muted_strings(&self) -> &[u8] {
        &self.muted_strings
    }

    /// Every sounded position: the fretted shape followed by each open
    /// string at fret 0. Muted strings are excluded.
    pub fn sounded_positions(&self) -> impl Iterator<Item = FingerPosition> + '_ {
        self.shape
            .iter()
            .copied()
            .chain(self.open_strings.iter().map(|&s| FingerPosition::new(s, 0)))
    }
}
