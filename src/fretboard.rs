//! Fretboard Model
//!
//! Maps (string, fret) to pitch for a configurable tuning and fret range.
//! Position lookups walk every physical string independently, so strings
//! sharing an open pitch (both E strings in standard tuning) each
//! contribute their own matches.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::diagram::FingerPosition;
use crate::pitch::Pitch;

/// Number of strings on the instrument.
pub const NUM_STRINGS: u8 = 6;

/// Standard six-string tuning, string 1 (highest pitch) through
/// string 6 (lowest pitch).
pub const STANDARD_TUNING: [Pitch; NUM_STRINGS as usize] = [
    Pitch::E,
    Pitch::B,
    Pitch::G,
    Pitch::D,
    Pitch::A,
    Pitch::E,
];

/// Default highest playable fret.
pub const DEFAULT_MAX_FRET: u8 = 13;

/// Error raised when a string number falls outside 1..=6.
#[derive(Debug, Error)]
#[error("string number {0} is outside 1..={NUM_STRINGS}")]
pub struct InvalidStringError(
    /// The rejected string number.
    pub u8,
);

/// Builder for a [`Fretboard`] to customize tuning and fret range.
pub struct FretboardBuilder {
    tuning: [Pitch; NUM_STRINGS as usize],
    max_fret: u8,
}

impl FretboardBuilder {
    /// Start with standard tuning and `max_fret` = 13.
    pub fn new() -> Self {
        FretboardBuilder {
            tuning: STANDARD_TUNING,
            max_fret: DEFAULT_MAX_FRET,
        }
    }

    /// Set the open-string pitches, string 1 first.
    pub fn tuning(mut self, tuning: [Pitch; NUM_STRINGS as usize]) -> Self {
        self.tuning = tuning;
        self
    }

    /// Set the highest fret considered by position lookups.
    pub fn max_fret(mut self, max_fret: u8) -> Self {
        self.max_fret = max_fret;
        self
    }

    /// Finalize and create the [`Fretboard`].
    pub fn build(self) -> Fretboard {
        Fretboard {
            tuning: self.tuning,
            max_fret: self.max_fret,
        }
    }
}

impl Default for FretboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// An immutable fretboard: a tuning plus a fret range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fretboard {
    tuning: [Pitch; NUM_STRINGS as usize],
    max_fret: u8,
}

impl Fretboard {
    /// Standard tuning, frets 0..=13.
    pub fn new() -> Self {
        FretboardBuilder::new().build()
    }

    /// Start customizing with a builder.
    pub fn builder() -> FretboardBuilder {
        FretboardBuilder::new()
    }

    /// The open-string pitches, string 1 first.
    pub fn tuning(&self) -> &[Pitch; NUM_STRINGS as usize] {
        &self.tuning
    }

    /// The highest fret considered by position lookups.
    pub const fn max_fret(&self) -> u8 {
        self.max_fret
    }

    /// The open pitch of `string`.
    pub fn open_pitch(&self, string: u8) -> Result<Pitch, InvalidStringError> {
        if !(1..=NUM_STRINGS).contains(&string) {
            return Err(InvalidStringError(string));
        }
        Ok(self.tuning[(string - 1) as usize])
    }

    /// The pitch sounded at (`string`, `fret`): the open pitch raised by
    /// `fret` semitones, wrapping past the octave.
    pub fn note_at(&self, string: u8, fret: u8) -> Result<Pitch, InvalidStringError> {
        Ok(self.open_pitch(string)?.transpose(fret))
    }

    /// Every (string, fret) position sounding `pitch`, computed per
    /// physical string over frets 0..=max_fret. Ordered by string, then
    /// fret, ascending.
    pub fn positions_of(&self, pitch: Pitch) -> Vec<FingerPosition> {
        let mut positions = Vec::new();
        for (idx, open) in self.tuning.iter().enumerate() {
            let string = idx as u8 + 1;
            for fret in 0..=self.max_fret {
                if open.transpose(fret) == pitch {
                    positions.push(FingerPosition::new(string, fret));
                }
            }
        }
        positions
    }
}

impl Default for Fretboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_at_standard_tuning() {
        let fb = Fretboard::new();
        assert_eq!(fb.note_at(3, 3).unwrap(), Pitch::As);
        assert_eq!(fb.note_at(1, 0).unwrap(), Pitch::E);
        assert_eq!(fb.note_at(6, 12).unwrap(), Pitch::E);
        assert!(fb.note_at(0, 3).is_err());
        assert!(fb.note_at(7, 3).is_err());
    }

    #[test]
    fn positions_of_e_covers_both_e_strings() {
        let fb = Fretboard::new();
        let mut positions = fb.positions_of(Pitch::E);
        positions.sort_unstable();

        let mut expected = vec![
            FingerPosition::new(1, 0),
            FingerPosition::new(1, 12),
            FingerPosition::new(6, 0),
            FingerPosition::new(6, 12),
            FingerPosition::new(2, 5),
            FingerPosition::new(3, 9),
            FingerPosition::new(4, 2),
            FingerPosition::new(5, 7),
        ];
        expected.sort_unstable();
        assert_eq!(positions, expected);
    }

    #[test]
    fn custom_tuning_and_range() {
        // Drop D: string 6 lowered a whole step.
        let fb = Fretboard::builder()
            .tuning([Pitch::E, Pitch::B, Pitch::G, Pitch::D, Pitch::A, Pitch::D])
            .max_fret(5)
            .build();
        assert_eq!(fb.note_at(6, 0).unwrap(), Pitch::D);
        let positions = fb.positions_of(Pitch::D);
        assert!(positions.contains(&FingerPosition::new(6, 0)));
        assert!(positions.contains(&FingerPosition::new(4, 0)));
        assert!(positions.iter().all(|p| p.fret <= 5));
    }
}
