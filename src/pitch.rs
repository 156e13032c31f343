//! Pitch Model
//!
//! A 12-tone cyclic chromatic scale with per-root semitone distances.
//! Pitches carry both a standard (sharp) and an alternative (flat)
//! spelling; no octave is tracked.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of pitch classes in the chromatic scale.
pub const SEMITONES: u8 = 12;

/// The twelve pitch classes in chromatic order, starting at A.
pub const CHROMATIC_ORDER: [Pitch; SEMITONES as usize] = [
    Pitch::A,
    Pitch::As,
    Pitch::B,
    Pitch::C,
    Pitch::Cs,
    Pitch::D,
    Pitch::Ds,
    Pitch::E,
    Pitch::F,
    Pitch::Fs,
    Pitch::G,
    Pitch::Gs,
];

/// Semitone offsets of the major scale (W-W-H-W-W-W-H).
const MAJOR_OFFSETS: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Semitone offsets of the natural minor scale (W-H-W-W-H-W-W).
const MINOR_OFFSETS: [u8; 7] = [0, 2, 3, 5, 7, 8, 10];

/// Error raised when a pitch name is not one of the recognized spellings.
#[derive(Debug, Error)]
#[error("unknown pitch name `{0}`")]
pub struct UnknownPitchError(
    /// The rejected name.
    pub String,
);

/// Twelve chromatic pitch classes, no octave.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Pitch {
    /// A
    A,
    /// A sharp / B flat
    As,
    /// B
    B,
    /// C
    C,
    /// C sharp / D flat
    Cs,
    /// D
    D,
    /// D sharp / E flat
    Ds,
    /// E
    E,
    /// F
    F,
    /// F sharp / G flat
    Fs,
    /// G
    G,
    /// G sharp / A flat
    Gs,
}

impl Pitch {
    /// Index of this pitch in [`CHROMATIC_ORDER`] (A = 0 .. G# = 11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Pitch at `idx` semitones above A, wrapping past the octave.
    pub const fn from_index(idx: u8) -> Pitch {
        CHROMATIC_ORDER[(idx % SEMITONES) as usize]
    }

    /// The pitch `semitones` above this one, wrapping past the octave.
    pub const fn transpose(self, semitones: u8) -> Pitch {
        Pitch::from_index(self.index() + (semitones % SEMITONES))
    }

    /// Standard (sharp) spelling, e.g. `"A#"`.
    pub const fn name(self) -> &'static str {
        match self {
            Pitch::A => "A",
            Pitch::As => "A#",
            Pitch::B => "B",
            Pitch::C => "C",
            Pitch::Cs => "C#",
            Pitch::D => "D",
            Pitch::Ds => "D#",
            Pitch::E => "E",
            Pitch::F => "F",
            Pitch::Fs => "F#",
            Pitch::G => "G",
            Pitch::Gs => "G#",
        }
    }

    /// Alternative (flat) spelling, e.g. `"Bb"`. Naturals spell the same
    /// both ways.
    pub const fn alt_name(self) -> &'static str {
        match self {
            Pitch::A => "A",
            Pitch::As => "Bb",
            Pitch::B => "B",
            Pitch::C => "C",
            Pitch::Cs => "Db",
            Pitch::D => "D",
            Pitch::Ds => "Eb",
            Pitch::E => "E",
            Pitch::F => "F",
            Pitch::Fs => "Gb",
            Pitch::G => "G",
            Pitch::Gs => "Ab",
        }
    }
}

impl Display for Pitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Pitch {
    type Err = UnknownPitchError;

    /// Parse a pitch from its standard spelling, or from a flat spelling
    /// normalized through the fixed flat→sharp table
    /// (`Bb→A#, Db→C#, Eb→D#, Gb→F#, Ab→G#, Cb→B, Fb→E`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Pitch::A),
            "A#" | "Bb" => Ok(Pitch::As),
            "B" | "Cb" => Ok(Pitch::B),
            "C" | "B#" => Ok(Pitch::C),
            "C#" | "Db" => Ok(Pitch::Cs),
            "D" => Ok(Pitch::D),
            "D#" | "Eb" => Ok(Pitch::Ds),
            "E" | "Fb" => Ok(Pitch::E),
            "F" | "E#" => Ok(Pitch::F),
            "F#" | "Gb" => Ok(Pitch::Fs),
            "G" => Ok(Pitch::G),
            "G#" | "Ab" => Ok(Pitch::Gs),
            other => Err(UnknownPitchError(other.to_string())),
        }
    }
}

/// Semitone-distance table for one root: every pitch mapped to its
/// distance 0..11 from the root, cyclic under rotation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromaticScale {
    root: Pitch,
}

impl ChromaticScale {
    /// Build the distance table rooted at `root`.
    pub const fn new(root: Pitch) -> Self {
        ChromaticScale { root }
    }

    /// The root pitch, at distance 0.
    pub const fn root(self) -> Pitch {
        self.root
    }

    /// Semitone distance 0..11 of `pitch` above the root.
    pub const fn distance(self, pitch: Pitch) -> u8 {
        (pitch.index() + SEMITONES - self.root.index()) % SEMITONES
    }

    /// The pitch `semitones` above the root; compound intervals wrap
    /// (14 resolves like 2).
    pub const fn pitch_at(self, semitones: u8) -> Pitch {
        self.root.transpose(semitones)
    }

    /// The full rotation: every pitch paired with its distance from the
    /// root, in ascending distance order.
    pub fn distances(self) -> [(Pitch, u8); SEMITONES as usize] {
        let mut table = [(self.root, 0); SEMITONES as usize];
        for (d, entry) in table.iter_mut().enumerate() {
            *entry = (self.pitch_at(d as u8), d as u8);
        }
        table
    }
}

/// The two supported parent-scale patterns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalePattern {
    /// Major scale, W-W-H-W-W-W-H.
    Major,
    /// Natural minor scale, W-H-W-W-H-W-W.
    Minor,
}

impl ScalePattern {
    /// Semitone offsets of the scale degrees from the root.
    pub const fn offsets(self) -> [u8; 7] {
        match self {
            ScalePattern::Major => MAJOR_OFFSETS,
            ScalePattern::Minor => MINOR_OFFSETS,
        }
    }
}

/// The seven member pitches of the `pattern` scale rooted at `root`.
pub fn scale_pitches(root: Pitch, pattern: ScalePattern) -> [Pitch; 7] {
    let scale = ChromaticScale::new(root);
    pattern.offsets().map(|off| scale.pitch_at(off))
}
