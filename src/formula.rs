//! Chord Formula Table
//!
//! Named intervals and the fixed quality → interval-tuple table. Several
//! semitone distances admit more than one conventional interval name, so
//! value lookups go through an explicit distance → set-of-labels table
//! rather than a uniquely-keyed enumeration.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pitch::{ChromaticScale, Pitch, ScalePattern, SEMITONES};

/// Number of supported chord qualities.
pub const NUM_QUALITIES: usize = 13;

/// All supported qualities in their fixed declaration order. This order is
/// the tie-break used by the name resolver when several formulas match.
pub const ALL_QUALITIES: [Quality; NUM_QUALITIES] = [
    Quality::Major,
    Quality::Minor,
    Quality::Augmented,
    Quality::Diminished,
    Quality::SuspendedFourth,
    Quality::SuspendedSecond,
    Quality::MajorSeventh,
    Quality::DominantSeventh,
    Quality::MinorSeventh,
    Quality::MinorSeventhFlatFive,
    Quality::DiminishedSeventh,
    Quality::MajorNinth,
    Quality::DominantNinth,
];

/// Interval labels grouped by semitone distance 0..11. Distances 6, 8 and 9
/// each carry two valid names; the rest are singletons.
const INTERVAL_LABELS: [&[Interval]; SEMITONES as usize] = [
    &[Interval::PerfectUnison],
    &[Interval::MinorSecond],
    &[Interval::MajorSecond],
    &[Interval::MinorThird],
    &[Interval::MajorThird],
    &[Interval::PerfectFourth],
    &[Interval::Tritone, Interval::DiminishedFifth],
    &[Interval::PerfectFifth],
    &[Interval::MinorSixth, Interval::AugmentedFifth],
    &[Interval::MajorSixth, Interval::DiminishedSeventh],
    &[Interval::MinorSeventh],
    &[Interval::MajorSeventh],
];

/// Error raised when a quality name misses the formula table.
#[derive(Debug, Error)]
#[error("unknown chord quality `{0}`")]
pub struct UnknownQualityError(
    /// The rejected quality name.
    pub String,
);

/// Conventional western interval names with their semitone distances.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Interval {
    /// Perfect unison, 0 semitones.
    PerfectUnison,
    /// Minor second, 1 semitone.
    MinorSecond,
    /// Major second, 2 semitones.
    MajorSecond,
    /// Minor third, 3 semitones.
    MinorThird,
    /// Major third, 4 semitones.
    MajorThird,
    /// Perfect fourth, 5 semitones.
    PerfectFourth,
    /// Tritone, 6 semitones.
    Tritone,
    /// Diminished fifth, 6 semitones (same distance as the tritone).
    DiminishedFifth,
    /// Perfect fifth, 7 semitones.
    PerfectFifth,
    /// Minor sixth, 8 semitones.
    MinorSixth,
    /// Augmented fifth, 8 semitones (same distance as the minor sixth).
    AugmentedFifth,
    /// Major sixth, 9 semitones.
    MajorSixth,
    /// Diminished seventh, 9 semitones (same distance as the major sixth).
    DiminishedSeventh,
    /// Minor seventh, 10 semitones.
    MinorSeventh,
    /// Major seventh, 11 semitones.
    MajorSeventh,
    /// Major ninth, 14 semitones; a compound interval, one octave above
    /// the major second.
    MajorNinth,
}

impl Interval {
    /// Raw semitone distance, compound intervals not reduced.
    pub const fn semitones(self) -> u8 {
        match self {
            Interval::PerfectUnison => 0,
            Interval::MinorSecond => 1,
            Interval::MajorSecond => 2,
            Interval::MinorThird => 3,
            Interval::MajorThird => 4,
            Interval::PerfectFourth => 5,
            Interval::Tritone | Interval::DiminishedFifth => 6,
            Interval::PerfectFifth => 7,
            Interval::MinorSixth | Interval::AugmentedFifth => 8,
            Interval::MajorSixth | Interval::DiminishedSeventh => 9,
            Interval::MinorSeventh => 10,
            Interval::MajorSeventh => 11,
            Interval::MajorNinth => 14,
        }
    }

    /// Semitone distance reduced into one octave (14 resolves to 2).
    pub const fn pitch_class(self) -> u8 {
        self.semitones() % SEMITONES
    }

    /// Conventional name, e.g. `"perfect fifth"`.
    pub const fn label(self) -> &'static str {
        match self {
            Interval::PerfectUnison => "perfect unison",
            Interval::MinorSecond => "minor second",
            Interval::MajorSecond => "major second",
            Interval::MinorThird => "minor third",
            Interval::MajorThird => "major third",
            Interval::PerfectFourth => "perfect fourth",
            Interval::Tritone => "tritone",
            Interval::DiminishedFifth => "diminished fifth",
            Interval::PerfectFifth => "perfect fifth",
            Interval::MinorSixth => "minor sixth",
            Interval::AugmentedFifth => "augmented fifth",
            Interval::MajorSixth => "major sixth",
            Interval::DiminishedSeventh => "diminished seventh",
            Interval::MinorSeventh => "minor seventh",
            Interval::MajorSeventh => "major seventh",
            Interval::MajorNinth => "major ninth",
        }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Every interval label at `semitones` distance (reduced into one octave).
/// Distances 6, 8 and 9 return two labels, the rest one.
pub const fn labels_for(semitones: u8) -> &'static [Interval] {
    INTERVAL_LABELS[(semitones % SEMITONES) as usize]
}

/// Supported chord qualities, each defined by its interval tuple from
/// the root.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Quality {
    /// Major triad (0, 4, 7).
    Major,
    /// Minor triad (0, 3, 7).
    Minor,
    /// Augmented triad (0, 4, 8).
    Augmented,
    /// Diminished triad (0, 3, 6).
    Diminished,
    /// Suspended fourth (0, 5, 7).
    SuspendedFourth,
    /// Suspended second (0, 2, 7).
    SuspendedSecond,
    /// Major seventh (0, 4, 7, 11).
    MajorSeventh,
    /// Dominant seventh (0, 4, 7, 10).
    DominantSeventh,
    /// Minor seventh (0, 3, 7, 10).
    MinorSeventh,
    /// Minor seventh flat five (0, 3, 6, 10).
    MinorSeventhFlatFive,
    /// Diminished seventh (0, 3, 6, 9).
    DiminishedSeventh,
    /// Major ninth (0, 4, 7, 11, 14).
    MajorNinth,
    /// Dominant ninth (0, 4, 7, 10, 14).
    DominantNinth,
}

impl Quality {
    /// The ordered interval tuple defining this quality's note set.
    pub const fn intervals(self) -> &'static [Interval] {
        use Interval::*;
        match self {
            Quality::Major => &[PerfectUnison, MajorThird, PerfectFifth],
            Quality::Minor => &[PerfectUnison, MinorThird, PerfectFifth],
            Quality::Augmented => &[PerfectUnison, MajorThird, AugmentedFifth],
            Quality::Diminished => &[PerfectUnison, MinorThird, DiminishedFifth],
            Quality::SuspendedFourth => &[PerfectUnison, PerfectFourth, PerfectFifth],
            Quality::SuspendedSecond => &[PerfectUnison, MajorSecond, PerfectFifth],
            Quality::MajorSeventh => {
                &[PerfectUnison, MajorThird, PerfectFifth, MajorSeventh]
            }
            Quality::DominantSeventh => {
                &[PerfectUnison, MajorThird, PerfectFifth, MinorSeventh]
            }
            Quality::MinorSeventh => {
                &[PerfectUnison, MinorThird, PerfectFifth, MinorSeventh]
            }
            Quality::MinorSeventhFlatFive => {
                &[PerfectUnison, MinorThird, DiminishedFifth, MinorSeventh]
            }
            Quality::DiminishedSeventh => {
                &[PerfectUnison, MinorThird, DiminishedFifth, MajorSixth]
            }
            Quality::MajorNinth => {
                &[PerfectUnison, MajorThird, PerfectFifth, MajorSeventh, MajorNinth]
            }
            Quality::DominantNinth => {
                &[PerfectUnison, MajorThird, PerfectFifth, MinorSeventh, MajorNinth]
            }
        }
    }

    /// The formula's pitch-class signature: interval values reduced into
    /// one octave and sorted ascending. Two qualities never share a
    /// signature, which is what makes name resolution deterministic.
    pub fn signature(self) -> Vec<u8> {
        let mut sig: Vec<u8> = self.intervals().iter().map(|iv| iv.pitch_class()).collect();
        sig.sort_unstable();
        sig
    }

    /// Canonical table name, e.g. `"minor7b5"`.
    pub const fn name(self) -> &'static str {
        match self {
            Quality::Major => "major",
            Quality::Minor => "minor",
            Quality::Augmented => "aug",
            Quality::Diminished => "dim",
            Quality::SuspendedFourth => "sus4",
            Quality::SuspendedSecond => "sus2",
            Quality::MajorSeventh => "major7",
            Quality::DominantSeventh => "dom7",
            Quality::MinorSeventh => "minor7",
            Quality::MinorSeventhFlatFive => "minor7b5",
            Quality::DiminishedSeventh => "dim7",
            Quality::MajorNinth => "major9",
            Quality::DominantNinth => "dom9",
        }
    }

    /// Look a quality up by its canonical table name.
    pub fn from_name(name: &str) -> Result<Quality, UnknownQualityError> {
        ALL_QUALITIES
            .into_iter()
            .find(|q| q.name() == name)
            .ok_or_else(|| UnknownQualityError(name.to_string()))
    }

    /// Parent-scale family used when deciding which unused strings may
    /// ring open: minor-third qualities take the natural minor scale,
    /// everything else the major scale.
    pub const fn family(self) -> ScalePattern {
        match self {
            Quality::Minor
            | Quality::Diminished
            | Quality::MinorSeventh
            | Quality::MinorSeventhFlatFive
            | Quality::DiminishedSeventh => ScalePattern::Minor,
            _ => ScalePattern::Major,
        }
    }
}

impl Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The chord's note set: the root's scale applied in reverse
/// (distance → pitch) for each interval of the quality's tuple,
/// in formula order.
pub fn chord_notes(root: Pitch, quality: Quality) -> Vec<Pitch> {
    let scale = ChromaticScale::new(root);
    quality
        .intervals()
        .iter()
        .map(|iv| scale.pitch_at(iv.pitch_class()))
        .collect()
}
