//! Chord Name Resolver
//!
//! The inverse of shape generation: infer a chord's root pitch and
//! quality from a fret-diagram. The root is the lowest-register sounded
//! note; the remaining pitches become semitone distances whose interval
//! labels are matched, ambiguity and all, against the formula table.

use std::fmt::Display;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::diagram::{ChordDiagram, FingerPosition};
use crate::formula::{labels_for, Interval, Quality, ALL_QUALITIES};
use crate::fretboard::{Fretboard, InvalidStringError};
use crate::pitch::{ChromaticScale, Pitch};

/// Errors raised while resolving a diagram to a chord name.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Every string of the diagram was muted, so there is no root to
    /// identify.
    #[error("diagram sounds no strings")]
    NoSoundedStrings,

    /// A position referenced a string outside the instrument.
    #[error(transparent)]
    InvalidString(#[from] InvalidStringError),
}

/// A resolved chord: the identified root and, when a formula matched,
/// its quality. `quality` of `None` means the diagram is harmonically
/// valid but matches no known formula ("unidentified"), which is a
/// reportable result, not a failure.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedChord {
    /// The inferred root pitch.
    pub root: Pitch,
    /// The sounded position the root was taken from.
    pub root_position: FingerPosition,
    /// The matched quality, or `None` when no formula matched.
    pub quality: Option<Quality>,
}

impl ResolvedChord {
    /// The quality's table name, or `"unidentified"`.
    pub fn quality_name(&self) -> &'static str {
        self.quality.map(Quality::name).unwrap_or("unidentified")
    }
}

impl Display for ResolvedChord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.root, self.quality_name())
    }
}

/// Infers root and quality from chord diagrams over one fretboard.
pub struct ChordNameResolver {
    fretboard: Fretboard,
}

impl ChordNameResolver {
    /// Resolver over the default fretboard (standard tuning, 13 frets).
    pub fn new() -> Self {
        ChordNameResolver {
            fretboard: Fretboard::new(),
        }
    }

    /// Resolver over a custom fretboard.
    pub fn with_fretboard(fretboard: Fretboard) -> Self {
        ChordNameResolver { fretboard }
    }

    /// Resolve a diagram to its root pitch and quality.
    ///
    /// The root is the fretted-or-open position with the maximum string
    /// number (the lowest sounded register); this deliberately
    /// misidentifies slash/inverted chords. Every other sounded pitch
    /// contributes its full set of interval labels for its distance from
    /// the root, the label combinations are enumerated, and the first
    /// formula (in declaration order) whose signature matches a
    /// combination wins. No match resolves to an unidentified quality.
    pub fn resolve(&self, diagram: &ChordDiagram) -> Result<ResolvedChord, ResolveError> {
        let root_position = diagram
            .sounded_positions()
            .max_by_key(|pos| pos.string)
            .ok_or(ResolveError::NoSoundedStrings)?;
        let root = self.fretboard.note_at(root_position.string, root_position.fret)?;
        let scale = ChromaticScale::new(root);

        // One entry per distinct sounded pitch; the root always carries
        // the perfect unison alone, and repeats of a pitch on other
        // strings collapse into the same distance.
        let mut entries: Vec<(Pitch, &'static [Interval])> = vec![(root, labels_for(0))];
        for pos in diagram.sounded_positions() {
            let pitch = self.fretboard.note_at(pos.string, pos.fret)?;
            if entries.iter().any(|(seen, _)| *seen == pitch) {
                continue;
            }
            entries.push((pitch, labels_for(scale.distance(pitch))));
        }

        let label_sets = entries.iter().map(|(_, labels)| labels.iter().copied());
        for combination in label_sets.multi_cartesian_product() {
            let mut signature: Vec<u8> =
                combination.iter().map(|iv| iv.pitch_class()).collect();
            signature.sort_unstable();

            if let Some(quality) = ALL_QUALITIES
                .into_iter()
                .find(|q| q.signature() == signature)
            {
                return Ok(ResolvedChord {
                    root,
                    root_position,
                    quality: Some(quality),
                });
            }
        }

        Ok(ResolvedChord {
            root,
            root_position,
            quality: None,
        })
    }
}

impl Default for ChordNameResolver {
    fn default() -> Self {
        Self::new()
    }
}
