//! Chord Symbol Parser
//!
//! Turns a textual chord symbol like `"Dm7"` or `"Bbmaj7"` into a
//! (root pitch, quality) pair. The root takes one character, or two when
//! the second is an accidental; flats normalize to the canonical sharp
//! spelling. The remaining suffix is matched against a fixed alias table.

use thiserror::Error;

use crate::formula::Quality;
use crate::pitch::Pitch;

/// Errors raised for unparseable chord symbols.
#[derive(Debug, Error)]
pub enum ChordSyntaxError {
    /// The symbol was empty.
    #[error("empty chord symbol")]
    Empty,

    /// The leading character(s) did not name a pitch.
    #[error("unrecognized root note `{root}`")]
    UnknownRoot {
        /// The rejected root spelling.
        root: String,
    },

    /// The part after the root did not name a known quality.
    #[error("unrecognized chord suffix `{suffix}`")]
    UnknownSuffix {
        /// The rejected suffix.
        suffix: String,
    },
}

/// Parse a chord symbol into its root pitch and quality.
///
/// # Examples
/// ```
/// use chord_shapes::{parse_symbol, Pitch, Quality};
///
/// assert_eq!(parse_symbol("D").unwrap(), (Pitch::D, Quality::Major));
/// assert_eq!(parse_symbol("Am").unwrap(), (Pitch::A, Quality::Minor));
/// assert_eq!(parse_symbol("Bbm7").unwrap(), (Pitch::As, Quality::MinorSeventh));
/// assert_eq!(parse_symbol("F#7").unwrap(), (Pitch::Fs, Quality::DominantSeventh));
/// ```
pub fn parse_symbol(symbol: &str) -> Result<(Pitch, Quality), ChordSyntaxError> {
    let mut chars = symbol.char_indices();
    let Some((_, first)) = chars.next() else {
        return Err(ChordSyntaxError::Empty);
    };

    let (root_str, suffix) = match chars.next() {
        Some((idx, accidental)) if accidental == '#' || accidental == 'b' => {
            let end = idx + accidental.len_utf8();
            (&symbol[..end], &symbol[end..])
        }
        Some((idx, _)) => (&symbol[..idx], &symbol[idx..]),
        None => (symbol, ""),
    };

    if !first.is_ascii_uppercase() {
        return Err(ChordSyntaxError::UnknownRoot {
            root: root_str.to_string(),
        });
    }
    let root: Pitch = root_str.parse().map_err(|_| ChordSyntaxError::UnknownRoot {
        root: root_str.to_string(),
    })?;

    let quality = match suffix {
        "" | "major" | "maj" | "M" => Quality::Major,
        "m" | "min" | "minor" | "-" => Quality::Minor,
        "aug" | "+" => Quality::Augmented,
        "dim" | "°" => Quality::Diminished,
        "sus4" => Quality::SuspendedFourth,
        "sus2" => Quality::SuspendedSecond,
        "maj7" | "M7" | "major7" => Quality::MajorSeventh,
        "7" | "dom7" => Quality::DominantSeventh,
        "m7" | "min7" | "minor7" | "-7" => Quality::MinorSeventh,
        "m7b5" | "min7b5" | "minor7b5" => Quality::MinorSeventhFlatFive,
        "dim7" | "°7" => Quality::DiminishedSeventh,
        "maj9" | "M9" | "major9" => Quality::MajorNinth,
        "9" | "dom9" => Quality::DominantNinth,
        other => {
            return Err(ChordSyntaxError::UnknownSuffix {
                suffix: other.to_string(),
            })
        }
    };

    Ok((root, quality))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roots_with_accidentals() {
        assert_eq!(parse_symbol("F#").unwrap(), (Pitch::Fs, Quality::Major));
        assert_eq!(parse_symbol("Bb").unwrap(), (Pitch::As, Quality::Major));
        assert_eq!(parse_symbol("Cb").unwrap(), (Pitch::B, Quality::Major));
        assert_eq!(parse_symbol("G#m").unwrap(), (Pitch::Gs, Quality::Minor));
    }

    #[test]
    fn suffix_aliases() {
        assert_eq!(parse_symbol("Cmaj7").unwrap(), (Pitch::C, Quality::MajorSeventh));
        assert_eq!(parse_symbol("CM7").unwrap(), (Pitch::C, Quality::MajorSeventh));
        assert_eq!(parse_symbol("G7").unwrap(), (Pitch::G, Quality::DominantSeventh));
        assert_eq!(parse_symbol("D-7").unwrap(), (Pitch::D, Quality::MinorSeventh));
        assert_eq!(parse_symbol("Asus4").unwrap(), (Pitch::A, Quality::SuspendedFourth));
        assert_eq!(parse_symbol("E+").unwrap(), (Pitch::E, Quality::Augmented));
        assert_eq!(parse_symbol("B°").unwrap(), (Pitch::B, Quality::Diminished));
        assert_eq!(parse_symbol("Am7b5").unwrap(), (Pitch::A, Quality::MinorSeventhFlatFive));
        assert_eq!(parse_symbol("C9").unwrap(), (Pitch::C, Quality::DominantNinth));
    }

    #[test]
    fn malformed_symbols() {
        assert!(matches!(parse_symbol(""), Err(ChordSyntaxError::Empty)));
        assert!(matches!(
            parse_symbol("H"),
            Err(ChordSyntaxError::UnknownRoot { .. })
        ));
        assert!(matches!(
            parse_symbol("dm"),
            Err(ChordSyntaxError::UnknownRoot { .. })
        ));
        assert!(matches!(
            parse_symbol("Cxyz"),
            Err(ChordSyntaxError::UnknownSuffix { .. })
        ));
    }
}
