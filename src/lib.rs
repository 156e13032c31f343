//! # chord_shapes
//!
//! Fretted-instrument chord modeling with two inverse operations: derive
//! every physically playable fret-diagram for a chord symbol, and resolve
//! a fret-diagram back to its root pitch and chord quality.
//!
//! ## Example
//! ```rust
//! use chord_shapes::{ChordNameResolver, ShapeGenerator};
//!
//! fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1) Derive: chord symbol -> playable diagrams
//!     let generator = ShapeGenerator::new();
//!     let diagrams = generator.diagrams_for_symbol("Am")?;
//!     println!("{} playable shapes for Am", diagrams.len());
//!
//!     // 2) Resolve: diagram -> root + quality
//!     let resolver = ChordNameResolver::new();
//!     let resolved = resolver.resolve(&diagrams[0])?;
//!     println!("that shape reads as {resolved}");
//!
//!     Ok(())
//! }
//! ```
//!
//! An empty derivation result (no playable shape) and an unidentified
//! quality are both ordinary values, not errors; errors are reserved for
//! malformed input such as unknown pitch names or out-of-range strings.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Chord diagrams and finger positions.
pub use diagram::{ChordDiagram, DiagramError, FingerPosition};

/// Interval and chord-formula tables.
pub use formula::{
    chord_notes, labels_for, Interval, Quality, UnknownQualityError, ALL_QUALITIES,
};

/// Fretboard model.
pub use fretboard::{
    Fretboard, FretboardBuilder, InvalidStringError, DEFAULT_MAX_FRET, NUM_STRINGS,
    STANDARD_TUNING,
};

/// Pitch model.
pub use pitch::{
    scale_pitches, ChromaticScale, Pitch, ScalePattern, UnknownPitchError, CHROMATIC_ORDER,
    SEMITONES,
};

/// Diagram-to-name resolution.
pub use resolver::{ChordNameResolver, ResolveError, ResolvedChord};

/// Shape derivation.
pub use shapes::ShapeGenerator;

/// Chord symbol parsing.
pub use symbol::{parse_symbol, ChordSyntaxError};

/// Chord diagram data model.
pub mod diagram;

/// Interval and chord formula tables.
pub mod formula;

/// Fretboard model module.
pub mod fretboard;

/// Pitch model module.
pub mod pitch;

/// Chord name resolution module.
pub mod resolver;

/// Shape generation module.
pub mod shapes;

/// Chord symbol parser module.
pub mod symbol;

/// Derive every playable diagram for `symbol` on the default fretboard
/// (standard tuning, 13 frets).
pub fn diagrams_for(symbol: &str) -> Result<Vec<ChordDiagram>, ChordSyntaxError> {
    ShapeGenerator::new().diagrams_for_symbol(symbol)
}

/// Resolve `diagram` to its root pitch and quality on the default
/// fretboard (standard tuning, 13 frets).
pub fn resolve_diagram(diagram: &ChordDiagram) -> Result<ResolvedChord, ResolveError> {
    ChordNameResolver::new().resolve(diagram)
}
