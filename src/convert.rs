//! Converting an analyzed score into a reconciled chart.
//!
//! [`SusScore`] == [tempo] ==> [`tempo::TempoMap`] == [reconcile] ==>
//! [`Chart`] (in [`ConvertOutput`])
//!
//! The conversion is a pure, synchronous transformation of one score into
//! one chart. It owns its intermediate state, so independent scores may be
//! converted concurrently without coordination.

pub mod classify;
pub mod reconcile;
pub mod tempo;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    chart::Chart,
    convert::{classify::NoteSource, tempo::TempoMap},
    score::{GridPosition, SusScore},
};

/// An error that aborts the conversion of the current score.
///
/// Conversion fails fast with no partial output; the variants carry the
/// grid coordinates needed to locate the offending chart data.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum ConvertError {
    /// A measure declares a BPM that is not a positive finite number.
    #[error("invalid BPM {bpm} at measure {measure}")]
    InvalidTempo {
        /// The measure carrying the bad value.
        measure: u32,
        /// The declared BPM.
        bpm: f64,
    },
    /// A measure declares a beat count that is negative or not finite.
    #[error("invalid beat count {beats} at measure {measure}")]
    InvalidBeatCount {
        /// The measure carrying the bad value.
        measure: u32,
        /// The declared beat count.
        beats: f64,
    },
    /// The BPM and beat tables are not index-aligned.
    #[error("tempo tables misaligned: {bpms} BPM entries, {beats} beat entries")]
    BeatTableMismatch {
        /// Number of BPM entries.
        bpms: usize,
        /// Number of beat entries.
        beats: usize,
    },
    /// A note is declared in a measure beyond the tempo tables.
    #[error("no tempo entry for note at {position}")]
    MeasureOutOfRange {
        /// Where the note is declared.
        position: GridPosition,
    },
    /// Two notes of the same stream share a grid position. Silently keeping
    /// either one would corrupt the chart, so the conversion aborts.
    #[error("duplicate {source} note at {position}")]
    DuplicateCoordinate {
        /// The stream both notes were declared in.
        source: NoteSource,
        /// The shared grid position.
        position: GridPosition,
    },
}

/// A non-fatal finding recorded while converting.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum ConvertWarning {
    /// A raw note did not match any classification rule of its stream. The
    /// note is retained in the output with the `unknown` class.
    #[error("unknown {source} note type {note_type} at {position}")]
    UnknownNoteType {
        /// The stream the note was declared in.
        source: NoteSource,
        /// The unrecognized type discriminator.
        note_type: u8,
        /// Where the note is declared.
        position: GridPosition,
    },
}

/// Options of the conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Ticks per beat of the analyzer's grid.
    pub resolution: u32,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            resolution: tempo::DEFAULT_RESOLUTION,
        }
    }
}

/// Output of converting a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct ConvertOutput {
    /// The reconciled chart.
    pub chart: Chart,
    /// Warnings recorded during the conversion.
    pub warnings: Vec<ConvertWarning>,
}

/// Converts an analyzed score with the default grid resolution.
///
/// # Errors
///
/// Returns a [`ConvertError`] when the tempo tables are malformed, a note
/// lies beyond them, or one stream declares two notes at the same grid
/// position.
///
/// # Example
///
/// ```
/// use sus_rs::{convert::convert_score, score::SusScore};
///
/// let score = SusScore {
///     bpms: vec![120.0, 150.0],
///     beats: vec![4.0, 4.0],
///     ..SusScore::default()
/// };
/// let output = convert_score(&score).expect("tables are aligned");
/// assert!(output.chart.taps.is_empty());
/// ```
pub fn convert_score(score: &SusScore) -> Result<ConvertOutput, ConvertError> {
    convert_score_with_options(score, &ConvertOptions::default())
}

/// Converts an analyzed score with explicit [`ConvertOptions`].
///
/// A step of [`convert_score`].
///
/// # Errors
///
/// Same conditions as [`convert_score`].
pub fn convert_score_with_options(
    score: &SusScore,
    options: &ConvertOptions,
) -> Result<ConvertOutput, ConvertError> {
    let tempo_map = TempoMap::from_score(score, options.resolution)?;
    reconcile::reconcile(score, &tempo_map)
}
