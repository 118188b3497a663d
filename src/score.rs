//! Definitions of the analyzed score structure consumed by the converter.
//!
//! The external chart analyzer tokenizes SUS source text and exposes the
//! result as per-measure tempo tables plus three raw event streams. This
//! module mirrors that contract, including the field names of the analyzer's
//! JSON dump so a dumped score can be ingested directly with
//! [`SusScore::from_json`].

use serde::{Deserialize, Serialize};

/// A grid coordinate identifying where a raw note is declared.
///
/// Notes declared in separate streams with equal measure, tick and lane are
/// considered the same grid position and are candidates for merging during
/// reconciliation. Equality is exact composite comparison over the three
/// fields; distinct triples never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    /// The measure the note is in.
    pub measure: u32,
    /// The tick offset within the measure.
    pub tick: u32,
    /// The playfield lane, or a special channel such as lane 0 (skill) and
    /// lane 15 (fever). The first playable lane is 2.
    pub lane: u8,
}

impl std::fmt::Display for GridPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "measure {}, tick {}, lane {}",
            self.measure, self.tick, self.lane
        )
    }
}

/// A raw note event as declared in one of the analyzer's streams.
///
/// The meaning of `note_type` is stream-specific; see
/// [`crate::convert::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawNote {
    /// The measure the note is in.
    pub measure: u32,
    /// The tick offset within the measure.
    pub tick: u32,
    /// The lane the note is placed on.
    pub lane: u8,
    /// Stream-specific type discriminator.
    #[serde(rename = "noteType")]
    pub note_type: u8,
    /// Lane span of the note, when the stream carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u8>,
}

impl RawNote {
    /// Returns the grid position the note is declared at.
    #[must_use]
    pub const fn position(&self) -> GridPosition {
        GridPosition {
            measure: self.measure,
            tick: self.tick,
            lane: self.lane,
        }
    }
}

/// The analyzed score: tempo tables and raw event streams.
///
/// `bpms` and `beats` are index-aligned, one pair per measure, 0-indexed.
/// Each entry of `slide_notes` is one slide path in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SusScore {
    /// BPM governing each measure.
    #[serde(rename = "BPMs")]
    pub bpms: Vec<f64>,
    /// Beat count of each measure.
    #[serde(rename = "BEATs")]
    pub beats: Vec<f64>,
    /// Tap-family events.
    #[serde(rename = "shortNotes")]
    pub short_notes: Vec<RawNote>,
    /// Aerial gesture markers.
    #[serde(rename = "airNotes")]
    pub air_notes: Vec<RawNote>,
    /// Slide paths, each an ordered list of raw slide notes.
    #[serde(rename = "slideNotes")]
    pub slide_notes: Vec<Vec<RawNote>>,
}

impl SusScore {
    /// Deserializes a score from the analyzer's JSON dump.
    ///
    /// Unknown fields in the document are ignored, so dumps carrying extra
    /// analyzer metadata still load.
    ///
    /// # Errors
    ///
    /// Returns the underlying deserialization error when the document is not
    /// valid JSON or does not match the score shape.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }
}
