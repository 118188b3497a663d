//! The application-ready note model produced by the converter.
//!
//! Field names of these types follow the JSON contract of existing
//! downstream chart consumers exactly: short keys such as `t` and `r` are
//! kept as-is rather than renamed on the wire.
//!
//! Two shapes are offered. [`Chart`] separates standalone notes from slide
//! paths; [`LegacyChart`] is the older flattened shape where every note also
//! appears in one timestamp-sorted list. Both carry the same [`Note`] schema.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::convert::classify::{NoteClass, NoteSource};

/// A reconciled note with an absolute timestamp.
///
/// Created during classification and completed during reconciliation. Once
/// placed in a [`Chart`] it is not mutated further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Absolute timestamp in milliseconds, floored.
    pub t: u64,
    /// Sequential identifier in final timestamp order. Attached sub-notes
    /// (consumed duplicates and diamond overlays) carry none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    /// The measure the note is in.
    pub measure: u32,
    /// The tick offset within the measure.
    pub tick: u32,
    /// The lane the note is placed on. The first playable lane is 2.
    pub lane: u8,
    /// Lane span, when the raw stream carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u8>,
    /// The stream the note was declared in.
    #[serde(rename = "r")]
    pub source: NoteSource,
    /// Semantic class of the note.
    #[serde(rename = "type")]
    pub class: NoteClass,
    /// Slide group the note belongs to, for slide-stream notes.
    #[serde(
        rename = "slideId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub slide_id: Option<u32>,
    /// Short note declared at the same grid position, consumed by this one.
    #[serde(
        rename = "shortNote",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub short_note: Option<Box<Note>>,
    /// Air note declared at the same grid position, consumed by this one.
    #[serde(
        rename = "airNote",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub air_note: Option<Box<Note>>,
    /// Diamond overlay declared on this slide waypoint. Unlike a consumed
    /// short note, a diamond never suppresses the waypoint it decorates.
    #[serde(
        rename = "diamondNote",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub diamond_note: Option<Box<Note>>,
}

impl Note {
    /// Returns the grid position the note was declared at.
    #[must_use]
    pub const fn position(&self) -> crate::score::GridPosition {
        crate::score::GridPosition {
            measure: self.measure,
            tick: self.tick,
            lane: self.lane,
        }
    }
}

/// One slide path: the slide notes sharing a slide group id, ordered by
/// ascending timestamp.
///
/// Serializes transparently as a JSON array of notes, so `slides` keeps the
/// `Note[][]` nesting of the original output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlidePath(pub Vec<Note>);

impl SlidePath {
    /// The notes of the path in timestamp order.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.0
    }

    /// The slide group id shared by the path's notes. `None` for an empty
    /// path.
    #[must_use]
    pub fn group_id(&self) -> Option<u32> {
        self.0.first().and_then(|note| note.slide_id)
    }

    /// Number of notes in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the path has no notes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The reconciled chart: standalone notes and slide paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart {
    /// Every standalone note, sorted by ascending timestamp.
    pub taps: Vec<Note>,
    /// One path per slide group, indexed by group id, each sorted by
    /// ascending timestamp.
    pub slides: Vec<SlidePath>,
}

impl Chart {
    /// Returns every note of the chart — standalone and slide members —
    /// sorted by timestamp, ties kept in identifier order.
    pub fn all_notes(&self) -> impl Iterator<Item = &Note> {
        self.taps
            .iter()
            .chain(self.slides.iter().flat_map(SlidePath::notes))
            .sorted_by_key(|note| (note.t, note.id))
    }

    /// Total number of notes, slide members included.
    #[must_use]
    pub fn note_count(&self) -> usize {
        self.taps.len() + self.slides.iter().map(SlidePath::len).sum::<usize>()
    }

    /// Converts into the older flattened shape, where slide members are
    /// repeated in the timestamp-sorted top-level list.
    #[must_use]
    pub fn into_legacy(self) -> LegacyChart {
        let Self { taps, slides } = self;
        let mut timestamp_notes: Vec<Note> = slides
            .iter()
            .flat_map(SlidePath::notes)
            .cloned()
            .chain(taps)
            .collect();
        timestamp_notes.sort_by_key(|note| (note.t, note.id));
        LegacyChart {
            timestamp_notes,
            slides: slides.into_iter().map(|path| path.0).collect(),
        }
    }
}

/// The flattened output shape of the original implementation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyChart {
    /// Every note of the chart sorted by timestamp, slide members included.
    #[serde(rename = "timestampNotes")]
    pub timestamp_notes: Vec<Note>,
    /// One list of notes per slide group.
    pub slides: Vec<Vec<Note>>,
}
