//! Classification of raw note events into semantic note classes.
//!
//! Each stream has its own lookup from (lane, type discriminator) to a
//! class. The lookups are pure data, kept as match expressions so new type
//! codes of the evolving chart format land in one place. Combinations not
//! covered by a rule degrade to [`NoteClass::Unknown`] instead of failing —
//! a malformed chart still converts, with warnings.

use serde::{Deserialize, Serialize};

/// The stream a note was declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteSource {
    /// The tap-family stream.
    Short,
    /// The aerial gesture stream.
    Air,
    /// The slide path stream.
    Slide,
}

impl NoteSource {
    /// The wire label of the stream.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Air => "air",
            Self::Slide => "slide",
        }
    }
}

impl std::fmt::Display for NoteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// `NoteSource` is carried in `source`-named fields of the `thiserror`-derived
// `ConvertError`/`ConvertWarning` enums; thiserror unconditionally treats a
// field named `source` as the error source and requires it to implement
// `std::error::Error`. The field name is part of the documented wire contract
// (SPEC_FULL.md), so satisfy the bound rather than rename it.
impl std::error::Error for NoteSource {}

/// Semantic class of a reconciled note.
///
/// Serializes to the exact labels of the original output contract, spaces
/// included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteClass {
    /// Skill trigger, declared on lane 0.
    #[serde(rename = "skill")]
    Skill,
    /// Fever chance marker, declared on lane 15.
    #[serde(rename = "fever chance")]
    FeverChance,
    /// Fever marker, declared on lane 15.
    #[serde(rename = "fever")]
    Fever,
    /// Plain tap on a playable lane.
    #[serde(rename = "tap")]
    Tap,
    /// Yellow (critical) tap on a playable lane.
    #[serde(rename = "yellow tap")]
    YellowTap,
    /// Combo marker overlaid on a slide path. Contributes no path geometry.
    #[serde(rename = "diamond")]
    Diamond,
    /// Upward flick.
    #[serde(rename = "flick")]
    Flick,
    /// Upward flick, angled left.
    #[serde(rename = "flick left")]
    FlickLeft,
    /// Upward flick, angled right.
    #[serde(rename = "flick right")]
    FlickRight,
    /// Downward gesture bending a slide left.
    #[serde(rename = "slide bend left")]
    SlideBendLeft,
    /// Downward gesture on a slide.
    #[serde(rename = "slide bend middle")]
    SlideBendMiddle,
    /// Downward gesture bending a slide right.
    #[serde(rename = "slide bend right")]
    SlideBendRight,
    /// First note of a slide path.
    #[serde(rename = "slide head")]
    SlideHead,
    /// Last note of a slide path.
    #[serde(rename = "slide tail")]
    SlideTail,
    /// Interior waypoint carrying a combo diamond, visually drawn.
    #[serde(rename = "slide waypoint hvcombo")]
    SlideWaypointHvcombo,
    /// Invisible relay waypoint, no combo.
    #[serde(rename = "slide waypoint nocombo")]
    SlideWaypointNocombo,
    /// No classification rule matched.
    #[serde(rename = "unknown")]
    Unknown,
}

impl NoteClass {
    /// The wire label of the class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Skill => "skill",
            Self::FeverChance => "fever chance",
            Self::Fever => "fever",
            Self::Tap => "tap",
            Self::YellowTap => "yellow tap",
            Self::Diamond => "diamond",
            Self::Flick => "flick",
            Self::FlickLeft => "flick left",
            Self::FlickRight => "flick right",
            Self::SlideBendLeft => "slide bend left",
            Self::SlideBendMiddle => "slide bend middle",
            Self::SlideBendRight => "slide bend right",
            Self::SlideHead => "slide head",
            Self::SlideTail => "slide tail",
            Self::SlideWaypointHvcombo => "slide waypoint hvcombo",
            Self::SlideWaypointNocombo => "slide waypoint nocombo",
            Self::Unknown => "unknown",
        }
    }

    /// Returns `true` if no classification rule matched the raw note.
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for NoteClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a short-stream note by lane and type discriminator.
///
/// Lanes 2 through 13 are the playable field; lane 0 and lane 15 are the
/// skill and fever channels.
#[must_use]
pub const fn classify_short(lane: u8, note_type: u8) -> NoteClass {
    match (lane, note_type) {
        (0, 4) => NoteClass::Skill,
        (15, 2) => NoteClass::FeverChance,
        (15, 1) => NoteClass::Fever,
        (2..=13, 1) => NoteClass::Tap,
        (2..=13, 2) => NoteClass::YellowTap,
        (2..=13, 3) => NoteClass::Diamond,
        _ => NoteClass::Unknown,
    }
}

/// Classifies an air-stream note by type discriminator.
#[must_use]
pub const fn classify_air(note_type: u8) -> NoteClass {
    match note_type {
        1 => NoteClass::Flick,
        2 => NoteClass::SlideBendMiddle,
        3 => NoteClass::FlickLeft,
        4 => NoteClass::FlickRight,
        5 => NoteClass::SlideBendLeft,
        6 => NoteClass::SlideBendRight,
        _ => NoteClass::Unknown,
    }
}

/// Classifies a slide-stream note by its position within the path.
///
/// Only the first element can be a head and only the last a tail; waypoint
/// codes apply at any position. A type-3 waypoint coinciding with a bend is
/// purely cosmetic and never alters path geometry or ordering.
#[must_use]
pub const fn classify_slide(index: usize, path_len: usize, note_type: u8) -> NoteClass {
    if index == 0 && note_type == 1 {
        NoteClass::SlideHead
    } else if index + 1 == path_len && note_type == 2 {
        NoteClass::SlideTail
    } else {
        match note_type {
            3 => NoteClass::SlideWaypointHvcombo,
            5 => NoteClass::SlideWaypointNocombo,
            _ => NoteClass::Unknown,
        }
    }
}

#[test]
fn short_lookup() {
    assert_eq!(classify_short(0, 4), NoteClass::Skill);
    assert_eq!(classify_short(15, 2), NoteClass::FeverChance);
    assert_eq!(classify_short(15, 1), NoteClass::Fever);
    assert_eq!(classify_short(2, 1), NoteClass::Tap);
    assert_eq!(classify_short(13, 2), NoteClass::YellowTap);
    assert_eq!(classify_short(7, 3), NoteClass::Diamond);
    // off the playable field or unmapped codes
    assert_eq!(classify_short(1, 1), NoteClass::Unknown);
    assert_eq!(classify_short(14, 1), NoteClass::Unknown);
    assert_eq!(classify_short(0, 1), NoteClass::Unknown);
    assert_eq!(classify_short(5, 9), NoteClass::Unknown);
}

#[test]
fn air_lookup() {
    assert_eq!(classify_air(1), NoteClass::Flick);
    assert_eq!(classify_air(2), NoteClass::SlideBendMiddle);
    assert_eq!(classify_air(3), NoteClass::FlickLeft);
    assert_eq!(classify_air(4), NoteClass::FlickRight);
    assert_eq!(classify_air(5), NoteClass::SlideBendLeft);
    assert_eq!(classify_air(6), NoteClass::SlideBendRight);
    assert_eq!(classify_air(0), NoteClass::Unknown);
    assert_eq!(classify_air(7), NoteClass::Unknown);
}

#[test]
fn slide_lookup_is_positional() {
    assert_eq!(classify_slide(0, 3, 1), NoteClass::SlideHead);
    assert_eq!(classify_slide(2, 3, 2), NoteClass::SlideTail);
    assert_eq!(classify_slide(1, 3, 3), NoteClass::SlideWaypointHvcombo);
    assert_eq!(classify_slide(1, 3, 5), NoteClass::SlideWaypointNocombo);
    // head/tail codes lose their meaning away from the path ends
    assert_eq!(classify_slide(1, 3, 1), NoteClass::Unknown);
    assert_eq!(classify_slide(0, 3, 2), NoteClass::Unknown);
    // a single-note path: the head rule wins over the tail rule
    assert_eq!(classify_slide(0, 1, 1), NoteClass::SlideHead);
    assert_eq!(classify_slide(0, 1, 2), NoteClass::SlideTail);
}

#[test]
fn labels_round_trip_via_serde() {
    let label = serde_json::to_string(&NoteClass::SlideWaypointNocombo).unwrap();
    assert_eq!(label, "\"slide waypoint nocombo\"");
    let back: NoteClass = serde_json::from_str(&label).unwrap();
    assert_eq!(back, NoteClass::SlideWaypointNocombo);
    assert_eq!(NoteClass::SlideWaypointNocombo.to_string(), "slide waypoint nocombo");
}
