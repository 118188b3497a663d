//! Prelude module for the SUS converter.
//!
//! Re-exports the public types so `use sus_rs::prelude::*;` imports the
//! whole surface at once.

pub use crate::{
    chart::{Chart, LegacyChart, Note, SlidePath},
    convert::{
        ConvertError, ConvertOptions, ConvertOutput, ConvertWarning, convert_score,
        convert_score_with_options,
        classify::{NoteClass, NoteSource, classify_air, classify_short, classify_slide},
        reconcile::reconcile,
        tempo::{DEFAULT_RESOLUTION, TempoMap},
    },
    score::{GridPosition, RawNote, SusScore},
};
