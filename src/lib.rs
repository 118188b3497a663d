//! The SUS score note converter.
//!
//! This crate turns a parsed SUS (sliding universal score) chart into a
//! normalized, timestamped note model ready for application use. Lexing the
//! chart text is not done here: an external chart analyzer provides the
//! [`score::SusScore`] structure (per-measure BPM and beat tables plus the
//! raw short/air/slide event streams), and this crate performs the semantic
//! reconciliation on top of it.
//!
//! `score` module defines the input contract and the grid coordinate key.
//!
//! `convert` module builds the tempo map, classifies every raw event into a
//! semantic note class and merges the three event streams into one
//! collection, correlating declarations that share a grid position.
//!
//! `chart` module defines the output note model, serializable to the JSON
//! shape consumed by existing downstream chart tools.
//!
//! In detail, our policies are:
//!
//! - Do not parse SUS source text; consume the analyzer's score structure.
//! - Timestamps are integer milliseconds, truncated (floored), reproducible
//!   bit-exactly across implementations.
//! - Unrecognized note type codes degrade to an `unknown` class with a
//!   warning instead of aborting the conversion.
//! - Duplicated declarations inside one stream are a hard error; silently
//!   overwriting them would corrupt the chart.
//!
//! # Example
//!
//! ```
//! use sus_rs::prelude::*;
//!
//! let score = SusScore {
//!     bpms: vec![120.0],
//!     beats: vec![4.0],
//!     short_notes: vec![RawNote {
//!         measure: 0,
//!         tick: 240,
//!         lane: 5,
//!         note_type: 1,
//!         width: Some(3),
//!     }],
//!     air_notes: vec![],
//!     slide_notes: vec![],
//! };
//! let ConvertOutput { chart, warnings } = convert_score(&score).expect("valid tempo tables");
//! assert!(warnings.is_empty());
//! assert_eq!(chart.taps[0].t, 250);
//! ```

pub mod chart;
pub mod convert;
pub mod prelude;
pub mod score;
