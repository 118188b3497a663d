//! Tempo map over the measures of a score. It fixes the absolute start time
//! of every measure, so a note's timestamp only needs the BPM governing its
//! own measure on top of it.

use crate::{
    convert::ConvertError,
    score::{GridPosition, SusScore},
};

/// Default ticks per beat of the analyzer's grid.
pub const DEFAULT_RESOLUTION: u32 = 480;

/// Converter from grid coordinates into absolute millisecond timestamps.
///
/// Built once per score from the per-measure BPM and beat tables. The start
/// table holds one more entry than the score has measures: a leading zero
/// sentinel, then one absolute start per measure. It is monotonically
/// non-decreasing by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TempoMap {
    measure_start_ms: Vec<u64>,
    bpms: Vec<f64>,
    resolution: u32,
}

impl TempoMap {
    /// Creates a tempo map from index-aligned BPM and beat tables.
    ///
    /// Each measure contributes `floor((60 / BPM * 1000) * beats)`
    /// milliseconds, accumulated as integers so the table is reproducible
    /// bit-exactly.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::BeatTableMismatch`] when the tables differ in
    ///   length.
    /// - [`ConvertError::InvalidTempo`] when a BPM is not a positive finite
    ///   number.
    /// - [`ConvertError::InvalidBeatCount`] when a beat count is negative or
    ///   not finite. Zero is allowed, as a zero-length measure.
    ///
    /// # Panics
    ///
    /// Panics if `resolution` is 0.
    pub fn new(bpms: &[f64], beats: &[f64], resolution: u32) -> Result<Self, ConvertError> {
        assert!(0 < resolution);
        if bpms.len() != beats.len() {
            return Err(ConvertError::BeatTableMismatch {
                bpms: bpms.len(),
                beats: beats.len(),
            });
        }

        let mut measure_start_ms = Vec::with_capacity(bpms.len() + 1);
        measure_start_ms.push(0);
        let mut accumulated_ms: u64 = 0;
        for (measure, (&bpm, &beat_count)) in bpms.iter().zip(beats).enumerate() {
            if !bpm.is_finite() || bpm <= 0.0 {
                return Err(ConvertError::InvalidTempo {
                    measure: measure as u32,
                    bpm,
                });
            }
            if !beat_count.is_finite() || beat_count < 0.0 {
                return Err(ConvertError::InvalidBeatCount {
                    measure: measure as u32,
                    beats: beat_count,
                });
            }
            accumulated_ms += ((60.0 / bpm * 1000.0) * beat_count).floor() as u64;
            measure_start_ms.push(accumulated_ms);
        }

        Ok(Self {
            measure_start_ms,
            bpms: bpms.to_vec(),
            resolution,
        })
    }

    /// Creates a tempo map from the tables of a score.
    ///
    /// # Errors
    ///
    /// Same conditions as [`TempoMap::new`].
    pub fn from_score(score: &SusScore, resolution: u32) -> Result<Self, ConvertError> {
        Self::new(&score.bpms, &score.beats, resolution)
    }

    /// Gets the absolute start of a measure in milliseconds, or `None`
    /// beyond the end of the tables. `measure_count` is a valid index here:
    /// it yields the end of the last measure.
    #[must_use]
    pub fn measure_start(&self, measure: u32) -> Option<u64> {
        self.measure_start_ms.get(measure as usize).copied()
    }

    /// Number of measures covered by the map.
    #[must_use]
    pub fn measure_count(&self) -> usize {
        self.bpms.len()
    }

    /// Ticks per beat of the grid the map was built for.
    #[must_use]
    pub const fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Computes the absolute millisecond timestamp of a grid position.
    ///
    /// The tick offset is converted through the BPM governing the note's own
    /// measure and truncated, then added onto the integer measure start, so
    /// equal inputs always yield the identical integer.
    ///
    /// # Errors
    ///
    /// [`ConvertError::MeasureOutOfRange`] when the position's measure has
    /// no tempo table entry.
    pub fn note_time(&self, position: GridPosition) -> Result<u64, ConvertError> {
        let measure = position.measure as usize;
        let Some(&bpm) = self.bpms.get(measure) else {
            return Err(ConvertError::MeasureOutOfRange { position });
        };
        let beats_in = f64::from(position.tick) / f64::from(self.resolution);
        let offset_ms = beats_in * (60.0 / bpm * 1000.0);
        Ok(self.measure_start_ms[measure] + offset_ms.floor() as u64)
    }
}
