//! Reconciliation of the three event streams into one chart.
//!
//! The streams declare overlapping events independently: a slide head may
//! carry a tap declaration on the same grid position, a flick is an air note
//! over a short note, a diamond is a short note over a slide waypoint. The
//! engine indexes the short and air streams by grid position and lets later
//! stages pop matching entries while walking the slide paths, so every raw
//! note ends up in the output exactly once — either standalone or attached
//! to the note that consumed it.

use std::collections::HashMap;

use crate::{
    chart::{Chart, Note, SlidePath},
    convert::{
        ConvertError, ConvertOutput, ConvertWarning,
        classify::{NoteClass, NoteSource, classify_air, classify_short, classify_slide},
        tempo::TempoMap,
    },
    score::{GridPosition, RawNote, SusScore},
};

/// Pending notes of one stream, keyed by grid position.
///
/// Popping an entry transfers exclusive ownership to the caller and removes
/// the key. Entries never popped drain in declaration order.
struct StreamMap {
    source: NoteSource,
    entries: HashMap<GridPosition, Note>,
    order: Vec<GridPosition>,
}

impl StreamMap {
    fn with_capacity(source: NoteSource, capacity: usize) -> Self {
        Self {
            source,
            entries: HashMap::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    fn insert(&mut self, note: Note) -> Result<(), ConvertError> {
        let position = note.position();
        if self.entries.insert(position, note).is_some() {
            return Err(ConvertError::DuplicateCoordinate {
                source: self.source,
                position,
            });
        }
        self.order.push(position);
        Ok(())
    }

    fn pop(&mut self, position: GridPosition) -> Option<Note> {
        self.entries.remove(&position)
    }

    fn drain(self) -> impl Iterator<Item = Note> {
        let Self {
            mut entries, order, ..
        } = self;
        order
            .into_iter()
            .filter_map(move |position| entries.remove(&position))
    }
}

fn classified(raw: &RawNote, t: u64, source: NoteSource, class: NoteClass) -> Note {
    Note {
        t,
        id: None,
        measure: raw.measure,
        tick: raw.tick,
        lane: raw.lane,
        width: raw.width,
        source,
        class,
        slide_id: None,
        short_note: None,
        air_note: None,
        diamond_note: None,
    }
}

/// Merges the classified streams of a score into a [`Chart`].
///
/// Follows the stream order short → air → slide: air notes consume
/// coinciding shorts, slide notes consume coinciding airs and shorts.
/// Whatever remains unconsumed is standalone. The merged collection is
/// stable-sorted by timestamp (ties keep declaration order) and numbered
/// sequentially before being split into taps and slide paths.
///
/// # Errors
///
/// - [`ConvertError::DuplicateCoordinate`] when one stream declares two
///   notes at the same grid position.
/// - [`ConvertError::MeasureOutOfRange`] when a note lies beyond the tempo
///   tables.
pub fn reconcile(score: &SusScore, tempo_map: &TempoMap) -> Result<ConvertOutput, ConvertError> {
    let mut warnings = Vec::new();
    let mut warn_unknown = |class: NoteClass, source: NoteSource, raw: &RawNote| {
        if class.is_unknown() {
            warnings.push(ConvertWarning::UnknownNoteType {
                source,
                note_type: raw.note_type,
                position: raw.position(),
            });
        }
    };

    let mut shorts = StreamMap::with_capacity(NoteSource::Short, score.short_notes.len());
    for raw in &score.short_notes {
        let class = classify_short(raw.lane, raw.note_type);
        warn_unknown(class, NoteSource::Short, raw);
        let t = tempo_map.note_time(raw.position())?;
        shorts.insert(classified(raw, t, NoteSource::Short, class))?;
    }

    let mut airs = StreamMap::with_capacity(NoteSource::Air, score.air_notes.len());
    for raw in &score.air_notes {
        let class = classify_air(raw.note_type);
        warn_unknown(class, NoteSource::Air, raw);
        let t = tempo_map.note_time(raw.position())?;
        let mut note = classified(raw, t, NoteSource::Air, class);
        note.short_note = shorts.pop(raw.position()).map(Box::new);
        airs.insert(note)?;
    }

    let mut merged = Vec::new();
    let group_count = score.slide_notes.len();
    for (group, path) in score.slide_notes.iter().enumerate() {
        for (index, raw) in path.iter().enumerate() {
            let class = classify_slide(index, path.len(), raw.note_type);
            warn_unknown(class, NoteSource::Slide, raw);
            let t = tempo_map.note_time(raw.position())?;
            let mut note = classified(raw, t, NoteSource::Slide, class);
            note.slide_id = Some(group as u32);
            note.air_note = airs.pop(raw.position()).map(Box::new);
            if let Some(short) = shorts.pop(raw.position()) {
                // a diamond decorates the waypoint; anything else is a
                // duplicate declaration of the same event
                if short.class == NoteClass::Diamond {
                    note.diamond_note = Some(Box::new(short));
                } else {
                    note.short_note = Some(Box::new(short));
                }
            }
            merged.push(note);
        }
    }

    merged.extend(shorts.drain());
    merged.extend(airs.drain());

    // stable: ties keep declaration order
    merged.sort_by_key(|note| note.t);
    for (id, note) in merged.iter_mut().enumerate() {
        note.id = Some(id as u32);
    }

    let mut taps = Vec::new();
    let mut slides = vec![SlidePath::default(); group_count];
    for note in merged {
        match note.slide_id {
            Some(group) => slides[group as usize].0.push(note),
            None => taps.push(note),
        }
    }

    Ok(ConvertOutput {
        chart: Chart { taps, slides },
        warnings,
    })
}
