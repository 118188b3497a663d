//! Benchmark for score conversion.

use criterion::{Criterion, Throughput};
use sus_rs::{
    convert::convert_score,
    score::{RawNote, SusScore},
};

/// Builds a dense chart: eight taps per measure, a flick over every fourth
/// tap, and one three-point slide path per four measures.
fn synth_score(measures: u32) -> SusScore {
    let mut score = SusScore {
        bpms: vec![180.0; measures as usize],
        beats: vec![4.0; measures as usize],
        ..SusScore::default()
    };

    for measure in 0..measures {
        for step in 0..8u32 {
            let tick = step * 240;
            let lane = 2 + ((measure + step) % 12) as u8;
            score.short_notes.push(RawNote {
                measure,
                tick,
                lane,
                note_type: 1,
                width: Some(2),
            });
            if step % 4 == 0 {
                score.air_notes.push(RawNote {
                    measure,
                    tick,
                    lane,
                    note_type: 1,
                    width: Some(2),
                });
            }
        }
    }

    for start in (0..measures.saturating_sub(2)).step_by(4) {
        let lane = 2 + (start % 10) as u8;
        score.slide_notes.push(vec![
            RawNote {
                measure: start,
                tick: 0,
                lane,
                note_type: 1,
                width: Some(3),
            },
            RawNote {
                measure: start + 1,
                tick: 960,
                lane,
                note_type: 5,
                width: Some(3),
            },
            RawNote {
                measure: start + 2,
                tick: 0,
                lane,
                note_type: 2,
                width: Some(3),
            },
        ]);
    }

    score
}

fn bench_convert_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_score");

    for measures in [64u32, 256, 1024] {
        let score = synth_score(measures);
        let note_count = score.short_notes.len()
            + score.air_notes.len()
            + score.slide_notes.iter().map(Vec::len).sum::<usize>();

        group.throughput(Throughput::Elements(note_count as u64));
        let name = format!("{measures}_measures");
        group.bench_function(&name, |b| {
            b.iter(|| convert_score(std::hint::black_box(&score)));
        });
    }

    group.finish();
}

fn main() {
    let mut criterion = Criterion::default();
    bench_convert_score(&mut criterion);
}
