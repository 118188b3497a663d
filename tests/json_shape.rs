//! The serialized output must keep the exact field names and nesting of the
//! original JSON contract — downstream chart consumers match on them.

use pretty_assertions::assert_eq;
use serde_json::json;
use sus_rs::prelude::*;

fn raw(measure: u32, tick: u32, lane: u8, note_type: u8) -> RawNote {
    RawNote {
        measure,
        tick,
        lane,
        note_type,
        width: None,
    }
}

fn wide(width: u8, note: RawNote) -> RawNote {
    RawNote {
        width: Some(width),
        ..note
    }
}

#[test]
fn chart_serializes_with_original_field_names() {
    let score = SusScore {
        bpms: vec![120.0],
        beats: vec![4.0],
        short_notes: vec![wide(3, raw(0, 240, 5, 1))],
        air_notes: vec![],
        slide_notes: vec![],
    };
    let chart = convert_score(&score).unwrap().chart;
    let value = serde_json::to_value(&chart).unwrap();

    assert_eq!(
        value,
        json!({
            "taps": [{
                "t": 250,
                "id": 0,
                "measure": 0,
                "tick": 240,
                "lane": 5,
                "width": 3,
                "r": "short",
                "type": "tap",
            }],
            "slides": [],
        })
    );
}

#[test]
fn attached_notes_nest_under_their_consumer() {
    let score = SusScore {
        bpms: vec![120.0],
        beats: vec![4.0],
        short_notes: vec![raw(0, 0, 6, 1)],
        air_notes: vec![raw(0, 0, 6, 1)],
        slide_notes: vec![],
    };
    let chart = convert_score(&score).unwrap().chart;
    let value = serde_json::to_value(&chart).unwrap();

    let merged = &value["taps"][0];
    assert_eq!(merged["r"], json!("air"));
    assert_eq!(merged["type"], json!("flick"));
    assert_eq!(merged["shortNote"]["type"], json!("tap"));
    // attached sub-notes carry no identifier, absent optionals are omitted
    assert_eq!(merged["shortNote"].get("id"), None);
    assert_eq!(merged.get("airNote"), None);
    assert_eq!(merged.get("slideId"), None);
    assert_eq!(merged.get("width"), None);
}

#[test]
fn slide_paths_serialize_as_nested_arrays() {
    let score = SusScore {
        bpms: vec![120.0, 120.0],
        beats: vec![4.0, 4.0],
        short_notes: vec![raw(0, 960, 4, 3)],
        air_notes: vec![],
        slide_notes: vec![vec![
            wide(2, raw(0, 0, 4, 1)),
            wide(2, raw(0, 960, 4, 3)),
            wide(2, raw(1, 0, 4, 2)),
        ]],
    };
    let chart = convert_score(&score).unwrap().chart;
    let value = serde_json::to_value(&chart).unwrap();

    let path = &value["slides"][0];
    assert!(path.is_array());
    assert_eq!(path.as_array().map(Vec::len), Some(3));
    assert_eq!(path[0]["type"], json!("slide head"));
    assert_eq!(path[0]["slideId"], json!(0));
    assert_eq!(path[0]["width"], json!(2));
    assert_eq!(path[1]["diamondNote"]["type"], json!("diamond"));
    assert_eq!(path[2]["type"], json!("slide tail"));
}

#[test]
fn legacy_shape_uses_timestamp_notes_key() {
    let score = SusScore {
        bpms: vec![120.0],
        beats: vec![4.0],
        short_notes: vec![raw(0, 0, 5, 1)],
        air_notes: vec![],
        slide_notes: vec![vec![raw(0, 480, 4, 1)]],
    };
    let legacy = convert_score(&score).unwrap().chart.into_legacy();
    let value = serde_json::to_value(&legacy).unwrap();

    let shape = value.as_object().unwrap();
    assert_eq!(shape.len(), 2);
    assert!(shape.contains_key("timestampNotes"));
    assert!(shape.contains_key("slides"));
    assert_eq!(value["timestampNotes"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["slides"][0][0]["type"], json!("slide head"));
}

#[test]
fn chart_round_trips_through_json() {
    let score = SusScore {
        bpms: vec![120.0, 150.0],
        beats: vec![4.0, 4.0],
        short_notes: vec![wide(2, raw(0, 0, 2, 1)), raw(1, 0, 9, 2)],
        air_notes: vec![raw(1, 0, 9, 4)],
        slide_notes: vec![vec![raw(0, 480, 4, 1), raw(1, 480, 5, 2)]],
    };
    let chart = convert_score(&score).unwrap().chart;
    let encoded = serde_json::to_string(&chart).unwrap();
    let decoded: Chart = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, chart);
}

#[test]
fn unknown_class_still_serializes() {
    let score = SusScore {
        bpms: vec![120.0],
        beats: vec![4.0],
        short_notes: vec![raw(0, 0, 1, 1)],
        air_notes: vec![],
        slide_notes: vec![],
    };
    let output = convert_score(&score).unwrap();
    let value = serde_json::to_value(&output.chart).unwrap();
    assert_eq!(value["taps"][0]["type"], json!("unknown"));
    assert_eq!(output.warnings.len(), 1);
}

#[test]
fn analyzer_dump_converts_end_to_end() {
    let dump = r#"{
        "BPMs": [120],
        "BEATs": [4],
        "shortNotes": [
            { "measure": 0, "tick": 0, "lane": 5, "noteType": 1, "width": 3 }
        ],
        "airNotes": [
            { "measure": 0, "tick": 0, "lane": 5, "noteType": 1 }
        ],
        "slideNotes": []
    }"#;
    let score = SusScore::from_json(dump).unwrap();
    let ConvertOutput { chart, warnings } = convert_score(&score).unwrap();

    assert_eq!(warnings, vec![]);
    assert_eq!(chart.taps.len(), 1);
    assert_eq!(chart.taps[0].class, NoteClass::Flick);
    assert!(chart.taps[0].short_note.is_some());
}
