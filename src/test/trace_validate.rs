use crate::algo::Algorithm;
use crate::trace::{Trace, TraceError, TraceEvent};

#[test]
fn generated_traces_validate() {
    for algo in Algorithm::ALL {
        algo.generate(&[9, 3, 7, 3, 1])
            .validate()
            .expect("generated trace is valid");
    }
}

#[test]
fn validate_rejects_structural_violations() {
    assert_eq!(Trace::new(2, vec![]).validate(), Err(TraceError::Empty));
    assert_eq!(
        Trace::new(2, vec![TraceEvent::Compare { i: 0, j: 1 }]).validate(),
        Err(TraceError::MissingDone)
    );
    assert_eq!(
        Trace::new(2, vec![TraceEvent::Done, TraceEvent::Done]).validate(),
        Err(TraceError::DoneNotLast { at: 0 })
    );
    assert_eq!(
        Trace::new(2, vec![TraceEvent::Swap { i: 0, j: 2 }, TraceEvent::Done]).validate(),
        Err(TraceError::IndexOutOfRange {
            at: 0,
            idx: 2,
            len: 2
        })
    );
    assert_eq!(
        Trace::new(
            2,
            vec![
                TraceEvent::ArraySnapshot { values: vec![1] },
                TraceEvent::Done
            ]
        )
        .validate(),
        Err(TraceError::SnapshotLength {
            at: 0,
            got: 1,
            len: 2
        })
    );
}

#[test]
#[should_panic(expected = "outside 0..2")]
fn recorder_panics_on_out_of_range_index() {
    let mut rec = crate::algo::TraceRecorder::new(&[1, 2]);
    rec.emit(TraceEvent::Pivot { idx: 2 });
}

#[test]
fn trace_json_uses_kind_tags() {
    let trace = Algorithm::Quick.generate(&[2, 1]);
    let raw = serde_json::to_string(&trace).expect("serialize trace");
    let v: serde_json::Value = serde_json::from_str(&raw).expect("parse json");
    let events = v["events"].as_array().expect("events array");
    let kinds: Vec<&str> = events
        .iter()
        .map(|e| e["kind"].as_str().expect("kind"))
        .collect();
    assert_eq!(
        kinds,
        [
            "pivot",
            "compare",
            "swap",
            "array_snapshot",
            "mark_sorted",
            "done"
        ]
    );
    assert_eq!(events[3]["values"], serde_json::json!([1, 2]));

    let decoded: Trace = serde_json::from_str(&raw).expect("deserialize trace");
    assert_eq!(decoded, trace);
}
