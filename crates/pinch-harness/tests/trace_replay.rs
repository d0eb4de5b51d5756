#![forbid(unsafe_code)]

//! End-to-end trace replay tests.
//!
//! Run:
//!   cargo test -p pinch-harness --test trace_replay

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use pinch_core::{
    Axis, Direction, GesturePhase, PinchConfig, PinchEvent, PinchTracker, PlatformPhase, Point,
    TouchPair,
};
use pinch_harness::{HarnessError, TraceStep, load_trace, parse_trace, replay, write_trace};
use proptest::prelude::*;

const HORIZONTAL_SQUEEZE: &str = r#"
# self-driven: no host signal
{"pair":[[0,0],[100,0]]}
{"pair":[[5,0],[95,0]]}
{"pair":[[10,0],[90,0]]}
{"pair":[[20,0],[80,0]]}
{}
"#;

const TWO_GESTURES: &str = r#"
{"pair":[[0,0],[0,10]],"signal":"possible"}
{"pair":[[0,0],[0,20]],"signal":"began"}
{"pair":[[0,0],[0,30]],"signal":"changed"}
{"pair":[[0,0],[0,30]],"signal":"ended"}
{"reset":true}
{"pair":[[0,0],[40,0]],"signal":"possible"}
{"pair":[[0,0],[50,0]],"signal":"began"}
{"pair":[[0,0],[45,0]],"signal":"changed"}
{"signal":"changed"}
"#;

fn temp_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    std::env::temp_dir().join(format!("pinch_{name}_{}_{nanos}.jsonl", std::process::id()))
}

#[test]
fn self_driven_squeeze_finishes_inward() {
    let steps = parse_trace(HORIZONTAL_SQUEEZE).unwrap();
    let mut t = PinchTracker::new();
    let report = replay(&mut t, &steps);

    assert_eq!(
        report.event_kinds(),
        vec![
            PinchEvent::Start,
            PinchEvent::Update,
            PinchEvent::Update,
            PinchEvent::Finish
        ]
    );
    let start = &report.events[0];
    assert_eq!(start.seq, 1);
    assert_eq!(start.initial_axis, Some(Axis::Horizontal));
    assert_eq!(start.initial_direction, Some(Direction::Inward));

    let finish = report.events.last().unwrap();
    // Began at separation 90, ended at 60.
    assert_eq!(finish.linear_scale, 30.0);
    assert_eq!(finish.geometric_scale, 1.5);
}

#[test]
fn second_lifecycle_is_independent_and_cancelled() {
    let steps = parse_trace(TWO_GESTURES).unwrap();
    let mut t = PinchTracker::new();
    let report = replay(&mut t, &steps);

    assert_eq!(report.lifecycles(), 2);
    assert_eq!(report.outcomes(), vec![PinchEvent::Finish, PinchEvent::Cancel]);
    assert_eq!(report.final_phase, GesturePhase::Cancelled);

    let second_start = report
        .events
        .iter()
        .filter(|e| e.event == PinchEvent::Start)
        .nth(1)
        .unwrap();
    assert_eq!(second_start.initial_axis, Some(Axis::Horizontal));
    assert_eq!(second_start.initial_direction, Some(Direction::Outward));

    // Spread to 50 then back to 45: linear -5 misses the default minimum.
    let cancel = report.events.last().unwrap();
    assert_eq!(cancel.linear_scale, -5.0);
}

#[test]
fn minimum_linear_scale_turns_finish_into_cancel() {
    let steps = parse_trace(TWO_GESTURES).unwrap();
    let config = PinchConfig::default().with_minimum_linear_scale(100.0);
    let mut t = PinchTracker::with_config(config).unwrap();
    let report = replay(&mut t, &steps);

    assert_eq!(report.outcomes(), vec![PinchEvent::Cancel, PinchEvent::Cancel]);
    assert!(!report.event_kinds().contains(&PinchEvent::Finish));
}

#[test]
fn trace_file_round_trip_replays_identically() {
    let vpair = |d: f64| TouchPair::new(Point::new(0.0, 0.0), Point::new(0.0, d));
    let steps = vec![
        TraceStep::tick(Some(vpair(10.0)), Some(PlatformPhase::Possible)),
        TraceStep::tick(Some(vpair(20.0)), Some(PlatformPhase::Began)),
        TraceStep::tick(Some(vpair(35.0)), None),
        TraceStep::tick(None, None),
    ];

    let path = temp_path("round_trip");
    fs::write(&path, write_trace(&steps).unwrap()).unwrap();
    let loaded = load_trace(&path).unwrap();
    let _ = fs::remove_file(&path);
    assert_eq!(loaded, steps);

    let a = replay(&mut PinchTracker::new(), &steps);
    let b = replay(&mut PinchTracker::new(), &loaded);
    assert_eq!(a.to_jsonl().unwrap(), b.to_jsonl().unwrap());
}

#[test]
fn malformed_trace_reports_line() {
    let err = parse_trace("{}\n{\"pair\":\"oops\"}\n").unwrap_err();
    assert!(matches!(err, HarnessError::Json { line: 2, .. }));
}

// ── Arbitrary traces ────────────────────────────────────────────────────

fn step_strategy() -> impl Strategy<Value = TraceStep> {
    let coord = -500.0f64..500.0;
    let pair = (coord.clone(), coord.clone(), coord.clone(), coord)
        .prop_map(|(a, b, c, d)| [[a, b], [c, d]]);
    let signal = prop::option::of(prop_oneof![
        Just(PlatformPhase::Possible),
        Just(PlatformPhase::Began),
        Just(PlatformPhase::Changed),
        Just(PlatformPhase::Cancelled),
        Just(PlatformPhase::Ended),
    ]);
    (prop::option::weighted(0.8, pair), signal, prop::bool::weighted(0.05)).prop_map(
        |(pair, signal, reset)| TraceStep {
            pair,
            signal,
            reset,
        },
    )
}

proptest! {
    #[test]
    fn replay_is_deterministic_and_well_formed(
        steps in prop::collection::vec(step_strategy(), 0..80),
    ) {
        let a = replay(&mut PinchTracker::new(), &steps);
        let b = replay(&mut PinchTracker::new(), &steps);
        prop_assert_eq!(&a, &b);

        prop_assert!(a.outcomes().len() <= a.lifecycles());
        for e in &a.events {
            prop_assert_eq!(e.phase, e.event.phase());
            prop_assert!(e.linear_scale.is_finite());
            prop_assert!(e.geometric_scale.is_finite());
        }

        let text = write_trace(&steps).unwrap();
        prop_assert_eq!(parse_trace(&text).unwrap(), steps);
    }
}
