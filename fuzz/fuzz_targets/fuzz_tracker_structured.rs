#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pinch_core::{PinchConfig, PinchEvent, PinchTracker, PlatformPhase, Point, TouchPair};

#[derive(Debug, Arbitrary)]
enum Signal {
    None,
    Possible,
    Began,
    Changed,
    Cancelled,
    Ended,
}

impl Signal {
    fn platform(&self) -> Option<PlatformPhase> {
        match self {
            Self::None => None,
            Self::Possible => Some(PlatformPhase::Possible),
            Self::Began => Some(PlatformPhase::Began),
            Self::Changed => Some(PlatformPhase::Changed),
            Self::Cancelled => Some(PlatformPhase::Cancelled),
            Self::Ended => Some(PlatformPhase::Ended),
        }
    }
}

#[derive(Debug, Arbitrary)]
enum Op {
    Tick {
        pair: Option<(i16, i16, i16, i16)>,
        signal: Signal,
    },
    Reset,
    SetMinimumLinear(i16),
    SetMinimumGeometric(u8),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut tracker = PinchTracker::with_config(PinchConfig::default()).unwrap();
    let mut started = false;
    let mut terminated = false;
    let mut final_scales: Option<(f64, f64)> = None;

    for op in ops.iter().take(512) {
        match op {
            Op::Tick { pair, signal } => {
                let pair = pair.map(|(a, b, c, d)| {
                    TouchPair::new(
                        Point::new(f64::from(a), f64::from(b)),
                        Point::new(f64::from(c), f64::from(d)),
                    )
                });
                match tracker.update(pair, signal.platform()) {
                    Some(PinchEvent::Start) => {
                        assert!(!started, "double start");
                        started = true;
                    }
                    Some(PinchEvent::Update) => assert!(started && !terminated),
                    Some(_) => {
                        assert!(started && !terminated, "bad terminal event");
                        terminated = true;
                        final_scales = Some((
                            tracker.linear_scale(None, None),
                            tracker.geometric_scale(None, None),
                        ));
                    }
                    None => {}
                }
            }
            Op::Reset => {
                tracker.reset();
                started = false;
                terminated = false;
                final_scales = None;
            }
            Op::SetMinimumLinear(v) => {
                tracker.set_minimum_linear_scale(f64::from(*v)).unwrap();
            }
            Op::SetMinimumGeometric(v) => {
                tracker
                    .set_minimum_geometric_scale(f64::from(*v) / 64.0)
                    .unwrap();
            }
        }

        assert_eq!(tracker.snapshot().is_some(), started);
        assert!(tracker.linear_scale(None, None).is_finite());
        assert!(tracker.geometric_scale(None, None).is_finite());
        if let Some((linear, geometric)) = final_scales {
            assert_eq!(tracker.linear_scale(None, None).to_bits(), linear.to_bits());
            assert_eq!(tracker.geometric_scale(None, None).to_bits(), geometric.to_bits());
        }
    }
});
