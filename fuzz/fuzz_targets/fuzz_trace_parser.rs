#![no_main]

use libfuzzer_sys::fuzz_target;
use pinch_core::PinchTracker;
use pinch_harness::{parse_trace, replay};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Cap length to keep fuzzing fast.
    if text.len() > 4096 {
        return;
    }

    // Parsing must never panic; malformed lines are errors.
    let Ok(steps) = parse_trace(text) else {
        return;
    };

    // Anything that parses must replay without panicking.
    let report = replay(&mut PinchTracker::new(), &steps);
    assert!(report.outcomes().len() <= report.lifecycles());
});
