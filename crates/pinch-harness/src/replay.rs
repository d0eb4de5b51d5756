#![forbid(unsafe_code)]

//! Deterministic replay of touch traces through a [`PinchTracker`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use pinch_core::{Axis, Direction, GesturePhase, PinchEvent, PinchObserver, PinchTracker};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

use crate::error::Result;
use crate::trace::TraceStep;

// ============================================================================
// Recorded events
// ============================================================================

/// A lifecycle event plus the tracker's derived state when it fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedEvent {
    /// Trace step index during replay; notification index for [`Recorder`].
    pub seq: usize,
    pub event: PinchEvent,
    pub phase: GesturePhase,
    pub axis: Option<Axis>,
    pub direction: Option<Direction>,
    pub initial_axis: Option<Axis>,
    pub initial_direction: Option<Direction>,
    pub linear_scale: f64,
    pub geometric_scale: f64,
}

impl RecordedEvent {
    #[must_use]
    pub fn capture(seq: usize, event: PinchEvent, tracker: &PinchTracker) -> Self {
        Self {
            seq,
            event,
            phase: tracker.phase(),
            axis: tracker.current_axis(),
            direction: tracker.current_direction(),
            initial_axis: tracker.initial_axis(),
            initial_direction: tracker.initial_direction(),
            linear_scale: tracker.linear_scale(None, None),
            geometric_scale: tracker.geometric_scale(None, None),
        }
    }
}

/// Observer that appends every notification to a shared log.
///
/// Clones share the log, so a host keeps one handle and gives the other to
/// the tracker, possibly on another thread.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    log: Arc<Mutex<Vec<RecordedEvent>>>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    // A panicking observer leaves the log intact; keep reading it.
    fn lock(&self) -> MutexGuard<'_, Vec<RecordedEvent>> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PinchObserver for Recorder {
    fn on_event(&mut self, event: PinchEvent, tracker: &PinchTracker) {
        let mut log = self.lock();
        let seq = log.len();
        log.push(RecordedEvent::capture(seq, event, tracker));
    }
}

// ============================================================================
// Replay
// ============================================================================

/// Result of replaying a trace.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReplayReport {
    pub steps: usize,
    pub events: Vec<RecordedEvent>,
    pub final_phase: GesturePhase,
}

impl ReplayReport {
    /// Event kinds in emission order.
    #[must_use]
    pub fn event_kinds(&self) -> Vec<PinchEvent> {
        self.events.iter().map(|e| e.event).collect()
    }

    /// Terminal events (`Cancel` / `Finish`), one per completed lifecycle.
    #[must_use]
    pub fn outcomes(&self) -> Vec<PinchEvent> {
        self.events
            .iter()
            .map(|e| e.event)
            .filter(|e| e.is_terminal())
            .collect()
    }

    /// Number of lifecycles that reached `Start`.
    #[must_use]
    pub fn lifecycles(&self) -> usize {
        self.events
            .iter()
            .filter(|e| e.event == PinchEvent::Start)
            .count()
    }

    /// One JSON object per recorded event.
    pub fn to_jsonl(&self) -> Result<String> {
        let mut out = String::new();
        for event in &self.events {
            out.push_str(&serde_json::to_string(event)?);
            out.push('\n');
        }
        Ok(out)
    }
}

/// Feed `steps` through `tracker`, recording every emitted event.
///
/// The tracker's own observer, if any, is notified as usual.
pub fn replay(tracker: &mut PinchTracker, steps: &[TraceStep]) -> ReplayReport {
    let span = info_span!("pinch_replay", steps = steps.len());
    let _guard = span.enter();

    let mut events = Vec::new();
    for (seq, step) in steps.iter().enumerate() {
        if step.reset {
            tracker.reset();
            if step.is_bare_reset() {
                continue;
            }
        }
        if let Some(event) = tracker.update(step.touch_pair(), step.signal) {
            debug!(seq, ?event, "replay event");
            events.push(RecordedEvent::capture(seq, event, tracker));
        }
    }

    let report = ReplayReport {
        steps: steps.len(),
        events,
        final_phase: tracker.phase(),
    };
    info!(
        events = report.events.len(),
        lifecycles = report.lifecycles(),
        final_phase = ?report.final_phase,
        "replay complete"
    );
    report
}
