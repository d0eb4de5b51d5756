#![forbid(unsafe_code)]

//! Lifecycle notifications.
//!
//! Hosts either implement [`PinchObserver`] and override only the callbacks
//! they care about, or wrap a single closure with [`from_fn`]. The tracker
//! notifies at most once per `update`, and only if an observer is set.

use crate::phase::GesturePhase;
use crate::tracker::PinchTracker;

/// A lifecycle notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PinchEvent {
    Start,
    Update,
    Cancel,
    Finish,
}

impl PinchEvent {
    /// The event announcing entry into `phase`, if any.
    #[must_use]
    pub const fn for_phase(phase: GesturePhase) -> Option<Self> {
        match phase {
            GesturePhase::Possible => None,
            GesturePhase::Began => Some(Self::Start),
            GesturePhase::Changed => Some(Self::Update),
            GesturePhase::Cancelled => Some(Self::Cancel),
            GesturePhase::Ended => Some(Self::Finish),
        }
    }

    /// Phase the tracker is in after emitting this event.
    #[must_use]
    pub const fn phase(self) -> GesturePhase {
        match self {
            Self::Start => GesturePhase::Began,
            Self::Update => GesturePhase::Changed,
            Self::Cancel => GesturePhase::Cancelled,
            Self::Finish => GesturePhase::Ended,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Cancel | Self::Finish)
    }
}

/// Receives pinch lifecycle notifications.
///
/// Every callback defaults to a no-op. The tracker is passed by reference so
/// the observer can read derived state (scales, axis, snapshot) at the
/// moment of the transition.
///
/// [`PinchTracker::set_observer`] requires `Send` so the tracker itself
/// stays `Send`; share state with the host through `Arc<Mutex<_>>` rather
/// than `Rc<RefCell<_>>`.
pub trait PinchObserver {
    fn on_start(&mut self, tracker: &PinchTracker) {
        let _ = tracker;
    }

    fn on_update(&mut self, tracker: &PinchTracker) {
        let _ = tracker;
    }

    fn on_cancel(&mut self, tracker: &PinchTracker) {
        let _ = tracker;
    }

    fn on_finish(&mut self, tracker: &PinchTracker) {
        let _ = tracker;
    }

    /// Entry point used by the tracker. Dispatches to the per-event methods.
    fn on_event(&mut self, event: PinchEvent, tracker: &PinchTracker) {
        match event {
            PinchEvent::Start => self.on_start(tracker),
            PinchEvent::Update => self.on_update(tracker),
            PinchEvent::Cancel => self.on_cancel(tracker),
            PinchEvent::Finish => self.on_finish(tracker),
        }
    }
}

/// Observer backed by a single closure. See [`from_fn`].
pub struct FnObserver<F>(F);

impl<F> std::fmt::Debug for FnObserver<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnObserver").finish_non_exhaustive()
    }
}

impl<F> PinchObserver for FnObserver<F>
where
    F: FnMut(PinchEvent, &PinchTracker),
{
    fn on_event(&mut self, event: PinchEvent, tracker: &PinchTracker) {
        (self.0)(event, tracker);
    }
}

/// Build an observer that receives every event through one closure.
pub fn from_fn<F>(f: F) -> FnObserver<F>
where
    F: FnMut(PinchEvent, &PinchTracker),
{
    FnObserver(f)
}
