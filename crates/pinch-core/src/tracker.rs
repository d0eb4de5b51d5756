#![forbid(unsafe_code)]

//! Pinch state tracking: transforms two-point touch samples into a gesture
//! lifecycle with derived axis, direction, and scale.
//!
//! [`PinchTracker`] is fed once per host tick with the current [`TouchPair`]
//! (or `None` once fewer than two touches remain) and, optionally, the
//! host recognizer's own [`PlatformPhase`].
//!
//! # State Machine
//!
//! ```text
//!            advance                advance
//! Possible ──────────▶ Began ──────────────▶ Changed ◀─┐ advance
//!                        │                     │  └────┘
//!                        │ end / cancel        │ end / cancel
//!                        ▼                     ▼
//!                  Ended | Cancelled   (terminal until reset)
//! ```
//!
//! - *advance*: a two-point sample with no terminal signal.
//! - *end*: a platform `Ended`, or any sample with fewer than two touches.
//! - *cancel*: a platform `Cancelled`, honored verbatim.
//!
//! Precedence, highest first: platform `Cancelled`, platform `Ended`, fewer
//! than two touches, then advance. A `Cancelled` signal that arrives with
//! the lift is therefore reported as `Cancel`, never `Finish`. Once the
//! phase is terminal, samples are dropped until `reset`, so every query
//! keeps answering from the final tick.
//!
//! Without a platform signal the tracker leaves `Possible` once the touch
//! separation moves more than [`PinchConfig::begin_distance`] away from the
//! touch-down separation.
//!
//! # Invariants
//!
//! 1. The initial snapshot is captured exactly once per lifecycle, at the
//!    sample that enters `Began`, and only [`reset`](PinchTracker::reset)
//!    clears it.
//! 2. Each `update` emits at most one event.
//! 3. A lifecycle emits at most one terminal event (`Cancel` or `Finish`),
//!    and never one without a preceding `Start`.
//! 4. An `Ended` transition whose linear or geometric scale falls strictly
//!    below the configured minimum is reported as `Cancel`.
//! 5. Current axis and direction are recomputed on every query.
//!
//! # Failure Modes
//!
//! None of the queries fail. Missing inputs yield `None` for axis,
//! direction, and location, and `0.0` for scales. A zero denominator in
//! [`geometric_scale`](PinchTracker::geometric_scale) yields
//! [`ZERO_MAGNITUDE_SCALE`].

use crate::config::{ConfigError, PinchConfig, check_minimum};
use crate::geometry::{Axis, Direction, Point, TouchPair, ViewFrame};
use crate::observer::{PinchEvent, PinchObserver};
use crate::phase::{GesturePhase, PlatformPhase};

// Import tracing macros (no-op when tracing feature is disabled).
#[cfg(feature = "tracing")]
use crate::logging::{debug, trace};
#[cfg(not(feature = "tracing"))]
use crate::{debug, trace};

/// Value returned by [`PinchTracker::geometric_scale`] when the denominator
/// magnitude is zero.
pub const ZERO_MAGNITUDE_SCALE: f64 = 0.0;

// ---------------------------------------------------------------------------
// Initial snapshot
// ---------------------------------------------------------------------------

/// State frozen at the sample that entered `Began`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InitialSnapshot {
    pub location: Option<Point>,
    pub touch_pair: TouchPair,
    pub axis: Option<Axis>,
    pub direction: Option<Direction>,
}

/// What a sample asks the state machine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Request {
    Advance,
    End,
    Cancel,
}

// ---------------------------------------------------------------------------
// PinchTracker
// ---------------------------------------------------------------------------

/// Stateful two-finger pinch tracker.
///
/// Call [`update`](PinchTracker::update) for each host tick and
/// [`reset`](PinchTracker::reset) before each new gesture lifecycle.
/// `Send` so a host can move it to the thread that delivers touches, but
/// not meant for concurrent use.
pub struct PinchTracker {
    config: PinchConfig,
    phase: GesturePhase,
    view: Option<ViewFrame>,

    // Live sample
    current: Option<TouchPair>,

    // Per-lifecycle state, cleared by reset()
    anchor: Option<TouchPair>,
    last_pair: Option<TouchPair>,
    snapshot: Option<InitialSnapshot>,

    observer: Option<Box<dyn PinchObserver + Send>>,
}

impl std::fmt::Debug for PinchTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinchTracker")
            .field("phase", &self.phase)
            .field("config", &self.config)
            .field("current", &self.current)
            .field("snapshot", &self.snapshot)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

impl Default for PinchTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PinchTracker {
    /// Create a tracker with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: PinchConfig::default(),
            phase: GesturePhase::Possible,
            view: None,
            current: None,
            anchor: None,
            last_pair: None,
            snapshot: None,
            observer: None,
        }
    }

    /// Create a tracker with a validated configuration.
    pub fn with_config(config: PinchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Register the observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: impl PinchObserver + Send + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Remove and return the observer.
    pub fn take_observer(&mut self) -> Option<Box<dyn PinchObserver + Send>> {
        self.observer.take()
    }

    /// Attach (or detach) the host view used for location reporting.
    pub fn set_view_frame(&mut self, view: Option<ViewFrame>) {
        self.view = view;
    }

    #[inline]
    #[must_use]
    pub fn view_frame(&self) -> Option<ViewFrame> {
        self.view
    }

    // --- Configuration ---

    #[inline]
    #[must_use]
    pub fn config(&self) -> &PinchConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect on the next `update`.
    pub fn set_config(&mut self, config: PinchConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn minimum_linear_scale(&self) -> f64 {
        self.config.minimum_linear_scale
    }

    pub fn set_minimum_linear_scale(&mut self, value: f64) -> Result<(), ConfigError> {
        check_minimum("minimum_linear_scale", value)?;
        self.config.minimum_linear_scale = value;
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn minimum_geometric_scale(&self) -> f64 {
        self.config.minimum_geometric_scale
    }

    pub fn set_minimum_geometric_scale(&mut self, value: f64) -> Result<(), ConfigError> {
        check_minimum("minimum_geometric_scale", value)?;
        self.config.minimum_geometric_scale = value;
        Ok(())
    }

    // --- Lifecycle ---

    /// Current lifecycle phase.
    #[inline]
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Whether the gesture is in `Began` or `Changed`.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    /// Start a new lifecycle: clear the snapshot and all per-gesture state,
    /// and return to `Possible`. Configuration, view frame, and observer are
    /// kept.
    pub fn reset(&mut self) {
        trace!(from = ?self.phase, "pinch reset");
        self.phase = GesturePhase::Possible;
        self.current = None;
        self.anchor = None;
        self.last_pair = None;
        self.snapshot = None;
    }

    /// Feed one host tick.
    ///
    /// `sample` is the current touch pair, or `None` if fewer than two
    /// touches remain. `signal` is the host recognizer's phase if it runs
    /// one. Returns the event emitted for this tick, which is also delivered
    /// to the observer.
    pub fn update(
        &mut self,
        sample: Option<TouchPair>,
        signal: Option<PlatformPhase>,
    ) -> Option<PinchEvent> {
        if self.phase.is_terminal() {
            trace!(phase = ?self.phase, ?signal, "pinch sample after terminal phase dropped");
            return None;
        }

        self.current = sample;
        if let Some(pair) = sample {
            if self.anchor.is_none() {
                self.anchor = Some(pair);
            }
            self.last_pair = Some(pair);
        }

        let reported = signal.map(GesturePhase::from);
        let request = match (reported, sample) {
            (Some(GesturePhase::Cancelled), _) => Request::Cancel,
            (Some(GesturePhase::Ended), _) => Request::End,
            // The host may lag behind the touch count; lifting wins.
            (_, None) => Request::End,
            _ => Request::Advance,
        };

        let next = match (self.phase, request) {
            (GesturePhase::Possible, Request::Advance) => {
                let begin = match reported {
                    Some(phase) => phase.is_active(),
                    None => self.exceeds_begin_distance(),
                };
                if begin {
                    self.capture_snapshot();
                    GesturePhase::Began
                } else {
                    return None;
                }
            }
            (GesturePhase::Began | GesturePhase::Changed, Request::Advance) => {
                GesturePhase::Changed
            }
            (GesturePhase::Began | GesturePhase::Changed, Request::End) => self.classify_end(),
            (GesturePhase::Began | GesturePhase::Changed, Request::Cancel) => {
                GesturePhase::Cancelled
            }
            _ => {
                trace!(phase = ?self.phase, ?request, "pinch request ignored");
                return None;
            }
        };

        debug!(from = ?self.phase, to = ?next, "pinch transition");
        self.phase = next;
        let event = PinchEvent::for_phase(next)?;
        self.notify(event);
        Some(event)
    }

    // --- Current state ---

    /// Midpoint of the current pair in view-local coordinates.
    ///
    /// `None` without an attached view frame or without two touches.
    #[must_use]
    pub fn current_location(&self) -> Option<Point> {
        let view = self.view?;
        let pair = self.current?;
        Some(view.to_local(pair.midpoint()))
    }

    #[inline]
    #[must_use]
    pub fn current_touch_pair(&self) -> Option<TouchPair> {
        self.current
    }

    /// Dominant axis of the live pair.
    #[must_use]
    pub fn current_axis(&self) -> Option<Axis> {
        Axis::of(self.current?.vector())
    }

    /// Divergence direction of the live pair relative to touch-down.
    #[must_use]
    pub fn current_direction(&self) -> Option<Direction> {
        Direction::from_ratio(self.current_scale()?)
    }

    /// Euclidean separation of the live pair over the touch-down separation.
    ///
    /// `None` without both pairs, or if the touches went down at the same
    /// point.
    #[must_use]
    pub fn current_scale(&self) -> Option<f64> {
        let anchor = self.anchor?.distance();
        let current = self.current?.distance();
        if anchor == 0.0 {
            return None;
        }
        Some(current / anchor)
    }

    // --- Initial snapshot ---

    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> Option<&InitialSnapshot> {
        self.snapshot.as_ref()
    }

    #[must_use]
    pub fn initial_location(&self) -> Option<Point> {
        self.snapshot?.location
    }

    #[must_use]
    pub fn initial_touch_pair(&self) -> Option<TouchPair> {
        self.snapshot.map(|s| s.touch_pair)
    }

    #[must_use]
    pub fn initial_axis(&self) -> Option<Axis> {
        self.snapshot?.axis
    }

    #[must_use]
    pub fn initial_direction(&self) -> Option<Direction> {
        self.snapshot?.direction
    }

    // --- Scale ---

    /// Change in separation along `axis`, positive when moving in
    /// `direction`.
    ///
    /// Arguments default to the initial axis and direction. Returns `0.0`
    /// when either stays unresolved or the gesture never began. After the
    /// touches lift, the last two-point sample stands in for the live pair.
    #[must_use]
    pub fn linear_scale(&self, direction: Option<Direction>, axis: Option<Axis>) -> f64 {
        match self.magnitudes(direction, axis) {
            Some((Direction::Inward, initial, current)) => initial - current,
            Some((Direction::Outward, initial, current)) => current - initial,
            None => 0.0,
        }
    }

    /// Ratio of separations along `axis`, above `1.0` when moving in
    /// `direction`.
    ///
    /// Resolution rules match [`linear_scale`](Self::linear_scale). A zero
    /// denominator yields [`ZERO_MAGNITUDE_SCALE`].
    #[must_use]
    pub fn geometric_scale(&self, direction: Option<Direction>, axis: Option<Axis>) -> f64 {
        let Some((direction, initial, current)) = self.magnitudes(direction, axis) else {
            return 0.0;
        };
        let (numerator, denominator) = match direction {
            Direction::Inward => (initial, current),
            Direction::Outward => (current, initial),
        };
        if denominator == 0.0 {
            return ZERO_MAGNITUDE_SCALE;
        }
        numerator / denominator
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

impl PinchTracker {
    /// Resolved direction plus initial and current magnitudes along the
    /// resolved axis.
    fn magnitudes(
        &self,
        direction: Option<Direction>,
        axis: Option<Axis>,
    ) -> Option<(Direction, f64, f64)> {
        let snapshot = self.snapshot.as_ref()?;
        let direction = direction.or(snapshot.direction)?;
        let axis = axis.or(snapshot.axis)?;
        let current = self.current.or(self.last_pair)?;
        Some((
            direction,
            snapshot.touch_pair.vector().project(axis),
            current.vector().project(axis),
        ))
    }

    fn exceeds_begin_distance(&self) -> bool {
        match (self.anchor, self.current) {
            (Some(anchor), Some(current)) => {
                (current.distance() - anchor.distance()).abs() > self.config.begin_distance
            }
            _ => false,
        }
    }

    fn capture_snapshot(&mut self) {
        debug_assert!(self.snapshot.is_none(), "snapshot captured twice");
        let Some(touch_pair) = self.current else {
            return;
        };
        self.snapshot = Some(InitialSnapshot {
            location: self.current_location(),
            touch_pair,
            axis: self.current_axis(),
            direction: self.current_direction(),
        });
    }

    /// `Ended`, unless the final scales miss a configured minimum.
    fn classify_end(&self) -> GesturePhase {
        let linear = self.linear_scale(None, None);
        let geometric = self.geometric_scale(None, None);
        if linear < self.config.minimum_linear_scale
            || geometric < self.config.minimum_geometric_scale
        {
            debug!(
                linear,
                geometric,
                minimum_linear = self.config.minimum_linear_scale,
                minimum_geometric = self.config.minimum_geometric_scale,
                "pinch below minimum scale, reporting cancel"
            );
            GesturePhase::Cancelled
        } else {
            GesturePhase::Ended
        }
    }

    fn notify(&mut self, event: PinchEvent) {
        if let Some(mut observer) = self.observer.take() {
            observer.on_event(event, self);
            self.observer = Some(observer);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
