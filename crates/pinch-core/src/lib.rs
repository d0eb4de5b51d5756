#![forbid(unsafe_code)]

//! Core: two-finger pinch tracking.
//!
//! # Role in pinchkit
//! `pinch-core` turns a stream of two-point touch samples into a pinch
//! lifecycle (start, update, cancel, finish) and exposes the geometry a host
//! needs to act on it: the dominant axis of separation, whether the touches
//! move inward or outward, and linear and geometric scale measured against
//! the state frozen at gesture start.
//!
//! # Primary responsibilities
//! - **PinchTracker**: per-tick state machine, initial snapshot, and the
//!   minimum-scale cancellation policy.
//! - **Geometry**: `Point`, `Vector`, `TouchPair`, `Axis`, `Direction`.
//! - **PinchObserver**: optional lifecycle callbacks.
//! - **PinchConfig**: validated thresholds.
//!
//! # How it fits in the system
//! Hosts own touch delivery and feed the tracker from a thin adapter. The
//! tracker never discovers touches itself and never re-pairs them; touch
//! ordering must be stable for the lifetime of a gesture.
//!
//! ```
//! use pinch_core::{PinchEvent, PinchTracker, PlatformPhase, Point, TouchPair};
//!
//! let pair = |d: f64| TouchPair::new(Point::new(0.0, 0.0), Point::new(0.0, d));
//! let mut tracker = PinchTracker::new();
//!
//! tracker.update(Some(pair(10.0)), Some(PlatformPhase::Possible));
//! assert_eq!(tracker.update(Some(pair(20.0)), Some(PlatformPhase::Began)), Some(PinchEvent::Start));
//! tracker.update(Some(pair(30.0)), Some(PlatformPhase::Changed));
//! assert_eq!(tracker.linear_scale(None, None), 10.0);
//! assert_eq!(tracker.update(None, None), Some(PinchEvent::Finish));
//! ```

pub mod config;
pub mod geometry;
pub mod logging;
pub mod observer;
pub mod phase;
pub mod tracker;

pub use config::{ConfigError, PinchConfig};
pub use geometry::{Axis, Direction, Point, TouchPair, Vector, ViewFrame};
pub use observer::{FnObserver, PinchEvent, PinchObserver, from_fn};
pub use phase::{GesturePhase, PlatformPhase};
pub use tracker::{InitialSnapshot, PinchTracker, ZERO_MAGNITUDE_SCALE};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};
