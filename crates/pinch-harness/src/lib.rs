#![forbid(unsafe_code)]

//! Trace capture and replay for pinch-core.
//!
//! - [`trace`]: the JSONL touch-trace format.
//! - [`replay`]: drive a [`PinchTracker`](pinch_core::PinchTracker) through a
//!   trace and collect a [`ReplayReport`] suitable for golden comparison.
//! - [`Recorder`]: an observer that logs notifications with derived state.

pub mod error;
pub mod replay;
pub mod trace;

pub use error::{HarnessError, Result};
pub use replay::{RecordedEvent, Recorder, ReplayReport, replay};
pub use trace::{TraceStep, load_trace, parse_trace, write_trace};
