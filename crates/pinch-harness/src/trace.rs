#![forbid(unsafe_code)]

//! JSONL touch traces.
//!
//! One step per line. Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! # vertical spread
//! {"pair":[[0,0],[0,10]],"signal":"possible"}
//! {"pair":[[0,0],[0,20]],"signal":"began"}
//! {"pair":[[0,0],[0,30]]}
//! {}
//! {"reset":true}
//! ```
//!
//! A step without `pair` means fewer than two touches. A step without
//! `signal` lets the tracker derive phases itself.

use std::fs;
use std::path::Path;

use pinch_core::{PlatformPhase, Point, TouchPair};
use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, Result};

/// One recorded host tick.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TraceStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pair: Option<[[f64; 2]; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal: Option<PlatformPhase>,
    /// Reset the tracker before applying this step.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub reset: bool,
}

impl TraceStep {
    /// A tick carrying `pair` (or a lift) and an optional host signal.
    #[must_use]
    pub fn tick(pair: Option<TouchPair>, signal: Option<PlatformPhase>) -> Self {
        Self {
            pair: pair.map(|p| [[p.first.x, p.first.y], [p.second.x, p.second.y]]),
            signal,
            reset: false,
        }
    }

    /// A bare reset.
    #[must_use]
    pub fn reset() -> Self {
        Self {
            reset: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn touch_pair(&self) -> Option<TouchPair> {
        self.pair
            .map(|[a, b]| TouchPair::new(Point::new(a[0], a[1]), Point::new(b[0], b[1])))
    }

    /// A reset step that carries no tick of its own.
    #[must_use]
    pub fn is_bare_reset(&self) -> bool {
        self.reset && self.pair.is_none() && self.signal.is_none()
    }
}

/// Parse a JSONL trace.
pub fn parse_trace(input: &str) -> Result<Vec<TraceStep>> {
    let mut steps = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let step = serde_json::from_str(line).map_err(|source| HarnessError::Json {
            line: idx + 1,
            source,
        })?;
        steps.push(step);
    }
    Ok(steps)
}

/// Read and parse a trace file.
pub fn load_trace(path: &Path) -> Result<Vec<TraceStep>> {
    if !path.exists() {
        return Err(HarnessError::MissingTrace {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path)?;
    parse_trace(&text)
}

/// Encode steps as JSONL, one step per line.
pub fn write_trace(steps: &[TraceStep]) -> Result<String> {
    let mut out = String::new();
    for step in steps {
        out.push_str(&serde_json::to_string(step)?);
        out.push('\n');
    }
    Ok(out)
}
