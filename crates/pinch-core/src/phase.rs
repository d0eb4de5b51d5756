#![forbid(unsafe_code)]

//! Gesture phases: the tracker's own lifecycle and the host's signal.

/// Lifecycle phase of a tracked pinch.
///
/// `Possible` is the only initial state. `Cancelled` and `Ended` are
/// terminal until the owner calls `reset()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GesturePhase {
    #[default]
    Possible,
    Began,
    Changed,
    Cancelled,
    Ended,
}

impl GesturePhase {
    /// `Began` or `Changed`.
    #[inline]
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Began | Self::Changed)
    }

    /// `Cancelled` or `Ended`.
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled | Self::Ended)
    }
}

/// Phase reported independently by a host gesture recognizer, if the host
/// runs one.
///
/// `Possible` lets the host deliver touch-down samples before its own
/// recognizer commits, so the tracker can anchor the separation ratio.
/// A `Cancelled` signal is always honored as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PlatformPhase {
    Possible,
    Began,
    Changed,
    Cancelled,
    Ended,
}

impl From<PlatformPhase> for GesturePhase {
    fn from(p: PlatformPhase) -> Self {
        match p {
            PlatformPhase::Possible => Self::Possible,
            PlatformPhase::Began => Self::Began,
            PlatformPhase::Changed => Self::Changed,
            PlatformPhase::Cancelled => Self::Cancelled,
            PlatformPhase::Ended => Self::Ended,
        }
    }
}
