#![forbid(unsafe_code)]

//! Geometric primitives for two-point touch tracking.
//!
//! All coordinates are `f64` in whatever space the host delivers touches in.
//! Nothing here knows about gesture phases; these are pure value types and
//! the derivation rules for [`Axis`] and [`Direction`].

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point halfway between `self` and `other`.
    #[inline]
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Express this point relative to `origin`.
    #[inline]
    #[must_use]
    pub fn relative_to(self, origin: Self) -> Self {
        Self::new(self.x - origin.x, self.y - origin.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

// ---------------------------------------------------------------------------
// Vector
// ---------------------------------------------------------------------------

/// A 2D displacement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
}

impl Vector {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Displacement from `from` to `to`.
    #[inline]
    #[must_use]
    pub fn between(from: Point, to: Point) -> Self {
        Self::new(to.x - from.x, to.y - from.y)
    }

    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }

    /// Euclidean length.
    #[inline]
    #[must_use]
    pub fn length(self) -> f64 {
        self.dx.hypot(self.dy)
    }

    /// Unsigned magnitude along `axis`: `|dy|` for vertical, `|dx|` for
    /// horizontal.
    #[inline]
    #[must_use]
    pub fn project(self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.dy.abs(),
            Axis::Horizontal => self.dx.abs(),
        }
    }
}

// ---------------------------------------------------------------------------
// TouchPair
// ---------------------------------------------------------------------------

/// The two tracked touches of a pinch, in host-assigned order.
///
/// The host must keep the ordering stable for the lifetime of a gesture:
/// `first` is always the same physical finger from `Began` until the
/// gesture terminates. The tracker relies on this and never re-pairs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TouchPair {
    pub first: Point,
    pub second: Point,
}

impl TouchPair {
    #[inline]
    #[must_use]
    pub const fn new(first: Point, second: Point) -> Self {
        Self { first, second }
    }

    /// Vector from the first touch to the second.
    #[inline]
    #[must_use]
    pub fn vector(&self) -> Vector {
        Vector::between(self.first, self.second)
    }

    /// Euclidean separation of the two touches.
    #[inline]
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.vector().length()
    }

    #[inline]
    #[must_use]
    pub fn midpoint(&self) -> Point {
        self.first.midpoint(self.second)
    }
}

impl From<((f64, f64), (f64, f64))> for TouchPair {
    fn from((a, b): ((f64, f64), (f64, f64))) -> Self {
        Self::new(a.into(), b.into())
    }
}

// ---------------------------------------------------------------------------
// Axis
// ---------------------------------------------------------------------------

/// The screen dimension that dominates the separation of two touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    /// Dominant axis of `v`.
    ///
    /// Returns `None` for the zero vector. When `|dx| == |dy|` the result is
    /// `Horizontal`: only a strictly larger vertical component wins.
    #[must_use]
    pub fn of(v: Vector) -> Option<Self> {
        if v.is_zero() {
            return None;
        }
        if v.dx.abs() < v.dy.abs() {
            Some(Self::Vertical)
        } else {
            Some(Self::Horizontal)
        }
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Whether the touches are converging or diverging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    Inward,
    Outward,
}

impl Direction {
    /// Classify a current/initial separation ratio.
    ///
    /// Exactly `1.0` means no movement and yields `None`, as does NaN.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Option<Self> {
        if ratio < 1.0 {
            Some(Self::Inward)
        } else if ratio > 1.0 {
            Some(Self::Outward)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// ViewFrame
// ---------------------------------------------------------------------------

/// The host view that owns the gesture, in sample coordinates.
///
/// Used to report locations in view-local space. Only translation is
/// supported; scaled or rotated view transforms are the host's concern.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewFrame {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl ViewFrame {
    #[must_use]
    pub const fn new(origin: Point, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Convert a sample-space point into view-local coordinates.
    #[inline]
    #[must_use]
    pub fn to_local(&self, p: Point) -> Point {
        p.relative_to(self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_from_pair_is_second_minus_first() {
        let pair = TouchPair::from(((10.0, 20.0), (13.0, 16.0)));
        assert_eq!(pair.vector(), Vector::new(3.0, -4.0));
        assert_eq!(pair.distance(), 5.0);
    }

    #[test]
    fn axis_zero_vector_is_undefined() {
        assert_eq!(Axis::of(Vector::ZERO), None);
    }

    #[test]
    fn axis_tie_resolves_horizontal() {
        assert_eq!(Axis::of(Vector::new(4.0, 4.0)), Some(Axis::Horizontal));
        assert_eq!(Axis::of(Vector::new(-4.0, 4.0)), Some(Axis::Horizontal));
    }

    #[test]
    fn axis_dominant_component_wins() {
        assert_eq!(Axis::of(Vector::new(1.0, -3.0)), Some(Axis::Vertical));
        assert_eq!(Axis::of(Vector::new(-3.0, 1.0)), Some(Axis::Horizontal));
        assert_eq!(Axis::of(Vector::new(0.0, 0.5)), Some(Axis::Vertical));
    }

    #[test]
    fn direction_from_ratio() {
        assert_eq!(Direction::from_ratio(1.0), None);
        assert_eq!(Direction::from_ratio(0.999), Some(Direction::Inward));
        assert_eq!(Direction::from_ratio(0.0), Some(Direction::Inward));
        assert_eq!(Direction::from_ratio(1.001), Some(Direction::Outward));
        assert_eq!(Direction::from_ratio(f64::NAN), None);
    }

    #[test]
    fn projection_is_unsigned() {
        let v = Vector::new(-7.0, -2.0);
        assert_eq!(v.project(Axis::Horizontal), 7.0);
        assert_eq!(v.project(Axis::Vertical), 2.0);
    }

    #[test]
    fn view_frame_translates() {
        let frame = ViewFrame::new(Point::new(100.0, 50.0), 200.0, 100.0);
        let local = frame.to_local(Point::new(150.0, 75.0));
        assert_eq!(local, Point::new(50.0, 25.0));
    }

    #[test]
    fn midpoint_is_symmetric() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, -4.0);
        assert_eq!(a.midpoint(b), Point::new(5.0, -2.0));
        assert_eq!(b.midpoint(a), Point::new(5.0, -2.0));
    }
}
