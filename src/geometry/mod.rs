//! Geometry primitives
//!
//! Integer pixel rectangles and points shared by every placement operation.

use serde::{Deserialize, Serialize};

/// A 2D pixel coordinate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in screen pixels
///
/// Used for tray icon bounds, window bounds, and monitor bounds/work areas.
/// Widths and heights are not validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A zero-size rectangle anchored at `point`
    pub fn at_point(point: Point) -> Self {
        Self::new(point.x, point.y, 0, 0)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// True when either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Point containment, right and bottom edges exclusive
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Squared distance from `point` to the closest pixel of this rectangle.
    /// Zero when the point lies inside.
    pub fn distance_squared_to(&self, point: Point) -> i64 {
        let dx = axis_gap(point.x, self.left(), self.right());
        let dy = axis_gap(point.y, self.top(), self.bottom());
        dx * dx + dy * dy
    }
}

fn axis_gap(value: i32, start: i32, end: i32) -> i64 {
    let (value, start, end) = (i64::from(value), i64::from(start), i64::from(end));
    if value < start {
        start - value
    } else if value >= end {
        value - end + 1
    } else {
        0
    }
}

/// Midpoint placement along one axis, rounded the way JavaScript's
/// `Math.round` does (halves toward positive infinity).
///
/// Computes `round(anchor_start + anchor_len / 2 - extent / 2)` without
/// going through floating point. Results outside `i32` saturate.
pub(crate) fn centered(anchor_start: i32, anchor_len: i32, extent: i32) -> i32 {
    let doubled = 2 * i64::from(anchor_start) + i64::from(anchor_len) - i64::from(extent);
    saturate((doubled + 1).div_euclid(2))
}

/// `start + len - extent`, saturating at the `i32` limits
pub(crate) fn far_aligned(start: i32, len: i32, extent: i32) -> i32 {
    saturate(i64::from(start) + i64::from(len) - i64::from(extent))
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rectangle::new(-1440, 23, 1440, 877);
        assert_eq!(r.left(), -1440);
        assert_eq!(r.right(), 0);
        assert_eq!(r.top(), 23);
        assert_eq!(r.bottom(), 900);
        assert_eq!(r.origin(), Point::new(-1440, 23));
    }

    #[test]
    fn test_empty() {
        assert!(Rectangle::default().is_empty());
        assert!(Rectangle::new(10, 10, 0, 20).is_empty());
        assert!(!Rectangle::new(10, 10, 20, 20).is_empty());
    }

    #[test]
    fn test_contains_excludes_far_edges() {
        let r = Rectangle::new(0, 0, 1440, 900);
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(1439, 899)));
        assert!(!r.contains(Point::new(1440, 10)));
        assert!(!r.contains(Point::new(10, 900)));
    }

    #[test]
    fn test_distance_squared() {
        let r = Rectangle::new(0, 0, 100, 100);
        assert_eq!(r.distance_squared_to(Point::new(50, 50)), 0);
        assert_eq!(r.distance_squared_to(Point::new(-3, 50)), 9);
        assert_eq!(r.distance_squared_to(Point::new(102, 103)), 9 + 16);
    }

    #[test]
    fn test_extreme_values_saturate() {
        let r = Rectangle::new(i32::MAX - 5, i32::MIN, 10, -10);
        assert_eq!(r.right(), i32::MAX);
        assert_eq!(r.bottom(), i32::MIN);
        assert_eq!(centered(i32::MAX, i32::MAX, i32::MIN), i32::MAX);
        assert_eq!(far_aligned(i32::MAX - 10, 20, 5), i32::MAX);
        assert_eq!(far_aligned(i32::MIN, 0, 1), i32::MIN);
        assert_eq!(far_aligned(1240, 20, 200), 1060);
    }

    #[test]
    fn test_centered_rounds_half_up() {
        // 1240 + 10 - 100
        assert_eq!(centered(1240, 20, 200), 1150);
        // 120 + 0.5 - 50 = 70.5
        assert_eq!(centered(120, 1, 100), 71);
        // -200 + 10 - 100
        assert_eq!(centered(-200, 20, 200), -290);
        // -289.5 rounds to -289
        assert_eq!(centered(-200, 21, 200), -289);
    }
}
