//! Geometric primitives for label placement.
//!
//! # Coordinate System
//!
//! Easel uses a coordinate system consistent with canvas surfaces:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward

/// A 2D point representing a position in surface coordinate space.
///
/// # Examples
///
/// ```
/// # use easel_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// Represents the dimensions of an element with width and height.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the geometric center of an element of this size anchored at
    /// the origin. Surfaces use this to answer backdrop-center queries.
    ///
    /// # Examples
    ///
    /// ```
    /// # use easel_core::geometry::Size;
    /// let center = Size::new(300.0, 200.0).center();
    /// assert_eq!(center.x(), 150.0);
    /// assert_eq!(center.y(), 100.0);
    /// ```
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_new_and_accessors() {
        let p = Point::new(3.5, -2.0);
        assert_approx_eq!(f32, p.x(), 3.5);
        assert_approx_eq!(f32, p.y(), -2.0);
    }

    #[test]
    fn test_point_default_is_origin() {
        let p = Point::default();
        assert_approx_eq!(f32, p.x(), 0.0);
        assert_approx_eq!(f32, p.y(), 0.0);
    }

    #[test]
    fn test_point_add() {
        let sum = Point::new(1.0, 2.0).add_point(Point::new(10.0, -1.0));
        assert_approx_eq!(f32, sum.x(), 11.0);
        assert_approx_eq!(f32, sum.y(), 1.0);
    }

    #[test]
    fn test_point_midpoint() {
        let mid = Point::new(0.0, 0.0).midpoint(Point::new(10.0, 20.0));
        assert_approx_eq!(f32, mid.x(), 5.0);
        assert_approx_eq!(f32, mid.y(), 10.0);
    }

    #[test]
    fn test_size_center() {
        let center = Size::new(640.0, 480.0).center();
        assert_approx_eq!(f32, center.x(), 320.0);
        assert_approx_eq!(f32, center.y(), 240.0);
    }
}
