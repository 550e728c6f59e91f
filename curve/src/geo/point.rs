use std::ops::{Add, Mul, Sub};

///
/// A point in 2 dimensions
///
/// This is a plain value type: two points are the same point if they have the same
/// coordinates. The curve engine does not care which coordinate space the points are
/// in, provided every point it is given uses the same one.
///
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    ///
    /// Creates a point from its coordinates
    ///
    #[inline]
    pub fn new(x: f64, y: f64) -> Point2D {
        Point2D { x, y }
    }

    ///
    /// The origin point (0, 0)
    ///
    #[inline]
    pub fn origin() -> Point2D {
        Point2D { x: 0.0, y: 0.0 }
    }
}

impl Add<Point2D> for Point2D {
    type Output = Point2D;

    #[inline]
    fn add(self, rhs: Point2D) -> Point2D {
        Point2D { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub<Point2D> for Point2D {
    type Output = Point2D;

    #[inline]
    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Mul<f64> for Point2D {
    type Output = Point2D;

    #[inline]
    fn mul(self, rhs: f64) -> Point2D {
        Point2D { x: self.x * rhs, y: self.y * rhs }
    }
}
