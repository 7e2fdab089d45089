use std::borrow::Borrow;
use std::fmt;
use std::ops::Add;

/// A cell of the arena.
///
/// `x` grows to the right and `y` grows upwards; `(0, 0)` is the bottom-left
/// corner of the wall.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// Returns `true` iff some member of `points` has the same coordinates as
    /// `self`.
    ///
    /// An empty collection never collides, and neither does `None`, so a
    /// missing treat can be checked the same way as a present one.
    pub fn collides_with_any<I, P>(self, points: I) -> bool
    where
        I: IntoIterator<Item = P>,
        P: Borrow<Point>,
    {
        points.into_iter().any(|p| *p.borrow() == self)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
