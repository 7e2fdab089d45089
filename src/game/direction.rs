use super::point::Point;
use std::fmt;

/// The direction in which the snake is heading
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the offset by which the snake's head moves in one tick
    pub fn shift(self) -> Point {
        match self {
            Direction::Up => Point::new(0, 1),
            Direction::Down => Point::new(0, -1),
            Direction::Left => Point::new(-1, 0),
            Direction::Right => Point::new(1, 0),
        }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns `true` if turning from `self` to `other` would be a 180° turn
    pub fn is_opposite(self, other: Direction) -> bool {
        self.reverse() == other
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.pad(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::Up, Point::new(5, 5), Point::new(5, 6))]
    #[case(Direction::Down, Point::new(5, 5), Point::new(5, 4))]
    #[case(Direction::Left, Point::new(5, 5), Point::new(4, 5))]
    #[case(Direction::Right, Point::new(5, 5), Point::new(6, 5))]
    #[case(Direction::Left, Point::new(1, 3), Point::new(0, 3))]
    #[case(Direction::Down, Point::new(2, 0), Point::new(2, -1))]
    fn test_shift(#[case] d: Direction, #[case] pos: Point, #[case] r: Point) {
        assert_eq!(pos + d.shift(), r);
    }

    #[rstest]
    #[case(Direction::Up, Direction::Down, true)]
    #[case(Direction::Down, Direction::Up, true)]
    #[case(Direction::Left, Direction::Right, true)]
    #[case(Direction::Right, Direction::Left, true)]
    #[case(Direction::Up, Direction::Up, false)]
    #[case(Direction::Up, Direction::Left, false)]
    #[case(Direction::Left, Direction::Down, false)]
    #[case(Direction::Right, Direction::Up, false)]
    fn test_is_opposite(#[case] a: Direction, #[case] b: Direction, #[case] r: bool) {
        assert_eq!(a.is_opposite(b), r);
    }

    #[test]
    fn reverse_shift_cancels() {
        for d in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(d.shift() + d.reverse().shift(), Point::new(0, 0));
        }
    }
}
