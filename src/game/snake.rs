use super::point::Point;
use std::collections::VecDeque;

/// Snake state.  Snate.
///
/// The cells are stored head first, tail last.  Consecutive cells are always
/// one orthogonal step apart; this holds by construction and is never
/// re-checked.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Snake {
    cells: VecDeque<Point>,
}

impl Snake {
    /// Create a snake of `length` cells lying vertically at the bottom
    /// center of a `box_size` arena, just above the wall, with its head at
    /// the top
    pub(crate) fn starting(box_size: u16, length: usize) -> Snake {
        let x = i32::from(box_size / 2);
        (1..=length)
            .rev()
            .map(|y| Point::new(x, i32::try_from(y).unwrap_or(i32::MAX)))
            .collect()
    }

    /// Return the position of the snake's head
    ///
    /// # Panics
    ///
    /// Panics if the snake has no cells, which cannot happen for a snake
    /// belonging to a game.
    pub fn head(&self) -> Point {
        self.cells.front().copied().expect("snake should never be empty")
    }

    /// Return the position of the last cell of the snake's body
    ///
    /// # Panics
    ///
    /// Panics if the snake has no cells, which cannot happen for a snake
    /// belonging to a game.
    pub fn tail(&self) -> Point {
        self.cells.back().copied().expect("snake should never be empty")
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the snake's cells from head to tail
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, Point> {
        self.cells.iter()
    }

    pub fn contains(&self, p: Point) -> bool {
        p.collides_with_any(&self.cells)
    }

    /// Return the cells that remain in place when the head moves on: the
    /// whole snake if it is `growing`, or everything except the tail
    /// otherwise.
    pub(super) fn trailing_body(&self, growing: bool) -> Snake {
        let mut cells = self.cells.clone();
        if !growing {
            let _ = cells.pop_back();
        }
        Snake { cells }
    }

    /// Prepend `head` to the snake
    pub(super) fn with_head(mut self, head: Point) -> Snake {
        self.cells.push_front(head);
        self
    }
}

impl FromIterator<Point> for Snake {
    /// Build a snake from its cells, head first.  The cells are taken as
    /// given; it is up to the caller to supply a contiguous body.
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Snake {
        Snake {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Snake {
    type Item = &'a Point;
    type IntoIter = std::collections::vec_deque::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
