use super::point::Point;

/// The perimeter of a square arena.
///
/// The cells are stored in order: up the left column from the origin, right
/// along the top row, down the right column, and back along the bottom row,
/// stopping just short of the origin.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Wall {
    box_size: u16,
    cells: Vec<Point>,
}

impl Wall {
    /// Compute the wall of a `box_size` × `box_size` arena.  `box_size` should
    /// be at least 2.
    pub fn new(box_size: u16) -> Wall {
        let max = i32::from(box_size) - 1;
        let left = (0..=max).map(|y| Point::new(0, y));
        let top = (1..=max).map(|x| Point::new(x, max));
        let right = (0..max).rev().map(|y| Point::new(max, y));
        let bottom = (1..max).rev().map(|x| Point::new(x, 0));
        Wall {
            box_size,
            cells: left.chain(top).chain(right).chain(bottom).collect(),
        }
    }

    pub fn box_size(&self) -> u16 {
        self.box_size
    }

    /// Return the wall's cells in perimeter order
    pub fn points(&self) -> &[Point] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, p: Point) -> bool {
        p.collides_with_any(&self.cells)
    }

    /// Iterate over every cell strictly inside the wall, column by column
    pub fn interior(&self) -> impl Iterator<Item = Point> {
        let max = i32::from(self.box_size) - 2;
        (1..=max).flat_map(move |x| (1..=max).map(move |y| Point::new(x, y)))
    }
}
