use std::fmt;

/// Orientation of a wall segment between two adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Separates a cell from the one below it.
    Horizontal,
    /// Separates a cell from the one to its right.
    Vertical,
}

/// A cell coordinate in the maze. `x` is the column, `y` is the row.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: u16,
    pub y: u16,
}

impl Cell {
    pub const fn new(x: u16, y: u16) -> Self {
        Cell { x, y }
    }

    /// Returns the wall separating `self` from `other` as the cell *before* the wall plus the
    /// wall's orientation, or `None` if the two cells are not grid-adjacent.
    ///
    /// The cell before the wall is the one with the smaller coordinate on the axis that differs,
    /// so the wall between `a` and `b` is the same regardless of argument order.
    pub fn wall_between(self, other: Cell) -> Option<(Cell, Orientation)> {
        if self.x == other.x && self.y.abs_diff(other.y) == 1 {
            // Same column, so the wall is horizontal
            Some((std::cmp::min_by_key(self, other, |c| c.y), Orientation::Horizontal))
        } else if self.y == other.y && self.x.abs_diff(other.x) == 1 {
            // Same row, so the wall is vertical
            Some((std::cmp::min_by_key(self, other, |c| c.x), Orientation::Vertical))
        } else {
            None
        }
    }
}

impl From<(u16, u16)> for Cell {
    fn from((x, y): (u16, u16)) -> Self {
        Cell { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
