use super::cell::{Cell, Orientation};
use super::get_neighbors;
use crate::error::{MazeError, Result};

/// Wall state of a rectangular maze.
///
/// Walls on the outer boundary are implicit and always present. Interior walls are stored in two
/// flat arrays, `true` meaning the wall is present:
/// - `horizontal`: `height - 1` boundary rows of `width` segments, indexed `row * width + x`.
///   Row `r` separates cell row `r` from row `r + 1`.
/// - `vertical`: `width - 1` boundary columns of `height` segments, indexed `column * height + y`.
///   Column `c` separates cell column `c` from column `c + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    horizontal: Box<[bool]>,
    vertical: Box<[bool]>,
    width: u16,
    height: u16,
    removed: usize,
}

impl Grid {
    /// Creates a grid with every interior wall present.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        if width < 1 || height < 1 {
            return Err(MazeError::InvalidDimension { width, height });
        }
        let (w, h) = (width as usize, height as usize);
        Ok(Grid {
            horizontal: vec![true; (h - 1) * w].into_boxed_slice(),
            vertical: vec![true; (w - 1) * h].into_boxed_slice(),
            width,
            height,
            removed: 0,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of interior wall segments, present or removed.
    pub fn wall_count(&self) -> usize {
        self.horizontal.len() + self.vertical.len()
    }

    /// Number of interior walls currently removed.
    pub fn removed_wall_count(&self) -> usize {
        self.removed
    }

    /// Whether every interior wall is present.
    pub fn is_pristine(&self) -> bool {
        self.removed == 0
    }

    /// Restores every wall. Dimensions are unchanged.
    pub fn reset(&mut self) {
        self.horizontal.fill(true);
        self.vertical.fill(true);
        self.removed = 0;
    }

    /// Checks if the given cell is within the bounds of the grid.
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Row-major index of a cell, for per-cell side tables.
    pub fn ravel_index(&self, cell: Cell) -> usize {
        cell.y as usize * self.width as usize + cell.x as usize
    }

    /// Iterates every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }

    /// Checks the wall after `from` in the given orientation:
    /// - `Horizontal`: the wall below `from` (between `from` and `(x, y + 1)`)
    /// - `Vertical`: the wall to the right of `from` (between `from` and `(x + 1, y)`)
    ///
    /// Returns `None` if there is no interior wall there, i.e. `from` is out of bounds or on the
    /// bottommost row / rightmost column, where only the boundary remains.
    pub fn is_wall_after(&self, from: Cell, orientation: Orientation) -> Option<bool> {
        self.wall_index(from, orientation).map(|idx| match orientation {
            Orientation::Horizontal => self.horizontal[idx],
            Orientation::Vertical => self.vertical[idx],
        })
    }

    /// Whether the wall between two grid-adjacent cells is present.
    pub fn is_wall_present(&self, a: Cell, b: Cell) -> Result<bool> {
        let (from, orientation) = self.checked_wall(a, b)?;
        // checked_wall only returns interior walls
        Ok(self.is_wall_after(from, orientation).unwrap_or(true))
    }

    /// Removes the wall between two grid-adjacent cells.
    ///
    /// Returns `true` if a wall was removed, `false` if it was already gone.
    pub fn remove_wall(&mut self, a: Cell, b: Cell) -> Result<bool> {
        let (from, orientation) = self.checked_wall(a, b)?;
        let Some(idx) = self.wall_index(from, orientation) else {
            return Ok(false);
        };
        let wall = match orientation {
            Orientation::Horizontal => &mut self.horizontal[idx],
            Orientation::Vertical => &mut self.vertical[idx],
        };
        if *wall {
            *wall = false;
            self.removed += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Neighbors of `cell` reachable through a removed wall.
    pub fn open_neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        get_neighbors(cell, self)
            .filter(move |&n| matches!(self.is_wall_present(cell, n), Ok(false)))
    }

    fn checked_wall(&self, a: Cell, b: Cell) -> Result<(Cell, Orientation)> {
        for cell in [a, b] {
            if !self.is_in_bounds(cell) {
                return Err(MazeError::OutOfBounds {
                    cell,
                    width: self.width,
                    height: self.height,
                });
            }
        }
        a.wall_between(b).ok_or(MazeError::NonAdjacentCells { a, b })
    }

    fn wall_index(&self, from: Cell, orientation: Orientation) -> Option<usize> {
        if !self.is_in_bounds(from) {
            return None;
        }
        let (x, y) = (from.x as usize, from.y as usize);
        match orientation {
            Orientation::Horizontal if from.y + 1 < self.height => Some(y * self.width as usize + x),
            Orientation::Vertical if from.x + 1 < self.width => Some(x * self.height as usize + y),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Grid::new(0, 3),
            Err(MazeError::InvalidDimension {
                width: 0,
                height: 3
            })
        );
        assert!(Grid::new(3, 0).is_err());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn test_new_grid_has_all_walls() {
        let grid = Grid::new(4, 3).unwrap();
        // 2 boundary rows of 4 + 3 boundary columns of 3
        assert_eq!(grid.wall_count(), 2 * 4 + 3 * 3);
        assert!(grid.is_pristine());
        assert!(grid.is_wall_present(Cell::new(0, 0), Cell::new(1, 0)).unwrap());
        assert!(grid.is_wall_present(Cell::new(3, 1), Cell::new(3, 2)).unwrap());
        assert_eq!(Grid::new(1, 1).unwrap().wall_count(), 0);
    }

    #[test]
    fn test_remove_wall() {
        let mut grid = Grid::new(5, 5).unwrap();
        assert!(grid.remove_wall(Cell::new(1, 1), Cell::new(2, 1)).unwrap());
        // Trying to remove the same wall again should return false
        assert!(!grid.remove_wall(Cell::new(2, 1), Cell::new(1, 1)).unwrap());
        assert_eq!(grid.removed_wall_count(), 1);
        assert_eq!(grid.is_wall_after(Cell::new(1, 1), Orientation::Vertical), Some(false));
        assert_eq!(grid.is_wall_after(Cell::new(1, 1), Orientation::Horizontal), Some(true));
    }

    #[test]
    fn test_wall_indexing_agrees_between_writer_and_reader() {
        let mut grid = Grid::new(3, 4).unwrap();
        grid.remove_wall(Cell::new(2, 3), Cell::new(2, 2)).unwrap();
        assert!(!grid.is_wall_present(Cell::new(2, 2), Cell::new(2, 3)).unwrap());
        assert_eq!(grid.is_wall_after(Cell::new(2, 2), Orientation::Horizontal), Some(false));
        // Neighboring segments are untouched
        assert!(grid.is_wall_present(Cell::new(1, 2), Cell::new(1, 3)).unwrap());
        assert!(grid.is_wall_present(Cell::new(1, 2), Cell::new(2, 2)).unwrap());
    }

    #[test]
    fn test_non_adjacent_cells_leave_grid_unchanged() {
        let mut grid = Grid::new(3, 3).unwrap();
        let before = grid.clone();
        let (a, b) = (Cell::new(0, 0), Cell::new(2, 2));
        assert_eq!(
            grid.remove_wall(a, b),
            Err(MazeError::NonAdjacentCells { a, b })
        );
        assert_eq!(grid, before);
        assert!(grid.is_wall_present(a, Cell::new(0, 2)).is_err());
    }

    #[test]
    fn test_out_of_bounds_cells() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert!(!grid.is_in_bounds(Cell::new(2, 0)));
        assert!(grid.is_in_bounds(Cell::new(1, 1)));
        assert_eq!(
            grid.remove_wall(Cell::new(1, 1), Cell::new(2, 1)),
            Err(MazeError::OutOfBounds {
                cell: Cell::new(2, 1),
                width: 2,
                height: 2
            })
        );
        assert_eq!(grid.is_wall_after(Cell::new(1, 0), Orientation::Vertical), None);
        assert_eq!(grid.is_wall_after(Cell::new(0, 1), Orientation::Horizontal), None);
    }

    #[test]
    fn test_reset_restores_fresh_state() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.remove_wall(Cell::new(0, 0), Cell::new(1, 0)).unwrap();
        grid.remove_wall(Cell::new(2, 0), Cell::new(2, 1)).unwrap();
        grid.reset();
        assert_eq!(grid, Grid::new(3, 2).unwrap());
    }

    #[test]
    fn test_open_neighbors() {
        let mut grid = Grid::new(3, 3).unwrap();
        let center = Cell::new(1, 1);
        assert_eq!(grid.open_neighbors(center).count(), 0);
        grid.remove_wall(center, Cell::new(1, 0)).unwrap();
        grid.remove_wall(center, Cell::new(2, 1)).unwrap();
        let mut open = grid.open_neighbors(center).collect::<Vec<_>>();
        open.sort();
        assert_eq!(open, vec![Cell::new(1, 0), Cell::new(2, 1)]);
    }

    #[test]
    fn test_cells_are_row_major() {
        let grid = Grid::new(2, 2).unwrap();
        let cells = grid.cells().collect::<Vec<_>>();
        assert_eq!(
            cells,
            vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(0, 1), Cell::new(1, 1)]
        );
        assert!(cells.iter().enumerate().all(|(i, &c)| grid.ravel_index(c) == i));
    }
}
