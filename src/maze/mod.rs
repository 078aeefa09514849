pub mod cell;
pub mod grid;

use std::fmt;

pub use cell::{Cell, Orientation};
pub use grid::Grid;

use crate::error::Result;
use crate::generators::generate_maze;
use crate::renderer::Renderer;

/// A perfect maze over a rectangular grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
}

impl Maze {
    /// Creates a new maze with the given width and height, with every wall present.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        Ok(Maze {
            grid: Grid::new(width, height)?,
        })
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Restores every wall so the maze can be generated again.
    pub fn reset(&mut self) {
        self.grid.reset();
    }

    /// Carves a spanning tree into the maze with randomized Prim's algorithm.
    ///
    /// The same seed always carves the same maze. Fails with
    /// [`MazeError::AlreadyGenerated`](crate::MazeError::AlreadyGenerated) if any wall has
    /// already been removed; call [`Maze::reset`] first.
    pub fn generate(&mut self, seed: u64) -> Result<()> {
        generate_maze(&mut self.grid, seed)
    }

    /// Renders the maze with the default glyphs.
    pub fn render(&self) -> String {
        Renderer::default().render(&self.grid)
    }

    pub fn is_wall_present(&self, a: Cell, b: Cell) -> Result<bool> {
        self.grid.is_wall_present(a, b)
    }

    pub fn remove_wall(&mut self, a: Cell, b: Cell) -> Result<bool> {
        self.grid.remove_wall(a, b)
    }
}

impl From<Grid> for Maze {
    fn from(grid: Grid) -> Self {
        Maze { grid }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Get neighbors of a cell.
/// A neighbor is a cell one step away in the cardinal directions (left, right, up, down) that
/// lies within the grid. Yields nothing for an out-of-bounds cell.
pub fn get_neighbors(cell: Cell, grid: &Grid) -> impl Iterator<Item = Cell> + '_ {
    let neighbors: Vec<Cell> = if grid.is_in_bounds(cell) {
        let Cell { x, y } = cell;
        vec![
            // NOTE: This way of handling underflow/overflow is overflow-safe.
            // When x < 1 or y < 1, wrap x - 1 or y - 1 to u16::MAX, which is filtered out by the
            // bounds check. When x + 1 or y + 1 would exceed u16::MAX, saturate at u16::MAX,
            // which is also out of bounds since the largest dimension is u16::MAX.
            Cell::new(x.wrapping_sub(1), y),
            Cell::new(x.saturating_add(1), y),
            Cell::new(x, y.wrapping_sub(1)),
            Cell::new(x, y.saturating_add(1)),
        ]
    } else {
        vec![]
    };

    neighbors.into_iter().filter(move |&c| grid.is_in_bounds(c))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::error::MazeError;

    fn neighbor_set(cell: Cell, grid: &Grid) -> HashSet<Cell> {
        get_neighbors(cell, grid).collect()
    }

    #[test]
    fn test_get_neighbors() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(
            neighbor_set(Cell::new(1, 1), &grid),
            HashSet::from([
                Cell::new(0, 1),
                Cell::new(2, 1),
                Cell::new(1, 0),
                Cell::new(1, 2)
            ])
        );
        // Corner, edge and interior cells
        assert_eq!(neighbor_set(Cell::new(0, 0), &grid).len(), 2);
        assert_eq!(neighbor_set(Cell::new(3, 2), &grid).len(), 2);
        assert_eq!(neighbor_set(Cell::new(2, 0), &grid).len(), 3);
        assert_eq!(neighbor_set(Cell::new(3, 1), &grid).len(), 3);
        assert_eq!(neighbor_set(Cell::new(2, 1), &grid).len(), 4);
    }

    #[test]
    fn test_get_neighbors_degenerate_grids() {
        let single = Grid::new(1, 1).unwrap();
        assert_eq!(get_neighbors(Cell::new(0, 0), &single).count(), 0);

        let row = Grid::new(5, 1).unwrap();
        assert_eq!(
            neighbor_set(Cell::new(2, 0), &row),
            HashSet::from([Cell::new(1, 0), Cell::new(3, 0)])
        );

        // Out-of-bounds cells have no neighbors
        assert_eq!(get_neighbors(Cell::new(5, 0), &row).count(), 0);
    }

    #[test]
    fn test_get_neighbors_at_coordinate_limit() {
        let grid = Grid::new(u16::MAX, 1).unwrap();
        let last = Cell::new(u16::MAX - 1, 0);
        assert_eq!(
            neighbor_set(last, &grid),
            HashSet::from([Cell::new(u16::MAX - 2, 0)])
        );
    }

    #[test]
    fn test_maze_api() {
        let mut maze = Maze::new(3, 3).unwrap();
        assert_eq!(maze.width(), 3);
        assert_eq!(maze.height(), 3);
        assert!(maze.is_wall_present(Cell::new(0, 0), Cell::new(0, 1)).unwrap());
        assert!(maze.remove_wall(Cell::new(0, 0), Cell::new(0, 1)).unwrap());
        assert!(!maze.is_wall_present(Cell::new(0, 1), Cell::new(0, 0)).unwrap());
        assert_eq!(maze.to_string(), maze.render());
        assert!(matches!(
            Maze::new(0, 0),
            Err(MazeError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_generate_then_reset() {
        let mut maze = Maze::new(6, 4).unwrap();
        maze.generate(11).unwrap();
        assert_eq!(maze.grid().removed_wall_count(), 6 * 4 - 1);
        assert_eq!(maze.generate(11), Err(MazeError::AlreadyGenerated));

        maze.reset();
        assert_eq!(maze, Maze::new(6, 4).unwrap());
        maze.generate(12).unwrap();
        assert_eq!(maze.grid().removed_wall_count(), 6 * 4 - 1);
    }

    #[test]
    fn test_manual_removal_blocks_generation() {
        let mut maze = Maze::new(3, 3).unwrap();
        maze.remove_wall(Cell::new(1, 1), Cell::new(1, 2)).unwrap();
        assert_eq!(maze.generate(0), Err(MazeError::AlreadyGenerated));
    }
}
