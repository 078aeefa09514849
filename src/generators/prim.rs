use rand::Rng;

use super::frontier::FrontierSet;
use crate::error::{MazeError, Result};
use crate::maze::{Cell, Grid, get_neighbors};

/// The cell randomized Prim's grows the tree from: the grid's center, rounding down.
pub fn start_cell(grid: &Grid) -> Cell {
    Cell::new(grid.width() / 2, grid.height() / 2)
}

/// Carves a spanning tree into `grid` with randomized Prim's algorithm.
///
/// Each step draws a frontier cell uniformly from `rng`, then draws one of its neighbors that is
/// already in the tree, and removes the wall between them. The sequence of draws is fixed, so the
/// result depends only on the grid dimensions and the state of `rng`.
///
/// Requires a pristine grid, otherwise returns [`MazeError::AlreadyGenerated`] without touching
/// the grid or drawing from `rng`.
pub fn randomized_prim<R: Rng>(grid: &mut Grid, rng: &mut R) -> Result<()> {
    if !grid.is_pristine() {
        return Err(MazeError::AlreadyGenerated);
    }

    let total_cells = grid.cell_count();
    let start = start_cell(grid);

    // Tree membership, indexed by ravel index
    let mut visited = vec![false; total_cells].into_boxed_slice();
    visited[grid.ravel_index(start)] = true;
    let mut visited_count = 1;

    let mut frontiers = get_neighbors(start, grid).collect::<FrontierSet<_>>();

    while let Some(frontier) = frontiers.take_random(rng) {
        // Every frontier cell was admitted by at least one visited neighbor
        let in_tree = get_neighbors(frontier, grid)
            .filter(|&c| visited[grid.ravel_index(c)])
            .collect::<Vec<_>>();
        debug_assert!(!in_tree.is_empty(), "frontier cell {frontier} has no tree neighbor");
        if in_tree.is_empty() {
            continue;
        }
        let existing = in_tree[rng.random_range(0..in_tree.len())];

        // Carve a passage between the tree and the frontier cell
        grid.remove_wall(existing, frontier)?;
        visited[grid.ravel_index(frontier)] = true;
        visited_count += 1;
        tracing::trace!(%existing, %frontier, "carved passage");

        get_neighbors(frontier, grid)
            .filter(|&c| !visited[grid.ravel_index(c)])
            .for_each(|c| {
                frontiers.insert(c);
            });
    }

    debug_assert_eq!(visited_count, total_cells);
    Ok(())
}
