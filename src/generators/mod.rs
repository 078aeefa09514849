use rand::{SeedableRng, rngs::StdRng};

mod frontier;
mod prim;

pub use frontier::FrontierSet;
pub use prim::{randomized_prim, start_cell};

use crate::error::Result;
use crate::maze::Grid;

/// Get a random number generator seeded for reproducibility.
pub fn get_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generates a perfect maze into a pristine `grid`, drawing randomness from a generator seeded
/// with `seed`.
pub fn generate_maze(grid: &mut Grid, seed: u64) -> Result<()> {
    tracing::debug!(
        width = grid.width(),
        height = grid.height(),
        seed,
        start = %start_cell(grid),
        "generating maze"
    );
    let mut rng = get_rng(seed);
    randomized_prim(grid, &mut rng)?;
    tracing::debug!(removed = grid.removed_wall_count(), "maze generated");
    Ok(())
}
