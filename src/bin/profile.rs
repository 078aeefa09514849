use std::time::{Duration, Instant};

use prim_maze::{Maze, logging};

const DEFAULT_ITERS: usize = 10;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = logging::init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(DEFAULT_ITERS);

    let (width, height) = (u8::MAX as u16, u8::MAX as u16);
    let mut maze = Maze::new(width, height)?;
    let mut total = Duration::ZERO;

    for seed in 0..num_iters as u64 {
        maze.reset();
        let started = Instant::now();
        maze.generate(seed)?;
        let elapsed = started.elapsed();
        total += elapsed;

        let removed = maze.grid().removed_wall_count();
        if removed + 1 != maze.grid().cell_count() {
            return Err(
                format!("seed {seed}: expected a spanning tree, removed {removed} walls").into(),
            );
        }
        tracing::info!(seed, ?elapsed, "generated {width}x{height} maze");
    }

    println!(
        "Generated {num_iters} mazes of {width}x{height} in {total:?} ({:?} per maze)",
        total.checked_div(num_iters as u32).unwrap_or_default()
    );
    Ok(())
}
