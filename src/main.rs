use prim_maze::{Maze, logging};

const DEFAULT_WIDTH: u16 = 20;
const DEFAULT_HEIGHT: u16 = 10;

/// Parse a positional argument, falling back to `default` when it is absent.
fn parse_arg<T: std::str::FromStr>(
    arg: Option<String>,
    name: &str,
    default: T,
) -> Result<T, String> {
    match arg {
        Some(s) => s.parse::<T>().map_err(|_| format!("invalid {name}: {s:?}")),
        None => Ok(default),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = logging::init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let width = parse_arg(args.next(), "width", DEFAULT_WIDTH)?;
    let height = parse_arg(args.next(), "height", DEFAULT_HEIGHT)?;
    let seed = parse_arg(args.next(), "seed", 0u64)?;

    let mut maze = Maze::new(width, height)?;
    maze.generate(seed)?;
    tracing::info!(width, height, seed, "generated maze");
    print!("{maze}");
    Ok(())
}
