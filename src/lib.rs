pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod renderer;

pub use error::MazeError;
pub use maze::{Cell, Grid, Maze, Orientation};
pub use renderer::{Glyphs, Renderer};
