use thiserror::Error;

use crate::maze::Cell;

/// Errors surfaced by maze construction, wall operations, generation and diagram parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("invalid maze dimensions {width}x{height}: both must be at least 1")]
    InvalidDimension { width: u16, height: u16 },

    #[error("cells {a} and {b} are not grid-adjacent")]
    NonAdjacentCells { a: Cell, b: Cell },

    #[error("cell {cell} is outside the {width}x{height} grid")]
    OutOfBounds { cell: Cell, width: u16, height: u16 },

    #[error("maze already has removed walls; reset it before generating again")]
    AlreadyGenerated,

    #[error("malformed maze diagram at line {line}: {reason}")]
    MalformedDiagram { line: usize, reason: String },

    #[error("passage glyph must differ from both wall glyphs")]
    InvalidGlyphs,
}

pub type Result<T> = std::result::Result<T, MazeError>;
