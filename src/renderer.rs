use crate::error::{MazeError, Result};
use crate::maze::{Cell, Grid, Orientation};

/// Characters used to draw a maze diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    /// An open passage between two cells.
    pub passage: char,
    /// A wall below a cell, also used for the top and bottom of the frame.
    pub horizontal_wall: char,
    /// A wall to the right of a cell, also used for the sides of the frame.
    pub vertical_wall: char,
    /// The two top corners of the frame.
    pub corner: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            passage: ' ',
            horizontal_wall: '_',
            vertical_wall: '|',
            corner: ' ',
        }
    }
}

/// Draws a grid as a text diagram and reads such diagrams back.
///
/// A `width` x `height` grid becomes `height + 1` lines of `2 * width + 1` glyphs:
///
/// ```text
///  _____
/// |  _  |
/// | |_  |
/// |_ _|_|
/// ```
///
/// The first line is the top of the frame. Each following line starts with the west side of the
/// frame, then holds two glyphs per cell: the wall below it and the wall to its right. Cells on the
/// last row or column always show a wall there, which closes the frame.
#[derive(Debug, Default, Clone)]
pub struct Renderer {
    glyphs: Glyphs,
}

impl Renderer {
    /// Fails with [`MazeError::InvalidGlyphs`] if the passage glyph matches a wall glyph.
    pub fn new(glyphs: Glyphs) -> Result<Self> {
        if glyphs.passage == glyphs.horizontal_wall || glyphs.passage == glyphs.vertical_wall {
            return Err(MazeError::InvalidGlyphs);
        }
        Ok(Self { glyphs })
    }

    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }

    pub fn render(&self, grid: &Grid) -> String {
        let Glyphs {
            passage,
            horizontal_wall,
            vertical_wall,
            corner,
        } = self.glyphs;
        let (width, height) = (grid.width(), grid.height());
        let line_len = 2 * width as usize + 1;
        let mut out = String::with_capacity((line_len + 1) * (height as usize + 1));

        out.push(corner);
        (1..line_len - 1).for_each(|_| out.push(horizontal_wall));
        out.push(corner);
        out.push('\n');

        for y in 0..height {
            out.push(vertical_wall);
            for x in 0..width {
                let cell = Cell::new(x, y);
                // No interior wall after the last row or column, only the frame
                let south = grid
                    .is_wall_after(cell, Orientation::Horizontal)
                    .unwrap_or(true);
                let east = grid
                    .is_wall_after(cell, Orientation::Vertical)
                    .unwrap_or(true);
                out.push(if south { horizontal_wall } else { passage });
                out.push(if east { vertical_wall } else { passage });
            }
            out.push('\n');
        }
        out
    }

    /// Reads a diagram produced by [`Renderer::render`] with the same glyphs back into a grid.
    pub fn parse(&self, text: &str) -> Result<Grid> {
        let Glyphs {
            passage,
            horizontal_wall,
            vertical_wall,
            corner,
        } = self.glyphs;
        let malformed = |line: usize, reason: String| MazeError::MalformedDiagram { line, reason };

        let lines = text
            .lines()
            .map(|line| line.chars().collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let Some((top, rows)) = lines.split_first() else {
            return Err(malformed(0, "empty diagram".into()));
        };

        let line_len = top.len();
        if line_len < 3 || line_len % 2 == 0 {
            return Err(malformed(
                0,
                format!("frame width {line_len} is not an odd number of at least 3"),
            ));
        }
        let width = u16::try_from((line_len - 1) / 2)
            .map_err(|_| malformed(0, "too many columns".into()))?;
        let height =
            u16::try_from(rows.len()).map_err(|_| malformed(rows.len(), "too many rows".into()))?;
        if height == 0 {
            return Err(malformed(1, "no cell rows below the frame".into()));
        }

        let top_closed = top[0] == corner
            && top[line_len - 1] == corner
            && top[1..line_len - 1].iter().all(|&c| c == horizontal_wall);
        if !top_closed {
            return Err(malformed(0, "top of the frame is not closed".into()));
        }

        let mut grid = Grid::new(width, height)?;
        for (row, y) in rows.iter().zip(0..height) {
            let line = y as usize + 1;
            if row.len() != line_len {
                return Err(malformed(
                    line,
                    format!("expected {line_len} glyphs, found {}", row.len()),
                ));
            }
            if row[0] != vertical_wall {
                return Err(malformed(line, "west side of the frame is open".into()));
            }

            for x in 0..width {
                let cell = Cell::new(x, y);
                let south = row[2 * x as usize + 1];
                let east = row[2 * x as usize + 2];

                if south == passage && y + 1 < height {
                    grid.remove_wall(cell, Cell::new(x, y + 1))?;
                } else if south != horizontal_wall {
                    return Err(malformed(
                        line,
                        format!("unexpected glyph {south:?} below cell {cell}"),
                    ));
                }

                if east == passage && x + 1 < width {
                    grid.remove_wall(cell, Cell::new(x + 1, y))?;
                } else if east != vertical_wall {
                    return Err(malformed(
                        line,
                        format!("unexpected glyph {east:?} right of cell {cell}"),
                    ));
                }
            }
        }
        Ok(grid)
    }
}
