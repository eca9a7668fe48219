//! Text rendering, one character per maze position

use crate::spatial::MazeGrid;

/// Order in which grid rows are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowOrder {
    /// Last grid row first, so row 0 sits at the bottom (y-up)
    #[default]
    BottomUp,
    /// Grid row 0 first
    TopDown,
}

/// Render the grid as newline-terminated lines of `#`, `.`, `S` and `G`
pub fn render_text(grid: &MazeGrid, order: RowOrder) -> String {
    let (height, width) = grid.dimensions();
    let mut out = String::with_capacity(height * (width + 1));

    let mut lines: Vec<String> = grid
        .tiles()
        .rows()
        .into_iter()
        .map(|row| row.iter().map(|tile| tile.symbol()).collect())
        .collect();

    if order == RowOrder::BottomUp {
        lines.reverse();
    }

    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out
}
