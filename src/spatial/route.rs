//! Validated trunk route from the start cell to the goal cell

use crate::io::error::{Result, invalid_route};
use crate::spatial::grid::Cell;
use std::collections::HashMap;

/// Ordered, non-empty sequence of 4-adjacent cells
///
/// The first cell is the start and the last is the goal. Every cell appears
/// once, so start and goal only coincide for a single-cell route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    cells: Vec<Cell>,
}

impl Route {
    /// Validate and wrap a cell sequence
    ///
    /// # Errors
    ///
    /// Returns [`crate::MazeError::InvalidRoute`] if the sequence is empty,
    /// if two consecutive cells are not 4-adjacent, or if a cell appears a
    /// second time
    pub fn new(cells: Vec<Cell>) -> Result<Self> {
        if cells.is_empty() {
            return Err(invalid_route(0, &"route must contain at least one cell"));
        }

        let mut first_seen: HashMap<Cell, usize> = HashMap::with_capacity(cells.len());
        for (index, &cell) in cells.iter().enumerate() {
            if let Some(previous) = index.checked_sub(1).and_then(|i| cells.get(i)) {
                if *previous == cell {
                    return Err(invalid_route(
                        index,
                        &format!("cell {cell} repeats its predecessor"),
                    ));
                }
                if !previous.is_adjacent(cell) {
                    return Err(invalid_route(
                        index,
                        &format!("cell {cell} is not adjacent to {previous}"),
                    ));
                }
            }
            if let Some(earlier) = first_seen.insert(cell, index) {
                return Err(invalid_route(
                    index,
                    &format!("cell {cell} revisits route cell {earlier}"),
                ));
            }
        }

        Ok(Self { cells })
    }

    /// Build from `(row, col)` pairs
    ///
    /// # Errors
    ///
    /// Same conditions as [`Route::new`]
    pub fn from_pairs(pairs: &[(usize, usize)]) -> Result<Self> {
        Self::new(pairs.iter().copied().map(Cell::from).collect())
    }

    /// Route cells in walking order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a validated route
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// First cell of the route
    pub fn start(&self) -> Cell {
        self.cells.first().copied().unwrap_or(Cell::new(0, 0))
    }

    /// Last cell of the route
    pub fn goal(&self) -> Cell {
        self.cells.last().copied().unwrap_or(Cell::new(0, 0))
    }

    /// Consecutive cell pairs, one per carved route wall
    pub fn steps(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        self.cells.windows(2).filter_map(|pair| match pair {
            [previous, current] => Some((*previous, *current)),
            _ => None,
        })
    }

    /// Smallest `(rows, cols)` grid that contains every route cell
    ///
    /// Saturates at `usize::MAX` so oversized coordinates surface as a
    /// dimension error in [`crate::MazeBuilder::new`].
    pub fn extent(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(rows, cols), cell| {
            (
                rows.max(cell.row.saturating_add(1)),
                cols.max(cell.col.saturating_add(1)),
            )
        })
    }
}
