//! Breadth-first reachability over open corridors

use crate::spatial::{Cell, MazeGrid, Tile};
use bitvec::bitvec;
use bitvec::vec::BitVec;
use std::collections::VecDeque;

/// Set of logical cells reachable from an origin through open walls
///
/// Digging only grows from cells it can enqueue, so some cells may stay
/// solid; this records which ones a walker can actually reach.
#[derive(Debug, Clone)]
pub struct Reachability {
    reached: BitVec,
    cols: usize,
}

impl Reachability {
    /// Flood-fill from `origin`
    ///
    /// An origin that is off the grid or solid reaches nothing.
    pub fn from_origin(grid: &MazeGrid, origin: Cell) -> Self {
        let cols = grid.cols();
        let mut reached = bitvec![0; grid.rows() * cols];

        let origin_open = grid.cell_at(origin).is_some_and(Tile::is_passable);
        if !origin_open {
            return Self { reached, cols };
        }

        let mut queue = VecDeque::from([origin]);
        reached.set(origin.row * cols + origin.col, true);

        while let Some(cell) = queue.pop_front() {
            for next in grid.open_neighbors(cell) {
                let index = next.row * cols + next.col;
                if reached.get(index).as_deref() == Some(&false) {
                    reached.set(index, true);
                    queue.push_back(next);
                }
            }
        }

        Self { reached, cols }
    }

    /// Check whether a cell was reached
    pub fn contains(&self, cell: Cell) -> bool {
        cell.col < self.cols
            && self.reached.get(cell.row * self.cols + cell.col).as_deref() == Some(&true)
    }

    /// Number of reached cells
    pub fn count(&self) -> usize {
        self.reached.count_ones()
    }

    /// Cells never reached, row-major
    pub fn unreached(&self) -> Vec<Cell> {
        self.reached
            .iter_zeros()
            .map(|index| Cell::new(index / self.cols, index % self.cols))
            .collect()
    }

    /// True when every logical cell was reached
    pub fn is_complete(&self) -> bool {
        self.reached.all()
    }
}
