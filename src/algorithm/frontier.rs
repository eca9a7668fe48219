//! Pending dig candidates for the extra-path phase

use crate::spatial::{Cell, Direction, MazeGrid, Tile};
use rand::Rng;

/// Candidate wall between an open origin cell and a walled neighbor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiggableEdge {
    /// Open cell the dig starts from
    pub origin: Cell,
    /// Direction of the neighbor to dig into
    pub direction: Direction,
}

impl DiggableEdge {
    /// Create a candidate edge
    pub const fn new(origin: Cell, direction: Direction) -> Self {
        Self { origin, direction }
    }

    /// Cell on the far side of the wall, if it is on the grid
    pub fn target(&self, grid: &MazeGrid) -> Option<Cell> {
        grid.neighbor(self.origin, self.direction)
    }
}

/// Unordered pool of diggable edges with uniform random removal
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    edges: Vec<DiggableEdge>,
}

impl Frontier {
    /// Seed the frontier from every passable cell except `excluded`
    ///
    /// Cells are scanned row-major and directions in [`Direction::ALL`] order.
    pub fn initial(grid: &MazeGrid, excluded: Cell) -> Self {
        let mut frontier = Self::with_capacity(4 * grid.rows() * grid.cols());
        for cell in grid.cells() {
            if cell == excluded {
                continue;
            }
            if grid.cell_at(cell).is_some_and(Tile::is_passable) {
                frontier.push_walled_neighbors(grid, cell);
            }
        }
        frontier
    }

    /// Create an empty frontier with room for `capacity` edges
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
        }
    }

    /// Queue an edge toward every in-bounds neighbor whose corridor is a wall
    pub fn push_walled_neighbors(&mut self, grid: &MazeGrid, cell: Cell) {
        for direction in Direction::ALL {
            let walled = grid
                .neighbor(cell, direction)
                .and_then(|next| grid.cell_at(next))
                .is_some_and(Tile::is_wall);
            if walled {
                self.edges.push(DiggableEdge::new(cell, direction));
            }
        }
    }

    /// Remove and return a uniformly chosen pending edge
    pub fn take_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<DiggableEdge> {
        if self.edges.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.edges.len());
        Some(self.edges.swap_remove(index))
    }

    /// Number of pending edges
    pub const fn len(&self) -> usize {
        self.edges.len()
    }

    /// True when no edges are pending
    pub const fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

}
