//! Extra-path digging: randomized frontier growth off the carved route
//!
//! Each step draws one pending edge uniformly from the live frontier. A wall
//! is only opened when the cell behind it is still solid, so every dug cell
//! gains exactly one entry at the moment it is reached and later candidates
//! into it are discarded as stale.

use crate::algorithm::frontier::{DiggableEdge, Frontier};
use crate::spatial::{Cell, MazeGrid, Tile};
use rand::Rng;

/// Record of one digging pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigReport {
    /// Successful digs in the order they happened
    pub dug: Vec<DiggableEdge>,
    /// Candidates discarded because their target was already open
    pub stale: usize,
    /// Frontier draws performed
    pub steps: usize,
}

impl DigReport {
    /// Number of cells opened by digging
    pub const fn cells_dug(&self) -> usize {
        self.dug.len()
    }

    /// Append another pass to this report
    pub fn merge(&mut self, other: Self) {
        self.dug.extend(other.dug);
        self.stale += other.stale;
        self.steps += other.steps;
    }
}

/// Open extra corridors off every passable cell except `goal`
///
/// Terminates once the frontier is exhausted; the number of steps is bounded
/// by `4·rows·cols`. A `1 × 1` grid is a no-op.
pub fn dig_extra_paths<R: Rng + ?Sized>(grid: &mut MazeGrid, goal: Cell, rng: &mut R) -> DigReport {
    let mut frontier = Frontier::initial(grid, goal);
    let mut report = DigReport::default();

    log::debug!("Digging from {} initial frontier edges", frontier.len());

    while let Some(edge) = frontier.take_random(rng) {
        report.steps += 1;

        let Some(target) = edge.target(grid) else {
            report.stale += 1;
            continue;
        };

        if grid.cell_at(target).is_none_or(Tile::is_passable) {
            report.stale += 1;
            continue;
        }

        dig(grid, edge.origin, target);
        log::trace!("Dug {} -> {target}", edge.origin);
        report.dug.push(edge);
        frontier.push_walled_neighbors(grid, target);
    }

    log::debug!(
        "Digging finished: {} cells dug, {} stale edges, {} steps",
        report.cells_dug(),
        report.stale,
        report.steps
    );

    report
}

// Two writes: the between-wall, then the target corridor
fn dig(grid: &mut MazeGrid, origin: Cell, target: Cell) {
    grid.set_wall_between(origin, target, Tile::Open);
    grid.set_cell(target, Tile::Open);
}
