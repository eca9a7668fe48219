//! Structural summary of a finished maze

use crate::algorithm::builder::Maze;
use crate::analysis::reachability::Reachability;
use crate::spatial::{MazeGrid, Tile};
use std::collections::HashSet;
use std::fmt;

/// Counts describing a maze's layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MazeStatistics {
    /// Logical cells on the grid
    pub total_cells: usize,
    /// Passable cells, including start and goal
    pub open_cells: usize,
    /// Distinct cells on the route
    pub route_cells: usize,
    /// Cells opened by digging
    pub dug_cells: usize,
    /// Passable cells with exactly one open wall
    pub dead_ends: usize,
    /// Passable cells with three or more open walls
    pub junctions: usize,
    /// Cells reachable from the start
    pub reachable_cells: usize,
}

impl MazeStatistics {
    /// Summarize a maze
    pub fn from_maze(maze: &Maze) -> Self {
        let grid = maze.grid();
        let route_cells = maze.route().cells().iter().collect::<HashSet<_>>().len();
        let reachability = Reachability::from_origin(grid, maze.start());

        let mut stats = Self::from_grid(grid);
        stats.route_cells = route_cells;
        stats.dug_cells = maze.dig_report().cells_dug();
        stats.reachable_cells = reachability.count();
        stats
    }

    /// Grid-only counts; route, dig and reachability fields stay zero
    pub fn from_grid(grid: &MazeGrid) -> Self {
        let mut stats = Self {
            total_cells: grid.rows() * grid.cols(),
            ..Self::default()
        };

        for cell in grid.cells() {
            if !grid.cell_at(cell).is_some_and(Tile::is_passable) {
                continue;
            }
            stats.open_cells += 1;
            match grid.open_neighbors(cell).count() {
                1 => stats.dead_ends += 1,
                n if n >= 3 => stats.junctions += 1,
                _ => {}
            }
        }

        stats
    }

    /// Fraction of logical cells reachable from the start
    pub fn coverage(&self) -> f64 {
        if self.total_cells == 0 {
            return 0.0;
        }
        self.reachable_cells as f64 / self.total_cells as f64
    }
}

impl fmt::Display for MazeStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} cells open ({} route, {} dug), {} dead ends, {} junctions, {:.1}% reachable",
            self.open_cells,
            self.total_cells,
            self.route_cells,
            self.dug_cells,
            self.dead_ends,
            self.junctions,
            self.coverage() * 100.0
        )
    }
}
