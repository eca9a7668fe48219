//! Builder orchestration: validate input, carve the route, dig extra paths

use crate::{
    algorithm::carving::carve_route,
    algorithm::digging::{DigReport, dig_extra_paths},
    io::configuration::MAX_GRID_DIMENSION,
    io::error::{Result, invalid_parameter, invalid_route},
    spatial::{Cell, MazeGrid, Route},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Validated maze construction input
///
/// Construction is a pure function of `(rows, cols, route, rng)`: the same
/// route and the same sequence of random draws always yield the same grid.
#[derive(Debug, Clone)]
pub struct MazeBuilder {
    rows: usize,
    cols: usize,
    route: Route,
}

impl MazeBuilder {
    /// Check dimensions and route bounds
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `rows` or `cols` is zero or exceeds [`MAX_GRID_DIMENSION`]
    /// - Any route cell lies outside the `rows × cols` grid
    pub fn new(rows: usize, cols: usize, route: Route) -> Result<Self> {
        validate_dimension("rows", rows)?;
        validate_dimension("cols", cols)?;

        if let Some((index, cell)) = route
            .cells()
            .iter()
            .enumerate()
            .find(|(_, cell)| cell.row >= rows || cell.col >= cols)
        {
            return Err(invalid_route(
                index,
                &format!("cell {cell} lies outside the {rows}x{cols} grid"),
            ));
        }

        Ok(Self { rows, cols, route })
    }

    /// Builder sized to the route's own extent
    ///
    /// # Errors
    ///
    /// Returns an error if the extent exceeds [`MAX_GRID_DIMENSION`]
    pub fn fitted(route: Route) -> Result<Self> {
        let (rows, cols) = route.extent();
        Self::new(rows, cols, route)
    }

    /// Number of logical cell rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of logical cell columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Trunk route
    pub const fn route(&self) -> &Route {
        &self.route
    }

    /// Run only the route carving phase
    pub fn carve(&self) -> MazeGrid {
        carve_route(self.rows, self.cols, &self.route)
    }

    /// Carve the route, then dig extra paths with the given random source
    pub fn build<R: Rng + ?Sized>(self, rng: &mut R) -> Maze {
        let mut grid = self.carve();
        let report = dig_extra_paths(&mut grid, self.route.goal(), rng);
        Maze {
            grid,
            route: self.route,
            report,
        }
    }

    /// Build with a fresh [`StdRng`] seeded from `seed`
    pub fn build_seeded(self, seed: u64) -> Maze {
        let mut rng = StdRng::seed_from_u64(seed);
        self.build(&mut rng)
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be positive"));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}

/// Finished maze handed to renderers
#[derive(Debug, Clone)]
pub struct Maze {
    grid: MazeGrid,
    route: Route,
    report: DigReport,
}

impl Maze {
    /// Wall/corridor grid
    pub const fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    /// Route the trunk corridor follows
    pub const fn route(&self) -> &Route {
        &self.route
    }

    /// Start cell
    pub fn start(&self) -> Cell {
        self.route.start()
    }

    /// Goal cell
    pub fn goal(&self) -> Cell {
        self.route.goal()
    }

    /// Accumulated digging record
    pub const fn dig_report(&self) -> &DigReport {
        &self.report
    }

    /// Run the digging phase again on the finished grid
    ///
    /// Every passable cell except the goal, including previously dug ones,
    /// seeds the new frontier. Only walls into still-solid cells are opened.
    pub fn dig_again<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &DigReport {
        let pass = dig_extra_paths(&mut self.grid, self.route.goal(), rng);
        self.report.merge(pass);
        &self.report
    }

    /// Split into grid, route and dig report
    pub fn into_parts(self) -> (MazeGrid, Route, DigReport) {
        (self.grid, self.route, self.report)
    }
}
