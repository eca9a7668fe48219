//! Route carving: stamps the trunk corridor into an all-wall grid

use crate::spatial::{MazeGrid, Route, Tile};

/// Carve a route into a fresh `rows × cols` maze grid
///
/// Every route cell and every wall between consecutive route cells becomes
/// [`Tile::Open`]. The start and goal are labelled last so no carve step can
/// overwrite them; for a single-cell route the goal label wins.
pub fn carve_route(rows: usize, cols: usize, route: &Route) -> MazeGrid {
    let mut grid = MazeGrid::new(rows, cols);
    carve_into(&mut grid, route);
    grid
}

/// Carve a route into an existing grid without resetting it first
pub fn carve_into(grid: &mut MazeGrid, route: &Route) {
    for (index, &cell) in route.cells().iter().enumerate() {
        grid.set_cell(cell, Tile::Open);
        if let Some(previous) = index
            .checked_sub(1)
            .and_then(|i| route.cells().get(i))
        {
            grid.set_wall_between(*previous, cell, Tile::Open);
        }
    }

    grid.set_cell(route.start(), Tile::Start);
    grid.set_cell(route.goal(), Tile::Goal);

    log::debug!(
        "Carved route of {} cells into {}x{} grid",
        route.len(),
        grid.rows(),
        grid.cols()
    );
}
