//! Tests for maze layout statistics

#[cfg(test)]
mod tests {
    use routemaze::analysis::statistics::MazeStatistics;
    use routemaze::spatial::{Cell, MazeGrid, Tile};
    use routemaze::{MazeBuilder, Route};

    // Tests dead ends and junctions on a hand-built plus shape
    // Verified by counting closed walls instead of open ones
    #[test]
    fn test_plus_shape_counts() {
        let mut grid = MazeGrid::new(3, 3);
        let center = Cell::new(1, 1);
        grid.set_cell(center, Tile::Open);
        for arm in [Cell::new(0, 1), Cell::new(2, 1), Cell::new(1, 0), Cell::new(1, 2)] {
            grid.set_cell(arm, Tile::Open);
            grid.set_wall_between(center, arm, Tile::Open);
        }

        let stats = MazeStatistics::from_grid(&grid);
        assert_eq!(stats.total_cells, 9);
        assert_eq!(stats.open_cells, 5);
        assert_eq!(stats.dead_ends, 4);
        assert_eq!(stats.junctions, 1);
        assert_eq!(stats.reachable_cells, 0);
    }

    // Tests full statistics on a built maze
    // Verified by leaving route cells at zero
    #[test]
    fn test_from_maze() {
        let route = Route::from_pairs(&[(0, 0), (0, 1), (1, 1), (1, 0)])
            .unwrap_or_else(|e| unreachable!("{e}"));
        let maze = MazeBuilder::new(3, 3, route)
            .unwrap_or_else(|e| unreachable!("{e}"))
            .build_seeded(4);

        let stats = MazeStatistics::from_maze(&maze);
        assert_eq!(stats.route_cells, 4);
        assert_eq!(stats.dug_cells, maze.dig_report().cells_dug());
        assert_eq!(stats.open_cells, stats.route_cells + stats.dug_cells);
        assert_eq!(stats.reachable_cells, stats.open_cells);
        assert!(stats.coverage() > 0.0 && stats.coverage() <= 1.0);
    }

    // Tests the summary line mentions the counts
    // Verified by omitting dead ends from Display
    #[test]
    fn test_display() {
        let stats = MazeStatistics {
            total_cells: 4,
            open_cells: 4,
            route_cells: 3,
            dug_cells: 1,
            dead_ends: 2,
            junctions: 0,
            reachable_cells: 4,
        };
        let text = stats.to_string();
        assert!(text.contains("4/4 cells open"));
        assert!(text.contains("2 dead ends"));
        assert!(text.contains("100.0% reachable"));
    }

    // Tests coverage of an empty summary is zero
    // Verified by dividing without the zero guard
    #[test]
    fn test_empty_coverage() {
        assert!(MazeStatistics::default().coverage().abs() < f64::EPSILON);
    }
}
