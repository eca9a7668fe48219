//! Tests for the double-resolution maze grid and its coordinate mapping

#[cfg(test)]
mod tests {
    use routemaze::spatial::{Cell, Direction, MazeGrid, Tile};

    // Tests new grids are all wall with doubled dimensions
    // Verified by initializing with Tile::Open
    #[test]
    fn test_new_grid_is_all_wall() {
        let grid = MazeGrid::new(3, 4);

        assert_eq!(grid.dimensions(), (7, 9));
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.count(Tile::Wall), 63);
    }

    // Tests cell and wall positions follow the odd/even encoding
    // Verified by dropping the +1 offset in maze_position
    #[test]
    fn test_maze_and_wall_positions() {
        assert_eq!(MazeGrid::maze_position(Cell::new(0, 0)), [1, 1]);
        assert_eq!(MazeGrid::maze_position(Cell::new(2, 3)), [5, 7]);

        assert_eq!(
            MazeGrid::wall_position(Cell::new(0, 0), Cell::new(0, 1)),
            Some([1, 2])
        );
        assert_eq!(
            MazeGrid::wall_position(Cell::new(1, 1), Cell::new(0, 1)),
            Some([2, 3])
        );
        assert_eq!(
            MazeGrid::wall_position(Cell::new(0, 0), Cell::new(1, 1)),
            None,
            "Diagonal cells share no wall"
        );
        assert_eq!(MazeGrid::wall_position(Cell::new(2, 2), Cell::new(2, 2)), None);
    }

    // Tests post detection on even/even positions
    // Verified by checking only the row parity
    #[test]
    fn test_is_post() {
        assert!(MazeGrid::is_post([0, 0]));
        assert!(MazeGrid::is_post([2, 4]));
        assert!(!MazeGrid::is_post([1, 2]));
        assert!(!MazeGrid::is_post([2, 1]));
        assert!(!MazeGrid::is_post([1, 1]));
    }

    // Tests accessors reject out-of-range cells instead of touching posts
    // Verified by removing the contains check in set_cell
    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = MazeGrid::new(2, 2);

        assert_eq!(grid.cell_at(Cell::new(2, 0)), None);
        assert!(!grid.set_cell(Cell::new(0, 2), Tile::Open));
        assert!(!grid.set_wall_between(Cell::new(1, 1), Cell::new(1, 2), Tile::Open));
        assert_eq!(grid.count(Tile::Wall), 25);
    }

    // Tests setters write the expected raw positions
    // Verified by swapping row and column in wall_position
    #[test]
    fn test_set_cell_and_wall() {
        let mut grid = MazeGrid::new(2, 2);

        assert!(grid.set_cell(Cell::new(1, 0), Tile::Open));
        assert!(grid.set_wall_between(Cell::new(1, 0), Cell::new(1, 1), Tile::Open));

        assert_eq!(grid.tile([3, 1]), Some(Tile::Open));
        assert_eq!(grid.tile([3, 2]), Some(Tile::Open));
        assert_eq!(
            grid.wall_between(Cell::new(1, 1), Cell::new(1, 0)),
            Some(Tile::Open)
        );
        assert_eq!(
            grid.wall_between(Cell::new(0, 0), Cell::new(1, 0)),
            Some(Tile::Wall)
        );
    }

    // Tests neighbor lookup clips to the grid
    // Verified by returning unchecked steps
    #[test]
    fn test_neighbor_bounds() {
        let grid = MazeGrid::new(2, 3);

        assert_eq!(grid.neighbor(Cell::new(0, 0), Direction::Up), None);
        assert_eq!(grid.neighbor(Cell::new(0, 0), Direction::Left), None);
        assert_eq!(
            grid.neighbor(Cell::new(0, 0), Direction::Down),
            Some(Cell::new(1, 0))
        );
        assert_eq!(grid.neighbor(Cell::new(1, 2), Direction::Right), None);
        assert_eq!(grid.neighbor(Cell::new(1, 2), Direction::Down), None);
    }

    // Tests open neighbors follow open walls only
    // Verified by ignoring the wall tile
    #[test]
    fn test_open_neighbors() {
        let mut grid = MazeGrid::new(3, 3);
        let center = Cell::new(1, 1);
        grid.set_cell(center, Tile::Open);
        grid.set_cell(Cell::new(0, 1), Tile::Open);
        grid.set_cell(Cell::new(1, 2), Tile::Open);
        grid.set_wall_between(center, Cell::new(0, 1), Tile::Open);

        let neighbors: Vec<Cell> = grid.open_neighbors(center).collect();
        assert_eq!(neighbors, vec![Cell::new(0, 1)]);
    }

    // Tests row-major cell iteration
    // Verified by iterating columns first
    #[test]
    fn test_cells_row_major() {
        let grid = MazeGrid::new(2, 2);
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(
            cells,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(1, 1)
            ]
        );
    }

    // Tests directions, offsets and adjacency helpers agree
    // Verified by swapping Up and Down offsets
    #[test]
    fn test_direction_helpers() {
        assert_eq!(Direction::Up.offset(), (-1, 0));
        assert_eq!(Direction::Right.offset(), (0, 1));
        assert_eq!(Direction::ALL.len(), 4);

        let a = Cell::new(1, 1);
        assert_eq!(a.step(Direction::Up), Some(Cell::new(0, 1)));
        assert_eq!(a.step(Direction::Left), Some(Cell::new(1, 0)));
        assert_eq!(Cell::new(0, 0).step(Direction::Up), None);
        assert!(a.is_adjacent(Cell::new(1, 2)));
        assert!(!a.is_adjacent(a));
    }

    // Tests tile symbols and classification
    // Verified by mapping Start to '.'
    #[test]
    fn test_tile_symbols() {
        let symbols: String = [Tile::Wall, Tile::Open, Tile::Start, Tile::Goal]
            .into_iter()
            .map(Tile::symbol)
            .collect();
        assert_eq!(symbols, "#.SG");
        assert!(Tile::Wall.is_wall());
        assert!(Tile::Start.is_passable());
        assert_eq!(Tile::Goal.to_string(), "G");
    }
}
