//! Double-resolution maze grid with named cell and wall accessors
//!
//! Logical cell `(r, c)` lives at maze position `(2r+1, 2c+1)`. The wall
//! between two 4-adjacent cells sits at the midpoint of their maze positions,
//! and every position with both coordinates even is a permanent wall post.

use ndarray::Array2;
use std::fmt;

/// Symbol stored at a single maze position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    /// Solid wall or intersection post
    #[default]
    Wall,
    /// Open corridor
    Open,
    /// First cell of the route
    Start,
    /// Last cell of the route
    Goal,
}

impl Tile {
    /// Character used by the text renderer
    pub const fn symbol(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Open => '.',
            Self::Start => 'S',
            Self::Goal => 'G',
        }
    }

    /// True for walls and posts
    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }

    /// True for anything a walker can stand on
    pub const fn is_passable(self) -> bool {
        !self.is_wall()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Logical cell coordinate on the `rows × cols` grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
}

impl Cell {
    /// Create a cell coordinate
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check 4-adjacency (exactly one step along one axis)
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }

    /// Step one cell in a direction without bounds beyond zero
    ///
    /// Returns `None` when the step would leave the non-negative quadrant.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.offset();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Self { row, col })
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four grid directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Row decreases
    Up,
    /// Row increases
    Down,
    /// Column decreases
    Left,
    /// Column increases
    Right,
}

impl Direction {
    /// All directions in frontier enumeration order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Row and column delta
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// Wall/corridor grid of size `(2·rows+1) × (2·cols+1)`
///
/// Writes go through cell and wall setters only, so intersection posts can
/// never be opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGrid {
    tiles: Array2<Tile>,
    rows: usize,
    cols: usize,
}

impl MazeGrid {
    /// Create a grid with every position set to [`Tile::Wall`]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            tiles: Array2::from_elem((2 * rows + 1, 2 * cols + 1), Tile::Wall),
            rows,
            cols,
        }
    }

    /// Number of logical cell rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of logical cell columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Maze dimensions in positions (height, width)
    pub const fn dimensions(&self) -> (usize, usize) {
        (2 * self.rows + 1, 2 * self.cols + 1)
    }

    /// Raw tile array, row 0 first
    pub const fn tiles(&self) -> &Array2<Tile> {
        &self.tiles
    }

    /// Check that a cell lies on the logical grid
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Maze position of a logical cell
    pub const fn maze_position(cell: Cell) -> [usize; 2] {
        [2 * cell.row + 1, 2 * cell.col + 1]
    }

    /// Maze position of the wall between two adjacent cells
    pub const fn wall_position(a: Cell, b: Cell) -> Option<[usize; 2]> {
        if !a.is_adjacent(b) {
            return None;
        }
        let [ar, ac] = Self::maze_position(a);
        let [br, bc] = Self::maze_position(b);
        Some([(ar + br) / 2, (ac + bc) / 2])
    }

    /// True for intersection posts (both coordinates even)
    pub const fn is_post(position: [usize; 2]) -> bool {
        position[0] % 2 == 0 && position[1] % 2 == 0
    }

    /// Tile at a raw maze position
    pub fn tile(&self, position: [usize; 2]) -> Option<Tile> {
        self.tiles.get(position).copied()
    }

    /// Corridor tile of a logical cell
    pub fn cell_at(&self, cell: Cell) -> Option<Tile> {
        if !self.contains(cell) {
            return None;
        }
        self.tile(Self::maze_position(cell))
    }

    /// Wall tile between two adjacent in-bounds cells
    pub fn wall_between(&self, a: Cell, b: Cell) -> Option<Tile> {
        if !self.contains(a) || !self.contains(b) {
            return None;
        }
        self.tile(Self::wall_position(a, b)?)
    }

    /// In-bounds neighbor of a cell
    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        cell.step(direction).filter(|next| self.contains(*next))
    }

    /// Overwrite a cell's corridor tile; returns false when out of bounds
    pub fn set_cell(&mut self, cell: Cell, tile: Tile) -> bool {
        if !self.contains(cell) {
            return false;
        }
        self.set_tile(Self::maze_position(cell), tile)
    }

    /// Overwrite the wall between two adjacent cells; returns false otherwise
    pub fn set_wall_between(&mut self, a: Cell, b: Cell, tile: Tile) -> bool {
        if !self.contains(a) || !self.contains(b) {
            return false;
        }
        Self::wall_position(a, b).is_some_and(|position| self.set_tile(position, tile))
    }

    fn set_tile(&mut self, position: [usize; 2], tile: Tile) -> bool {
        self.tiles.get_mut(position).is_some_and(|slot| {
            *slot = tile;
            true
        })
    }

    /// Iterate over all logical cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Cell::new(row, col)))
    }

    /// Passable cells adjacent to `cell` through an open wall
    pub fn open_neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        Direction::ALL.into_iter().filter_map(move |direction| {
            let next = self.neighbor(cell, direction)?;
            self.wall_between(cell, next)
                .filter(|tile| tile.is_passable())
                .map(|_| next)
        })
    }

    /// Number of positions holding the given tile
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|t| **t == tile).count()
    }
}
