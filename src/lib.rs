//! Maze construction from a hand-drawn grid route
//!
//! A route of 4-adjacent cells is carved into a double-resolution
//! wall/corridor grid as the trunk corridor, then a randomized frontier digs
//! branching dead ends off it without ever opening a second wall into a cell
//! that is already open.

#![forbid(unsafe_code)]

/// Route carving, frontier digging and builder orchestration
pub mod algorithm;
/// Reachability and layout statistics for finished mazes
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Maze grid, cells, directions and routes
pub mod spatial;

pub use algorithm::builder::{Maze, MazeBuilder};
pub use io::error::{MazeError, Result};
pub use spatial::{Cell, Direction, MazeGrid, Route, Tile};
