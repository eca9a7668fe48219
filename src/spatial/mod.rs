//! Spatial data structures for the maze
//!
//! This module contains:
//! - The double-resolution wall/corridor grid
//! - Cell, direction and tile primitives
//! - The validated trunk route

/// Maze grid, tiles, cells and directions
pub mod grid;
/// Validated route through the logical grid
pub mod route;

pub use grid::{Cell, Direction, MazeGrid, Tile};
pub use route::Route;
