/// Maze builder orchestration and the finished maze
pub mod builder;
/// Route carving phase
pub mod carving;
/// Randomized extra-path digging phase
pub mod digging;
/// Diggable edge bookkeeping
pub mod frontier;
