/// Reachability of cells from the start through open walls
pub mod reachability;
/// Dead end, junction and coverage counts
pub mod statistics;
