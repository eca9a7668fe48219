/// Command-line interface and batch processor
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export
pub mod image;
/// Batch progress display
pub mod progress;
/// Route file parsing
pub mod route_file;
/// Text rendering
pub mod text;
/// Construction replay GIF export
pub mod visualization;
