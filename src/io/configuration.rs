//! Maze constants and runtime configuration defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed logical grid dimension (rows or columns)
pub const MAX_GRID_DIMENSION: usize = 4_096;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default side length in pixels of one maze position in exported images
pub const DEFAULT_CELL_PIXELS: u32 = 16;

/// Largest accepted pixel scale
pub const MAX_CELL_PIXELS: u32 = 256;

// Colors used by the PNG and GIF renderers
/// Wall and post color
pub const WALL_COLOR: [u8; 4] = [24, 24, 32, 255];
/// Corridor color
pub const OPEN_COLOR: [u8; 4] = [245, 245, 240, 255];
/// Start marker color
pub const START_COLOR: [u8; 4] = [46, 160, 67, 255];
/// Goal marker color
pub const GOAL_COLOR: [u8; 4] = [218, 54, 51, 255];
/// Highlight color for the solution corridor
pub const SOLUTION_COLOR: [u8; 4] = [96, 150, 230, 255];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Input and output naming
/// Extension identifying route files when scanning a directory
pub const ROUTE_EXTENSION: &str = "route";
/// Suffix added to maze image filenames
pub const OUTPUT_SUFFIX: &str = "_maze";
/// Suffix added to construction animation filenames
pub const VISUALIZATION_SUFFIX: &str = "_construction";

/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 20;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// How many frame delays the final frame is held for
pub const FINAL_FRAME_HOLD: u32 = 25;
