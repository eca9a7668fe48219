//! Command-line interface for batch processing route files into mazes

use crate::algorithm::builder::{Maze, MazeBuilder};
use crate::analysis::statistics::MazeStatistics;
use crate::io::configuration::{
    DEFAULT_CELL_PIXELS, DEFAULT_SEED, GIF_FRAME_DELAY_MS, OUTPUT_SUFFIX, ROUTE_EXTENSION,
    VISUALIZATION_SUFFIX,
};
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::io::image::{RenderStyle, export_maze_as_png};
use crate::io::progress::{ProgressManager, Stage};
use crate::io::route_file::read_route;
use crate::io::text::{RowOrder, render_text};
use crate::io::visualization::ConstructionCapture;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "routemaze")]
#[command(
    author,
    version,
    about = "Turn hand-drawn grid routes into printable mazes"
)]
/// Command-line arguments for the maze builder
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Route file or directory of `.route` files to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Logical grid rows (defaults to the route's extent)
    #[arg(short, long)]
    pub rows: Option<usize>,

    /// Logical grid columns (defaults to the route's extent)
    #[arg(short, long)]
    pub cols: Option<usize>,

    /// Random seed for reproducible digging
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Pixels per maze position in exported images
    #[arg(long, default_value_t = DEFAULT_CELL_PIXELS)]
    pub scale: u32,

    /// Highlight the route corridor in exported images
    #[arg(long)]
    pub solution: bool,

    /// Print the text rendering to stdout
    #[arg(short, long)]
    pub print: bool,

    /// Print grid row 0 first instead of last
    #[arg(long)]
    pub top_down: bool,

    /// Also export the construction replay as an animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Rendering options derived from the flags
    pub const fn render_style(&self) -> RenderStyle {
        RenderStyle {
            cell_pixels: self.scale,
            highlight_solution: self.solution,
        }
    }

    /// Text row order derived from the flags
    pub const fn row_order(&self) -> RowOrder {
        if self.top_down {
            RowOrder::TopDown
        } else {
            RowOrder::BottomUp
        }
    }
}

/// Orchestrates batch processing of route files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, route loading, maze
    /// construction or export fails
    pub fn process(&mut self) -> Result<()> {
        self.cli.render_style().validate()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            log::info!("Nothing to do for {}", self.cli.target.display());
            return Ok(());
        }

        self.progress_manager.initialize(files.len());

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        self.progress_manager.finish();

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if self.should_process_file(target) {
                Ok(vec![target.clone()])
            } else {
                Ok(vec![])
            }
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| MazeError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;
            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if is_route_file(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a route file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            log::warn!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();

        self.progress_manager.start_file(index, input_path);

        let route = read_route(input_path)?;
        let (fitted_rows, fitted_cols) = route.extent();
        let rows = self.cli.rows.unwrap_or(fitted_rows);
        let cols = self.cli.cols.unwrap_or(fitted_cols);
        let builder = MazeBuilder::new(rows, cols, route)?;

        self.progress_manager.set_stage(index, Stage::Building);
        let maze = builder.build_seeded(self.cli.seed);
        log::info!(
            "{}: {}",
            input_path.display(),
            MazeStatistics::from_maze(&maze)
        );

        self.progress_manager.set_stage(index, Stage::Exporting);
        self.export(&maze, input_path)?;

        self.progress_manager.complete_file(index, start_time.elapsed());

        Ok(())
    }

    // Allow print for the text rendering requested with --print
    #[allow(clippy::print_stdout)]
    fn export(&self, maze: &Maze, input_path: &Path) -> Result<()> {
        let style = self.cli.render_style();

        export_maze_as_png(
            maze.grid(),
            maze.route(),
            &style,
            &Self::get_output_path(input_path),
        )?;

        if self.cli.visualize {
            ConstructionCapture::from_maze(maze).export_gif(
                &Self::get_visualization_path(input_path),
                &style,
                GIF_FRAME_DELAY_MS,
            )?;
        }

        if self.cli.print {
            print!("{}", render_text(maze.grid(), self.cli.row_order()));
        }

        Ok(())
    }

    /// Path of the PNG written for a route file
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, OUTPUT_SUFFIX, "png")
    }

    /// Path of the construction GIF written for a route file
    pub fn get_visualization_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, VISUALIZATION_SUFFIX, "gif")
    }

    fn sibling_path(input_path: &Path, suffix: &str, extension: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(name)
        } else {
            PathBuf::from(name)
        }
    }
}

fn is_route_file(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(ROUTE_EXTENSION)
}
