//! Construction replay as an animated GIF

use crate::algorithm::builder::Maze;
use crate::io::configuration::{FINAL_FRAME_HOLD, SOLUTION_COLOR, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{MazeError, Result};
use crate::io::image::{RenderStyle, paint_block, solution_positions, tile_color};
use crate::spatial::{MazeGrid, Tile};
use image::codecs::gif::GifEncoder;
use image::{Delay, Frame, ImageResult, Rgba, RgbaImage};
use std::collections::{HashMap, HashSet};
use std::io::{BufWriter, Write};
use std::path::Path;

/// A single tile write during construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePlacement {
    /// Maze position written
    pub position: [usize; 2],
    /// Tile written
    pub tile: Tile,
    /// Construction step the write belongs to; one frame per step
    pub step: usize,
}

/// Ordered tile writes that rebuild a maze from an all-wall grid
///
/// Route carving contributes one step per route cell plus a labelling step,
/// then every dig contributes one step of two writes.
pub struct ConstructionCapture {
    placements: Vec<TilePlacement>,
    dimensions: (usize, usize),
    step_count: usize,
    solution: HashSet<[usize; 2]>,
}

impl ConstructionCapture {
    /// Create an empty capture for a `rows × cols` maze
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            placements: Vec::new(),
            dimensions: (rows, cols),
            step_count: 0,
            solution: HashSet::new(),
        }
    }

    /// Replay the carve and dig phases of a finished maze
    pub fn from_maze(maze: &Maze) -> Self {
        let grid = maze.grid();
        let mut capture = Self::new(grid.rows(), grid.cols());
        capture.solution = solution_positions(maze.route());

        let cells = maze.route().cells();
        for (index, &cell) in cells.iter().enumerate() {
            capture.begin_step();
            if let Some(previous) = index.checked_sub(1).and_then(|i| cells.get(i)) {
                if let Some(wall) = MazeGrid::wall_position(*previous, cell) {
                    capture.record(wall, Tile::Open);
                }
            }
            capture.record(MazeGrid::maze_position(cell), Tile::Open);
        }

        capture.begin_step();
        capture.record(MazeGrid::maze_position(maze.start()), Tile::Start);
        capture.record(MazeGrid::maze_position(maze.goal()), Tile::Goal);

        for edge in &maze.dig_report().dug {
            let Some(target) = edge.target(grid) else {
                continue;
            };
            capture.begin_step();
            if let Some(wall) = MazeGrid::wall_position(edge.origin, target) {
                capture.record(wall, Tile::Open);
            }
            capture.record(MazeGrid::maze_position(target), Tile::Open);
        }

        capture
    }

    /// Start a new frame's worth of writes
    pub fn begin_step(&mut self) {
        self.step_count += 1;
    }

    /// Record a write in the current step
    pub fn record(&mut self, position: [usize; 2], tile: Tile) {
        self.placements.push(TilePlacement {
            position,
            tile,
            step: self.step_count.saturating_sub(1),
        });
    }

    /// All recorded writes
    pub fn placements(&self) -> &[TilePlacement] {
        &self.placements
    }

    /// Number of recorded steps
    pub const fn step_count(&self) -> usize {
        self.step_count
    }

    /// Number of frames [`Self::export_gif`] writes for a frame delay
    ///
    /// One blank frame, one frame per kept step boundary, the finished maze
    /// and the held final frame.
    pub fn frame_count(&self, frame_delay_ms: u32) -> usize {
        let (_, skip_factor) = frame_timing(frame_delay_ms);
        let boundaries = self
            .placements
            .windows(2)
            .filter(|pair| matches!(pair, [a, b] if a.step != b.step))
            .count();
        boundaries / skip_factor + 3
    }

    /// Export the replay as a GIF with automatic frame skipping
    ///
    /// Frame delays below what viewers honour are raised to
    /// [`VIEWER_MIN_FRAME_DELAY_MS`] and intermediate frames are dropped to
    /// keep the apparent speed. Frames are encoded as they are painted, so
    /// only one scaled image is held at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No placements were captured
    /// - The render style is invalid
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, style: &RenderStyle, frame_delay_ms: u32) -> Result<()> {
        if self.placements.is_empty() {
            return Err(MazeError::InvalidParameter {
                parameter: "visualization",
                value: output_path.display().to_string(),
                reason: "no tile placements captured".to_string(),
            });
        }
        style.validate()?;

        let (rows, cols) = self.dimensions;
        let (width, height) = style.image_size(&MazeGrid::new(rows, cols))?;

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| MazeError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = GifEncoder::new(BufWriter::new(file));
        self.encode_frames(&mut encoder, style, (width, height), frame_delay_ms)
            .map_err(|e| MazeError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        log::debug!(
            "Wrote construction replay of {} steps in {} frames to {}",
            self.step_count,
            self.frame_count(frame_delay_ms),
            output_path.display()
        );
        Ok(())
    }

    fn encode_frames<W: Write>(
        &self,
        encoder: &mut GifEncoder<W>,
        style: &RenderStyle,
        (width, height): (u32, u32),
        frame_delay_ms: u32,
    ) -> ImageResult<()> {
        let (delay_ms, skip_factor) = frame_timing(frame_delay_ms);
        let mut img = RgbaImage::from_pixel(width, height, Rgba(tile_color(Tile::Wall)));
        let mut written: HashMap<[usize; 2], Tile> = HashMap::new();
        encoder.encode_frame(frame(img.clone(), delay_ms))?;

        let mut current_step: Option<usize> = None;
        let mut steps_since_frame = 0;

        for placement in &self.placements {
            if current_step.is_some_and(|step| step != placement.step) {
                steps_since_frame += 1;
                if steps_since_frame % skip_factor == 0 {
                    encoder.encode_frame(frame(img.clone(), delay_ms))?;
                }
            }
            current_step = Some(placement.step);

            let [row, col] = placement.position;
            paint_block(&mut img, row, col, style.cell_pixels, tile_color(placement.tile));
            written.insert(placement.position, placement.tile);
        }
        encoder.encode_frame(frame(img.clone(), delay_ms))?;

        // Final frame displays longer, with the solution painted if requested
        if style.highlight_solution {
            for position in &self.solution {
                if written.get(position) == Some(&Tile::Open) {
                    paint_block(&mut img, position[0], position[1], style.cell_pixels, SOLUTION_COLOR);
                }
            }
        }
        encoder.encode_frame(frame(img, delay_ms * FINAL_FRAME_HOLD))
    }
}

/// Effective per-frame delay and how many steps share one frame
fn frame_timing(frame_delay_ms: u32) -> (u32, usize) {
    let frame_delay_ms = frame_delay_ms.max(1);
    let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
        VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
    } else {
        1
    };
    (frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS), skip_factor)
}

fn frame(img: RgbaImage, delay_ms: u32) -> Frame {
    Frame::from_parts(img, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
}
