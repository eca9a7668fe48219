//! PNG export with scaled blocks and optional solution highlighting

use crate::io::configuration::{
    DEFAULT_CELL_PIXELS, GOAL_COLOR, MAX_CELL_PIXELS, OPEN_COLOR, SOLUTION_COLOR, START_COLOR,
    WALL_COLOR,
};
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::spatial::{MazeGrid, Route, Tile};
use image::{Rgba, RgbaImage};
use std::collections::HashSet;
use std::path::Path;

/// Options shared by the PNG and GIF renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    /// Side length in pixels of one maze position
    pub cell_pixels: u32,
    /// Paint route cells and route walls in the solution color
    pub highlight_solution: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            cell_pixels: DEFAULT_CELL_PIXELS,
            highlight_solution: false,
        }
    }
}

impl RenderStyle {
    /// Check the pixel scale
    ///
    /// # Errors
    ///
    /// Returns an error if `cell_pixels` is zero or above [`MAX_CELL_PIXELS`]
    pub fn validate(&self) -> Result<()> {
        if self.cell_pixels == 0 || self.cell_pixels > MAX_CELL_PIXELS {
            return Err(invalid_parameter(
                "cell_pixels",
                &self.cell_pixels,
                &format!("must be between 1 and {MAX_CELL_PIXELS}"),
            ));
        }
        Ok(())
    }

    /// Image size in pixels for a grid
    ///
    /// # Errors
    ///
    /// Returns an error if the image would not fit in `u32` pixel dimensions
    pub fn image_size(&self, grid: &MazeGrid) -> Result<(u32, u32)> {
        let (height, width) = grid.dimensions();
        let scale = |extent: usize| {
            u32::try_from(extent)
                .ok()
                .and_then(|e| e.checked_mul(self.cell_pixels))
                .ok_or_else(|| {
                    invalid_parameter("cell_pixels", &self.cell_pixels, &"image too large")
                })
        };
        Ok((scale(width)?, scale(height)?))
    }
}

/// Base color of a tile
pub const fn tile_color(tile: Tile) -> [u8; 4] {
    match tile {
        Tile::Wall => WALL_COLOR,
        Tile::Open => OPEN_COLOR,
        Tile::Start => START_COLOR,
        Tile::Goal => GOAL_COLOR,
    }
}

/// Maze positions covered by the route: its cells and the walls between them
pub fn solution_positions(route: &Route) -> HashSet<[usize; 2]> {
    let mut positions: HashSet<[usize; 2]> = route
        .cells()
        .iter()
        .map(|cell| MazeGrid::maze_position(*cell))
        .collect();
    positions.extend(
        route
            .steps()
            .filter_map(|(previous, current)| MazeGrid::wall_position(previous, current)),
    );
    positions
}

/// Rasterize the grid
///
/// Maze row 0 is drawn at the top of the image. Start and goal keep their
/// own colors when the solution is highlighted.
///
/// # Errors
///
/// Returns an error if the render style is invalid or the image is too large
pub fn render_image(grid: &MazeGrid, route: &Route, style: &RenderStyle) -> Result<RgbaImage> {
    style.validate()?;
    let (width, height) = style.image_size(grid)?;
    let solution = if style.highlight_solution {
        solution_positions(route)
    } else {
        HashSet::new()
    };

    let mut img = RgbaImage::new(width, height);
    for ((row, col), &tile) in grid.tiles().indexed_iter() {
        let color = if tile == Tile::Open && solution.contains(&[row, col]) {
            SOLUTION_COLOR
        } else {
            tile_color(tile)
        };
        paint_block(&mut img, row, col, style.cell_pixels, color);
    }
    Ok(img)
}

pub(crate) fn paint_block(img: &mut RgbaImage, row: usize, col: usize, scale: u32, color: [u8; 4]) {
    let x0 = col as u32 * scale;
    let y0 = row as u32 * scale;
    for y in y0..y0 + scale {
        for x in x0..x0 + scale {
            if let Some(pixel) = img.get_pixel_mut_checked(x, y) {
                *pixel = Rgba(color);
            }
        }
    }
}

/// Export the grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The render style is invalid
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_maze_as_png(
    grid: &MazeGrid,
    route: &Route,
    style: &RenderStyle,
    output_path: &Path,
) -> Result<()> {
    let img = render_image(grid, route, style)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| MazeError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    log::debug!("Wrote {}x{} maze image to {}", img.width(), img.height(), output_path.display());
    Ok(())
}
