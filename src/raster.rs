use crate::canvas::Canvas;
use crate::error::RenderError;
use crate::grid::Grid;
use crate::palette::{Color, ColorResolver};

/// Resolved alive/dead colors for painting grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheme {
  pub alive: Color,
  pub dead: Color,
}

impl Scheme {
  pub fn resolve(
    colors: &impl ColorResolver,
    alive: &str,
    dead: &str,
  ) -> Result<Self, RenderError> {
    Ok(Self {
      alive: colors.resolve(alive)?,
      dead: colors.resolve(dead)?,
    })
  }
}

/// Paints `grid` onto a fresh canvas, one pixel per cell: column `c` of row
/// `r` lands on pixel `(x = c, y = r)`.
pub fn render(
  grid: &Grid,
  colors: &impl ColorResolver,
  alive: &str,
  dead: &str,
  block_size: usize,
) -> Result<Canvas, RenderError> {
  let scheme = Scheme::resolve(colors, alive, dead)?;
  Ok(draw(grid, scheme, block_size))
}

/// Like [`render`], with the colors already resolved.
pub fn draw(grid: &Grid, scheme: Scheme, block_size: usize) -> Canvas {
  let mut canvas = Canvas::new(grid.cols(), grid.rows(), block_size);
  paint(grid, scheme, &mut canvas);
  canvas
}

/// Cells that fall outside `canvas` are skipped.
pub fn paint(grid: &Grid, scheme: Scheme, canvas: &mut Canvas) {
  for (row, col, alive) in grid.iter_cells() {
    let color = if alive { scheme.alive } else { scheme.dead };
    canvas.set_pixel(col, row, color);
  }
}
