use crate::palette::{Color, BLACK};

/// Bytes per pixel (RGBA).
pub const DEPTH: usize = 4;

/// An RGBA pixel buffer with the origin at the top left corner, `x` growing
/// to the right and `y` growing downwards.
///
/// `block_size` is the edge, in real pixels, that encoders should give each
/// canvas pixel. Drawing never applies it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Canvas {
  width: usize,
  height: usize,
  block_size: usize,
  pixels: Vec<u8>,
}

impl Canvas {
  /// A black canvas.
  pub fn new(width: usize, height: usize, block_size: usize) -> Self {
    let mut canvas = Self {
      width,
      height,
      block_size,
      pixels: vec![0; width * height * DEPTH],
    };
    canvas.clear(BLACK);
    canvas
  }

  pub fn clear(&mut self, color: Color) {
    let rgba = color.to_rgba();
    for px in self.pixels.chunks_exact_mut(DEPTH) {
      px.copy_from_slice(&rgba);
    }
  }

  /// Does nothing if `(x, y)` lies outside the canvas.
  pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
    if let Some(i) = self.index(x, y) {
      self.pixels[i..i + DEPTH].copy_from_slice(&color.to_rgba());
    }
  }

  /// Black if `(x, y)` lies outside the canvas.
  pub fn pixel(&self, x: usize, y: usize) -> Color {
    match self.index(x, y) {
      Some(i) => Color::new(self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]),
      None => BLACK,
    }
  }

  fn index(&self, x: usize, y: usize) -> Option<usize> {
    if x < self.width && y < self.height {
      Some((y * self.width + x) * DEPTH)
    } else {
      None
    }
  }

  pub fn width(&self) -> usize {
    self.width
  }

  pub fn height(&self) -> usize {
    self.height
  }

  pub fn block_size(&self) -> usize {
    self.block_size
  }

  pub fn pixels(&self) -> &[u8] {
    &self.pixels
  }
}
