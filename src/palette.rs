use rustc_hash::FxHashMap;
use crate::error::RenderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}

impl Color {
  pub const fn new(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }

  /// RGBA bytes, always fully opaque.
  pub const fn to_rgba(self) -> [u8; 4] {
    [self.r, self.g, self.b, 255]
  }
}

pub const BLACK: Color = Color::new(0, 0, 0);

pub const STANDARD_COLORS: [(&str, Color); 14] = [
  ("black", BLACK),
  ("blue", Color::new(0, 0, 255)),
  ("crimson", Color::new(220, 20, 60)),
  ("dark_green", Color::new(0, 100, 0)),
  ("deep_sky_blue", Color::new(0, 191, 255)),
  ("dodger_blue", Color::new(30, 144, 255)),
  ("green", Color::new(0, 255, 0)),
  ("light_blue", Color::new(135, 206, 250)),
  ("light_grey", Color::new(210, 210, 210)),
  ("light_yellow", Color::new(255, 255, 153)),
  ("red", Color::new(255, 0, 0)),
  ("steel_blue", Color::new(70, 130, 180)),
  ("white", Color::new(255, 255, 255)),
  ("yellow", Color::new(255, 255, 0)),
];

/// Maps a color name to its RGB value, failing on names it doesn't know.
pub trait ColorResolver {
  fn resolve(&self, name: &str) -> Result<Color, RenderError>;
}

#[derive(Debug, Clone)]
pub struct Palette {
  colors: FxHashMap<String, Color>,
}

impl Palette {
  pub fn new() -> Self {
    Self { colors: FxHashMap::default() }
  }

  pub fn standard() -> Self {
    let mut palette = Self::new();
    for &(name, color) in STANDARD_COLORS.iter() {
      palette.insert(name, color);
    }
    palette
  }

  /// Names are stored lower-cased.
  pub fn insert(&mut self, name: &str, color: Color) {
    self.colors.insert(name.to_lowercase(), color);
  }

  pub fn names(&self) -> Vec<&str> {
    let mut names: Vec<_> = self.colors.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
  }
}

impl Default for Palette {
  fn default() -> Self {
    Self::standard()
  }
}

impl ColorResolver for Palette {
  fn resolve(&self, name: &str) -> Result<Color, RenderError> {
    self.colors.get(name)
      .copied()
      .ok_or_else(|| RenderError::UnknownColorName(name.to_owned()))
  }
}
