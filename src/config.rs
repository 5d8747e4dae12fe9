use std::path::PathBuf;
use crate::error::{ConfigError, Result};
use crate::palette::ColorResolver;
use crate::raster::Scheme;

pub const DEFAULT_MAX_GEN: usize = 50;
pub const DEFAULT_ALIVE_COLOR: &str = "red";
pub const DEFAULT_DEAD_COLOR: &str = "green";
pub const DEFAULT_BLOCK_SIZE: usize = 5;

/// Simulation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub max_gen: usize,
  pub alive_color: String,
  pub dead_color: String,
  /// Rendered generations are written here. No images when `None`.
  pub image_dir: Option<PathBuf>,
  /// Real pixels per cell edge in written images.
  pub block_size: usize,
  /// Generations shown per second; 0 runs unthrottled.
  pub fps: u32,
  /// Bound on remembered generations. Unbounded when `None`.
  pub history_cap: Option<usize>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      max_gen: DEFAULT_MAX_GEN,
      alive_color: DEFAULT_ALIVE_COLOR.to_owned(),
      dead_color: DEFAULT_DEAD_COLOR.to_owned(),
      image_dir: None,
      block_size: DEFAULT_BLOCK_SIZE,
      fps: 0,
      history_cap: None,
    }
  }
}

impl Config {
  /// Checks the numeric limits and resolves both colors.
  pub fn validate(&self, colors: &impl ColorResolver) -> Result<Scheme> {
    if self.max_gen == 0 {
      return Err(ConfigError::ZeroMaxGen.into());
    }
    if self.block_size == 0 {
      return Err(ConfigError::ZeroBlockSize.into());
    }
    Ok(Scheme::resolve(colors, &self.alive_color, &self.dead_color)?)
  }
}
