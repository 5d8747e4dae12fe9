use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
  #[error(transparent)]
  Config(#[from] ConfigError),
  #[error(transparent)]
  Load(#[from] LoadError),
  #[error(transparent)]
  Render(#[from] RenderError),
  #[error(transparent)]
  Export(#[from] ExportError),
  #[error("failed to write output: {0}")]
  Output(#[from] io::Error),
}

/// Rejected simulation parameters. All of these are fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
  #[error("the dimensions stated are insufficient: {rows}x{cols} (both must be at least 3)")]
  DimensionsTooSmall { rows: usize, cols: usize },
  #[error("the dimensions stated are too large: {rows}x{cols} (at most {max} cells)")]
  DimensionsTooLarge { rows: usize, cols: usize, max: usize },
  #[error("the maximum number of generations must be positive")]
  ZeroMaxGen,
  #[error("the block size must be positive")]
  ZeroBlockSize,
}

#[derive(Error, Debug)]
pub enum LoadError {
  #[error("unable to open the input file {}", path.display())]
  SourceUnavailable {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
  #[error("missing dimensions line")]
  MissingHeader,
  #[error("error reading dimensions from line {0:?}")]
  InvalidHeader(String),
  #[error("missing the character that represents a living cell")]
  MissingAliveMarker,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
  #[error("unknown color name {0:?}")]
  UnknownColorName(String),
}

#[derive(Error, Debug)]
pub enum ExportError {
  #[error("failed to write image: {0}")]
  Io(#[from] io::Error),
  #[error("failed to encode image: {0}")]
  Image(#[from] image::ImageError),
}
