//! Conway's Game of Life on a fixed-size toroidal grid, stepped until the
//! population dies out, repeats an earlier generation, or hits a generation
//! limit, with optional per-generation image output.

pub mod canvas;
pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod grid;
pub mod history;
pub mod loader;
pub mod narrate;
pub mod palette;
pub mod raster;
pub mod rule;
pub mod universe;

pub use canvas::Canvas;
pub use config::Config;
pub use controller::{Controller, FileSource, PatternSource, State};
pub use error::{Error, Result};
pub use grid::{Grid, Snapshot};
pub use history::History;
pub use loader::Pattern;
pub use palette::{Color, ColorResolver, Palette};
pub use universe::{TerminationCause, Universe};
