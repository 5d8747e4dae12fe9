use std::fmt::{self, Display};
use crate::error::ConfigError;

pub const MIN_SIDE: usize = 3;
/// Upper bound on `rows * cols`.
pub const MAX_CELLS: usize = 1 << 26;

/// A fixed-size rectangle of cells, stored row-major.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Grid {
  rows: usize,
  cols: usize,
  cells: Vec<bool>,
}

/// Canonical serialization of a grid: one line of `0`/`1` per row, each
/// terminated by `\n`. Only ever compared for equality.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Snapshot(String);

impl Grid {
  /// An all-dead grid. Both sides must be at least [`MIN_SIDE`] and the
  /// area at most [`MAX_CELLS`].
  pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
    if rows < MIN_SIDE || cols < MIN_SIDE {
      return Err(ConfigError::DimensionsTooSmall { rows, cols });
    }
    let len = rows.checked_mul(cols)
      .filter(|&len| len <= MAX_CELLS)
      .ok_or(ConfigError::DimensionsTooLarge { rows, cols, max: MAX_CELLS })?;

    Ok(Self {
      rows,
      cols,
      cells: vec![false; len],
    })
  }

  pub fn with_alive(
    rows: usize,
    cols: usize,
    alive: impl IntoIterator<Item = (usize, usize)>,
  ) -> Result<Self, ConfigError> {
    let mut grid = Self::new(rows, cols)?;
    for (row, col) in alive {
      grid.set(row, col, true);
    }
    Ok(grid)
  }

  /// A dead grid with the same dimensions as `self`.
  pub(crate) fn blank_like(&self) -> Self {
    Self {
      rows: self.rows,
      cols: self.cols,
      cells: vec![false; self.cells.len()],
    }
  }

  pub fn rows(&self) -> usize {
    self.rows
  }

  pub fn cols(&self) -> usize {
    self.cols
  }

  /// Panics if `(row, col)` is outside the grid.
  pub fn get(&self, row: usize, col: usize) -> bool {
    assert!(row < self.rows && col < self.cols, "cell ({}, {}) out of range", row, col);
    self.cells[row * self.cols + col]
  }

  /// Panics if `(row, col)` is outside the grid.
  pub fn set(&mut self, row: usize, col: usize, alive: bool) {
    assert!(row < self.rows && col < self.cols, "cell ({}, {}) out of range", row, col);
    self.cells[row * self.cols + col] = alive;
  }

  pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
    self.cells.chunks(self.cols)
  }

  /// Yields `(row, col, alive)` for every cell in row-major order.
  pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
    let cols = self.cols;
    self.cells.iter()
      .enumerate()
      .map(move |(i, &alive)| (i / cols, i % cols, alive))
  }

  pub fn alive_count(&self) -> usize {
    self.cells.iter().filter(|&&alive| alive).count()
  }

  pub fn is_extinct(&self) -> bool {
    !self.cells.iter().any(|&alive| alive)
  }

  pub fn snapshot(&self) -> Snapshot {
    let mut s = String::with_capacity((self.cols + 1) * self.rows);
    for row in self.iter_rows() {
      s.extend(row.iter().map(|&alive| if alive { '1' } else { '0' }));
      s.push('\n');
    }
    Snapshot(s)
  }
}

impl Snapshot {
  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn is_extinct(&self) -> bool {
    !self.0.contains('1')
  }
}

impl Display for Snapshot {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(&self.0)
  }
}
