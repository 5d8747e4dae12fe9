use std::fs;
use std::path::Path;
use log::warn;
use regex::Regex;
use crate::error::{LoadError, Result};
use crate::grid::Grid;

/// A grid read from a description, plus the character that marked living
/// cells in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
  pub grid: Grid,
  pub alive_marker: char,
}

/// Read a pattern from a grid description.
///
/// ```text
/// <rows> <cols>
/// <alive marker>
/// <row 0>
/// ...
/// ```
///
/// A cell is alive when its character equals the marker. Short or missing
/// rows are padded with dead cells; lines past `rows` are ignored.
pub fn read(src: impl AsRef<str>) -> Result<Pattern> {
  let header_re = Regex::new(r"^\s*(\d+)\s+(\d+)").expect("valid header regex");
  let mut lines = src.as_ref().lines();

  let header = lines.next().ok_or(LoadError::MissingHeader)?;
  let caps = header_re.captures(header)
    .ok_or_else(|| LoadError::InvalidHeader(header.to_owned()))?;
  let dim = |i: usize| caps[i].parse::<usize>()
    .map_err(|_| LoadError::InvalidHeader(header.to_owned()));
  let rows = dim(1)?;
  let cols = dim(2)?;

  let mut grid = Grid::new(rows, cols)?;

  let alive_marker = lines.next()
    .and_then(|line| line.chars().next())
    .ok_or(LoadError::MissingAliveMarker)?;

  for (row, line) in lines.take(rows).enumerate() {
    let mut len = 0;
    for (col, c) in line.chars().take(cols).enumerate() {
      grid.set(row, col, c == alive_marker);
      len += 1;
    }
    if len < cols {
      warn!("row {} has {} of {} cells, the rest are dead", row, len, cols);
    }
  }

  Ok(Pattern { grid, alive_marker })
}

pub fn load_file(path: impl AsRef<Path>) -> Result<Pattern> {
  let path = path.as_ref();
  let src = fs::read_to_string(path).map_err(|source| LoadError::SourceUnavailable {
    path: path.to_owned(),
    source,
  })?;
  read(src)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::{ConfigError, Error};
  use pretty_assertions::assert_eq;

  #[test]
  fn read_glider() {
    let src = r"
5 6
*
.*....
..*...
***...
".trim_start();

    let pattern = read(src).unwrap();
    assert_eq!(pattern.alive_marker, '*');
    assert_eq!(pattern.grid.snapshot().as_str(), "\
010000
001000
111000
000000
000000
");
  }

  #[test]
  fn short_lines_and_extra_lines() {
    let src = "3 4\no\noo\n\no..o\noooo\n";
    let pattern = read(src).unwrap();
    assert_eq!(pattern.grid.snapshot().as_str(), "1100\n0000\n1001\n");
  }

  #[test]
  fn other_characters_are_dead() {
    let src = "3 3\n#\n*#*\n# #\n...\n";
    let pattern = read(src).unwrap();
    assert_eq!(pattern.grid.snapshot().as_str(), "010\n101\n000\n");
  }

  #[test]
  fn too_small() {
    match read("2 10\n*\n") {
      Err(Error::Config(ConfigError::DimensionsTooSmall { rows: 2, cols: 10 })) => {}
      other => panic!("unexpected {:?}", other),
    }
  }

  #[test]
  fn too_large() {
    for src in &["5000000000 5000000000\n*\n", "100000 100000\n*\n"] {
      match read(src) {
        Err(Error::Config(ConfigError::DimensionsTooLarge { .. })) => {}
        other => panic!("unexpected {:?} for {:?}", other, src),
      }
    }
  }

  #[test]
  fn bad_header() {
    assert!(matches!(read(""), Err(Error::Load(LoadError::MissingHeader))));
    assert!(matches!(read("ten by ten\n*\n"), Err(Error::Load(LoadError::InvalidHeader(_)))));
    assert!(matches!(read("5\n*\n"), Err(Error::Load(LoadError::InvalidHeader(_)))));
  }

  #[test]
  fn missing_marker() {
    assert!(matches!(read("3 3\n"), Err(Error::Load(LoadError::MissingAliveMarker))));
    assert!(matches!(read("3 3\n\n***\n"), Err(Error::Load(LoadError::MissingAliveMarker))));
  }

  #[test]
  fn missing_file() {
    let err = load_file("/nonexistent/glider.txt").unwrap_err();
    assert!(matches!(err, Error::Load(LoadError::SourceUnavailable { .. })));
    assert_eq!(err.to_string(), "unable to open the input file /nonexistent/glider.txt");
  }
}
