use std::io::{self, Write};
use itertools::Itertools;
use crate::grid::Grid;
use crate::rule::Rule;
use crate::universe::TerminationCause;

const ALIVE_GLYPH: char = '*';
const STARS: &str = "********************************************************************";

/// What the welcome banner reports about a run.
#[derive(Debug, Clone)]
pub struct Welcome<'a> {
  pub input: &'a str,
  pub max_gen: usize,
  pub rows: usize,
  pub cols: usize,
  pub alive_marker: char,
  pub rule: Rule,
}

pub fn welcome(w: &mut impl Write, info: &Welcome) -> io::Result<()> {
  writeln!(w, ">>> Trying to open input file [{}]... done!", info.input)?;
  writeln!(w, ">>> Running simulation up to {} generations, or until extinction/stability is reached, whichever comes first.", info.max_gen)?;
  writeln!(w, ">>> Grid size read from input file: {} rows by {} cols.", info.rows, info.cols)?;
  writeln!(w, ">>> Character that represents a living cell read from input file: '{}'", info.alive_marker)?;
  writeln!(w, ">>> Finished reading input data file.")?;
  writeln!(w)?;
  writeln!(w, "{}", STARS)?;
  writeln!(w)?;
  writeln!(w, "    Welcome to Conway's game of Life ({}).", info.rule)?;
  writeln!(w, "    Running a simulation on a grid of size {} by {} in which", info.rows, info.cols)?;
  writeln!(w, "    each cell can either be occupied by an organism or not.")?;
  writeln!(w, "    The occupied cells change from generation to generation")?;
  writeln!(w, "    according to the number of neighboring cells which are alive.")?;
  writeln!(w)?;
  writeln!(w, "{}", STARS)
}

/// One line per row, living cells drawn as `*`, dead ones as blanks.
pub fn ascii(grid: &Grid) -> String {
  grid.iter_rows()
    .map(|row| {
      let cells: String = row.iter()
        .map(|&alive| if alive { ALIVE_GLYPH } else { ' ' })
        .collect();
      format!("[{}]", cells)
    })
    .join("\n")
}

pub fn frame(w: &mut impl Write, generation: usize, grid: &Grid) -> io::Result<()> {
  writeln!(w, "Generation {}:", generation)?;
  writeln!(w, "{}", ascii(grid))
}

pub fn farewell_message(cause: Option<TerminationCause>) -> &'static str {
  match cause {
    Some(TerminationCause::Extinction) => "There is no alive cell, all of them are dead.",
    Some(TerminationCause::Stability) => "The alive cells found stability.",
    Some(TerminationCause::MaxGenerations) => "The informed generation limit has been reached.",
    None => "",
  }
}

pub fn farewell(w: &mut impl Write, cause: Option<TerminationCause>) -> io::Result<()> {
  let stars = &STARS[..32];
  writeln!(w, "{}", stars)?;
  writeln!(w)?;
  writeln!(w, "End of Conway.")?;
  writeln!(w, "{}", farewell_message(cause))?;
  writeln!(w)?;
  writeln!(w, "{}", stars)
}
