use std::fmt::{self, Display};
use log::{debug, info};
use crate::grid::*;
use crate::history::History;
use crate::rule::*;

/// Why a simulation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminationCause {
  Extinction,
  Stability,
  MaxGenerations,
}

impl Display for TerminationCause {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(match self {
      Self::Extinction => "extinction",
      Self::Stability => "stability",
      Self::MaxGenerations => "generation limit",
    })
  }
}

/// A toroidal Life grid together with everything needed to decide when the
/// run is over.
pub struct Universe {
  grid: Grid,
  /// Back buffer for the next generation, swapped with `grid` after a step.
  next: Grid,
  history: History,
  rule: Rule,
  /// 1-based index of the generation held in `grid`.
  generation: usize,
  max_gen: usize,
  cause: Option<TerminationCause>,
}

impl Universe {
  pub fn new(grid: Grid, max_gen: usize) -> Self {
    Self::with_history(grid, max_gen, History::new())
  }

  pub fn with_history(grid: Grid, max_gen: usize, history: History) -> Self {
    let next = grid.blank_like();
    Self {
      grid,
      next,
      history,
      rule: GAME_OF_LIFE,
      generation: 1,
      max_gen,
      cause: None,
    }
  }

  pub fn grid(&self) -> &Grid {
    &self.grid
  }

  pub fn generation(&self) -> usize {
    self.generation
  }

  pub fn max_gen(&self) -> usize {
    self.max_gen
  }

  pub fn rule(&self) -> Rule {
    self.rule
  }

  pub fn history(&self) -> &History {
    &self.history
  }

  /// Set once, by the first step whose checks match, and never changed.
  pub fn cause(&self) -> Option<TerminationCause> {
    self.cause
  }

  /// Checks the current generation against the termination conditions,
  /// records it, and replaces it with its successor.
  pub fn step(&mut self) -> Option<TerminationCause> {
    self.generation += 1;

    let snapshot = self.grid.snapshot();
    let found = classify(
      self.history.contains(&snapshot),
      self.generation >= self.max_gen,
      snapshot.is_extinct(),
    );
    if self.cause.is_none() {
      if let Some(cause) = found {
        info!("simulation ends at generation {}: {}", self.generation, cause);
        self.cause = Some(cause);
      }
    }
    self.history.record(snapshot);

    advance(&self.rule, &self.grid, &mut self.next);
    std::mem::swap(&mut self.grid, &mut self.next);
    debug!("generation {}: {} alive", self.generation, self.grid.alive_count());

    self.cause
  }
}

/// First matching cause, checked in the order stability, generation limit,
/// extinction.
pub fn classify(stable: bool, max_reached: bool, extinct: bool) -> Option<TerminationCause> {
  if stable {
    Some(TerminationCause::Stability)
  } else if max_reached {
    Some(TerminationCause::MaxGenerations)
  } else if extinct {
    Some(TerminationCause::Extinction)
  } else {
    None
  }
}

/// The successor of `grid` under `rule`.
pub fn next_generation(rule: &Rule, grid: &Grid) -> Grid {
  let mut next = grid.blank_like();
  advance(rule, grid, &mut next);
  next
}

/// Writes the successor of `current` into `next`. `current` is only read, so
/// every cell sees the same generation of neighbors.
fn advance(rule: &Rule, current: &Grid, next: &mut Grid) {
  debug_assert_eq!((current.rows(), current.cols()), (next.rows(), next.cols()));
  for (row, col, alive) in current.iter_cells() {
    let n = live_neighbors(current, row, col);
    next.set(row, col, rule.next_state(alive, n));
  }
}

/// Live cells in the Moore neighborhood of `(row, col)`, wrapping at the
/// edges.
pub(crate) fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
  let rows = grid.rows();
  let cols = grid.cols();
  let up = (row + rows - 1) % rows;
  let down = (row + 1) % rows;
  let left = (col + cols - 1) % cols;
  let right = (col + 1) % cols;

  [
    (up, left), (up, col), (up, right),
    (row, left), (row, right),
    (down, left), (down, col), (down, right),
  ]
    .iter()
    .filter(|&&(r, c)| grid.get(r, c))
    .count() as u8
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  const GLIDER: [(usize, usize); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

  fn grid(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Grid {
    Grid::with_alive(rows, cols, alive.iter().copied()).unwrap()
  }

  #[test]
  fn wraparound_corner_is_adjacent() {
    let g = grid(5, 7, &[(4, 6)]);
    assert_eq!(live_neighbors(&g, 0, 0), 1);
    let g = grid(5, 7, &[(0, 0), (4, 6)]);
    assert_eq!(live_neighbors(&g, 4, 6), 1);
    assert_eq!(live_neighbors(&g, 0, 6), 2);
  }

  #[test]
  fn block_is_still_life() {
    let block = grid(6, 6, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
    let once = next_generation(&GAME_OF_LIFE, &block);
    assert_eq!(once, block);
    assert_eq!(next_generation(&GAME_OF_LIFE, &once), block);
  }

  #[test]
  fn lonely_cell_dies() {
    for rows in 3..8 {
      for cols in 3..8 {
        let g = grid(rows, cols, &[(rows / 2, cols / 2)]);
        let next = next_generation(&GAME_OF_LIFE, &g);
        assert!(next.is_extinct(), "{}x{}", rows, cols);
      }
    }
  }

  #[test]
  fn glider_translates_after_four_generations() {
    let mut g = grid(8, 8, &GLIDER);
    for _ in 0..4 {
      g = next_generation(&GAME_OF_LIFE, &g);
    }
    let moved: Vec<_> = GLIDER.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
    assert_eq!(g, grid(8, 8, &moved));
  }

  #[test]
  fn glider_wraps_around_the_torus() {
    let start = grid(6, 6, &GLIDER);
    let mut g = start.clone();
    // one diagonal cell per 4 generations, 6 cells to come back around
    for _ in 0..24 {
      g = next_generation(&GAME_OF_LIFE, &g);
    }
    assert_eq!(g, start);
  }

  #[test]
  fn blinker_is_flagged_when_it_repeats() {
    let mut uni = Universe::new(grid(5, 5, &[(2, 1), (2, 2), (2, 3)]), 100);
    assert_eq!(uni.step(), None);
    assert_eq!(uni.step(), None);
    assert_eq!(uni.step(), Some(TerminationCause::Stability));
    assert_eq!(uni.generation(), 4);
  }

  #[test]
  fn still_life_is_flagged_on_second_check() {
    let mut uni = Universe::new(grid(6, 6, &[(1, 1), (1, 2), (2, 1), (2, 2)]), 100);
    assert_eq!(uni.step(), None);
    assert_eq!(uni.step(), Some(TerminationCause::Stability));
  }

  #[test]
  fn extinction_on_next_check() {
    let mut uni = Universe::new(grid(4, 4, &[(1, 1)]), 100);
    assert_eq!(uni.step(), None);
    assert!(uni.grid().is_extinct());
    assert_eq!(uni.step(), Some(TerminationCause::Extinction));
  }

  #[test]
  fn generation_limit() {
    let mut uni = Universe::new(grid(8, 8, &GLIDER), 5);
    for _ in 0..3 {
      assert_eq!(uni.step(), None);
    }
    assert_eq!(uni.step(), Some(TerminationCause::MaxGenerations));
    assert_eq!(uni.generation(), 5);
  }

  #[test]
  fn cause_never_changes() {
    let mut uni = Universe::new(Grid::new(3, 3).unwrap(), 100);
    assert_eq!(uni.step(), Some(TerminationCause::Extinction));
    // the same dead grid now repeats, but the first cause sticks
    assert_eq!(uni.step(), Some(TerminationCause::Extinction));
    assert_eq!(uni.cause(), Some(TerminationCause::Extinction));
  }

  #[test]
  fn tie_break_order() {
    use TerminationCause::*;
    assert_eq!(classify(true, true, true), Some(Stability));
    assert_eq!(classify(false, true, true), Some(MaxGenerations));
    assert_eq!(classify(false, false, true), Some(Extinction));
    assert_eq!(classify(false, false, false), None);

    let mut uni = Universe::new(Grid::new(3, 3).unwrap(), 1);
    assert_eq!(uni.step(), Some(MaxGenerations));
  }

  #[test]
  fn history_gets_one_entry_per_step() {
    let mut uni = Universe::new(grid(8, 8, &GLIDER), 100);
    for _ in 0..6 {
      uni.step();
    }
    assert_eq!(uni.history().recorded(), 6);
    assert_eq!(uni.history().len(), 6);
  }
}
