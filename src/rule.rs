use std::fmt::{self, Display};

/// Birth and survival conditions, one bit per live-neighbor count (0..=8).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
  birth: NeighborMask,
  survival: NeighborMask,
}

pub(crate) type NeighborMask = u16;

/// B3/S23.
pub const GAME_OF_LIFE: Rule = Rule {
  birth: 0b000001000,
  survival: 0b000001100,
};

impl Rule {
  pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
    debug_assert!(neighbors < 9);
    let mask = if alive { self.survival } else { self.birth };
    mask >> neighbors & 1 != 0
  }
}

impl Default for Rule {
  fn default() -> Self {
    GAME_OF_LIFE
  }
}

impl Display for Rule {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "B")?;
    let mut b = self.birth;
    while b != 0 {
      write!(f, "{}", b.trailing_zeros())?;
      b &= b - 1;
    }
    write!(f, "/S")?;
    let mut s = self.survival;
    while s != 0 {
      write!(f, "{}", s.trailing_zeros())?;
      s &= s - 1;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn game_of_life_table() {
    let rule = GAME_OF_LIFE;
    for n in 0..9 {
      assert_eq!(rule.next_state(true, n), n == 2 || n == 3, "survival with {}", n);
      assert_eq!(rule.next_state(false, n), n == 3, "birth with {}", n);
    }
  }

  #[test]
  fn display() {
    assert_eq!(GAME_OF_LIFE.to_string(), "B3/S23");
  }
}
