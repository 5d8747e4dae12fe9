use indexmap::IndexSet;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;
use crate::grid::Snapshot;

/// Every snapshot seen so far, oldest first.
///
/// Grows by one entry per generation unless a cap is set, in which case the
/// oldest snapshots are forgotten first and cycles longer than the cap go
/// undetected.
#[derive(Debug, Default)]
pub struct History {
  set: IndexSet<Snapshot, BuildHasherDefault<FxHasher>>,
  cap: Option<usize>,
  recorded: usize,
}

impl History {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_cap(cap: usize) -> Self {
    Self {
      cap: Some(cap.max(1)),
      ..Self::default()
    }
  }

  pub fn contains(&self, snapshot: &Snapshot) -> bool {
    self.set.contains(snapshot)
  }

  /// Returns `false` if the snapshot was already present.
  pub fn record(&mut self, snapshot: Snapshot) -> bool {
    self.recorded += 1;
    if self.set.contains(&snapshot) {
      return false;
    }

    if let Some(cap) = self.cap {
      while self.len() >= cap {
        let oldest = match self.set.get_index(0) {
          Some(oldest) => oldest.clone(),
          None => break,
        };
        self.set.shift_remove(&oldest);
      }
    }

    self.set.insert(snapshot)
  }

  /// Number of distinct snapshots currently retained.
  pub(crate) fn len(&self) -> usize {
    self.set.len()
  }

  /// Number of `record` calls, duplicates included.
  pub fn recorded(&self) -> usize {
    self.recorded
  }

  pub fn iter(&self) -> impl Iterator<Item = &Snapshot> + '_ {
    self.set.iter()
  }
}
