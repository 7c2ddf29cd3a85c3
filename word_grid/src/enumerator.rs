use std::mem;

use log::trace;

use crate::adjacency::AdjacencyGraph;

pub const DEFAULT_MAX_ROUNDS: u32 = 8;

fn prepend(letter: char, suffix: &str) -> String {
  let mut candidate = String::with_capacity(letter.len_utf8() + suffix.len());
  candidate.push(letter);
  candidate.push_str(suffix);
  candidate
}

/// Lazily enumerates every walk over an adjacency graph, one round at a time.
///
/// Round `r` yields one string of length `r` per walk of `r` tiles. Each tile
/// keeps two buffers: `current`, the strings it is building this round, and
/// `frozen`, its strings from the previous round. A round first freezes every
/// tile; then every tile receives its neighbors' frozen strings and prepends
/// its own letter to each. Tiles only ever read frozen buffers, so the order
/// tiles are visited in within a round cannot change the result.
///
/// A tile's `current` buffer is filled only when the iterator reaches that
/// tile, so a single `next` never does more than one tile's work.
///
/// Walks may revisit tiles. Identical strings reached by different walks are
/// all yielded.
pub struct CandidateEnumerator<'a> {
  graph: &'a AdjacencyGraph,
  max_rounds: u32,
  round: u32,
  current: Vec<Vec<String>>,
  frozen: Vec<Vec<String>>,
  /// (tile, offset) of the next candidate to yield. `current` is filled for
  /// every tile up to and including `tile`.
  cursor: (usize, usize),
}

impl<'a> CandidateEnumerator<'a> {
  pub fn new(graph: &'a AdjacencyGraph, max_rounds: u32) -> Self {
    Self {
      graph,
      max_rounds,
      round: 0,
      current: vec![Vec::new(); graph.len()],
      frozen: vec![Vec::new(); graph.len()],
      cursor: (graph.len(), 0),
    }
  }

  /// The round currently being yielded. 0 before the first candidate is
  /// pulled.
  pub fn round(&self) -> u32 {
    self.round
  }

  pub fn max_rounds(&self) -> u32 {
    self.max_rounds
  }

  fn freeze(&mut self) {
    mem::swap(&mut self.current, &mut self.frozen);
    self.current.iter_mut().for_each(Vec::clear);
  }

  /// Fills `current` for `target`. In round 1 the tile consumes one empty
  /// string, leaving its own letter; afterwards it consumes the frozen strings
  /// of each neighbor.
  fn receive(&mut self, target: usize) {
    let Some(tile) = self.graph.tile(target) else {
      return;
    };
    let letter = tile.letter();
    let current = &mut self.current[target];
    if self.round == 1 {
      current.push(prepend(letter, ""));
      return;
    }
    for &source in tile.neighbors() {
      current.extend(self.frozen[source].iter().map(|suffix| prepend(letter, suffix)));
    }
  }

  fn advance_round(&mut self) {
    if self.round > 0 {
      trace!(
        "Round {}: {} candidates",
        self.round,
        self.current.iter().map(Vec::len).sum::<usize>()
      );
    }
    self.freeze();
    self.round += 1;
    self.cursor = (0, 0);
    self.receive(0);
  }
}

impl Iterator for CandidateEnumerator<'_> {
  type Item = String;

  fn next(&mut self) -> Option<String> {
    loop {
      let (tile, offset) = self.cursor;
      if tile < self.current.len() {
        if let Some(candidate) = self.current[tile].get(offset) {
          self.cursor = (tile, offset + 1);
          return Some(candidate.clone());
        }
        self.cursor = (tile + 1, 0);
        self.receive(tile + 1);
      } else {
        if self.round >= self.max_rounds || self.current.is_empty() {
          return None;
        }
        self.advance_round();
      }
    }
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;
  use itertools::Itertools;

  use crate::{adjacency::AdjacencyGraph, board::Board};

  fn graph(definition: &str) -> AdjacencyGraph {
    AdjacencyGraph::build(&Board::parse(definition).unwrap())
  }

  /// Candidates of the given length, sorted.
  fn round_of(candidates: &[String], round: usize) -> Vec<String> {
    candidates.iter().filter(|c| c.chars().count() == round).cloned().sorted().collect()
  }

  #[gtest]
  fn test_first_round_is_every_letter() {
    let graph = graph("DEM,RCO,AOY");
    let first: Vec<_> = graph.candidates(1).sorted().collect();
    expect_that!(first, container_eq(["A", "C", "D", "E", "M", "O", "O", "R", "Y"]));
  }

  #[gtest]
  fn test_round_lengths() {
    let graph = graph("DEM,RCO,AOY");
    let mut enumerator = graph.candidates(4);
    let mut last_len = 0;
    for candidate in enumerator.by_ref() {
      let len = candidate.chars().count();
      expect_true!(len == last_len || len == last_len + 1);
      last_len = len;
    }
    expect_eq!(last_len, 4);
    expect_eq!(enumerator.round(), 4);
  }

  #[gtest]
  fn test_walk_counts() {
    // Every tile of a 2x2 board has 3 neighbors, so walks triple each round.
    let graph = graph("AB,CD");
    let candidates: Vec<_> = graph.candidates(3).collect();
    expect_eq!(round_of(&candidates, 1).len(), 4);
    expect_eq!(round_of(&candidates, 2).len(), 12);
    expect_eq!(round_of(&candidates, 3).len(), 36);
  }

  #[gtest]
  fn test_second_round_pairs() {
    let graph = graph("AB,CD");
    let candidates: Vec<_> = graph.candidates(2).collect();
    expect_that!(
      round_of(&candidates, 2),
      container_eq([
        "AB", "AC", "AD", "BA", "BC", "BD", "CA", "CB", "CD", "DA", "DB", "DC"
      ])
    );
  }

  #[gtest]
  fn test_revisits_allowed() {
    let graph = graph("AB,CD");
    let candidates: Vec<_> = graph.candidates(3).collect();
    expect_true!(candidates.iter().any(|c| c == "ABA"));
  }

  #[gtest]
  fn test_duplicates_kept() {
    // Both B tiles neighbor the A tile, so "AB" is reached by two walks.
    let graph = graph("AB,BC");
    let candidates: Vec<_> = graph.candidates(2).collect();
    expect_eq!(candidates.iter().filter(|c| *c == "AB").count(), 2);
  }

  #[gtest]
  fn test_zero_rounds() {
    let graph = graph("AB,CD");
    expect_eq!(graph.candidates(0).count(), 0);
  }

  #[gtest]
  fn test_single_tile() {
    let graph = graph("Q");
    expect_that!(graph.candidates(8).collect::<Vec<_>>(), container_eq(["Q"]));
  }

  #[gtest]
  fn test_empty_board() {
    let graph = graph("");
    expect_eq!(graph.candidates(8).count(), 0);
  }

  #[gtest]
  fn test_lazy() {
    let graph = graph("DEM,RCO,AOY");
    let mut enumerator = graph.candidates(8);
    expect_eq!(enumerator.next(), Some("D".to_owned()));
    expect_eq!(enumerator.round(), 1);
  }

  #[gtest]
  fn test_tiles_filled_on_demand() {
    let graph = graph("DEM,RCO,AOY");
    let mut enumerator = super::CandidateEnumerator::new(&graph, 2);
    let first_round: Vec<_> = enumerator.by_ref().take(9).collect();
    expect_eq!(first_round.len(), 9);

    let pulled = enumerator.next().unwrap();
    expect_eq!(enumerator.round(), 2);
    expect_true!(["DE", "DR", "DC"].contains(&pulled.as_str()));
    expect_eq!(enumerator.current[0].len(), 3);
    expect_true!(enumerator.current[1..].iter().all(Vec::is_empty));
  }

  #[gtest]
  fn test_candidates_are_traceable() {
    let graph = graph("DEM,RCO,AOY");
    for candidate in graph.candidates(4) {
      expect_true!(graph.can_trace(&candidate));
    }
  }

  #[gtest]
  fn test_repeatable_on_fresh_graphs() {
    let first: Vec<_> = graph("TTZ,ONI,TEI").candidates(4).sorted().collect();
    let second: Vec<_> = graph("TTZ,ONI,TEI").candidates(4).sorted().collect();
    expect_eq!(first, second);
  }

  #[gtest]
  fn test_finds_words() {
    let graph = graph("DEM,RCO,AOY");
    let candidates: Vec<_> = graph.candidates(6).collect();
    for word in ["COY", "DECOR", "ROARED"] {
      expect_true!(candidates.iter().any(|c| c == word));
    }
  }
}
