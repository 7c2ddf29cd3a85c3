use std::time::Duration;

use itertools::Itertools;
use log::{debug, info};
use util::time::Deadline;
use word_dict::WordOracle;

use crate::{
  adjacency::AdjacencyGraph,
  board::Board,
  enumerator::DEFAULT_MAX_ROUNDS,
  line_scan::{self, MIN_LINE_WORD_LEN},
  verifier,
};

pub const DEFAULT_MIN_LENGTH: usize = 3;

/// How candidate words are read off the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
  /// Walks over adjacent tiles in any direction, changing direction freely.
  #[default]
  Graph,
  /// Straight rows, columns and diagonals only.
  Lines,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanOptions {
  pub strategy: Strategy,
  /// Longest walk enumerated, in tiles. Only used by `Strategy::Graph`.
  pub max_rounds: u32,
  pub min_length: usize,
  /// Stop pulling candidates once this much time has passed.
  pub time_limit: Option<Duration>,
}

impl Default for ScanOptions {
  fn default() -> Self {
    Self {
      strategy: Strategy::default(),
      max_rounds: DEFAULT_MAX_ROUNDS,
      min_length: DEFAULT_MIN_LENGTH,
      time_limit: None,
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanReport {
  pub board: Vec<String>,
  /// Sorted, without duplicates.
  pub words: Vec<String>,
  pub candidates_examined: usize,
  /// True if the time limit cut the scan short.
  pub timed_out: bool,
}

/// Finds the words on a board that an oracle accepts.
pub struct WordScan<O> {
  oracle: O,
  options: ScanOptions,
}

impl<O> WordScan<O>
where
  O: WordOracle,
{
  pub fn new(oracle: O, options: ScanOptions) -> Self {
    Self { oracle, options }
  }

  pub fn options(&self) -> &ScanOptions {
    &self.options
  }

  pub fn find_words(&self, board: &Board) -> ScanReport {
    let graph = AdjacencyGraph::build(board);
    let candidates: Box<dyn Iterator<Item = String> + '_> = match self.options.strategy {
      Strategy::Graph => Box::new(graph.candidates(self.options.max_rounds)),
      Strategy::Lines => {
        Box::new(line_scan::candidates(board, self.options.min_length.max(MIN_LINE_WORD_LEN)))
      }
    };

    let deadline = Deadline::after(self.options.time_limit);
    let mut candidates_examined = 0;
    let mut timed_out = false;
    let mut words = Vec::new();
    for candidate in candidates {
      if deadline.expired() {
        timed_out = true;
        break;
      }
      candidates_examined += 1;
      if candidate.chars().count() >= self.options.min_length
        && self.oracle.is_valid_word(&candidate)
      {
        words.push(candidate);
      }
    }

    let words: Vec<_> = words.into_iter().sorted().dedup().collect();
    info!(
      "Found {} valid words on {board} ({:?}) after examining {candidates_examined} candidates{}",
      words.len(),
      self.options.strategy,
      if timed_out { ", stopped at time limit" } else { "" }
    );

    ScanReport { board: board.rows(), words, candidates_examined, timed_out }
  }

  /// Whether `word` is accepted by the oracle and can be read off the board.
  pub fn word_exists(&self, board: &Board, word: &str) -> bool {
    if word.is_empty() || !self.oracle.is_valid_word(word) {
      debug!("\"{word}\" is not a valid word");
      return false;
    }

    match self.options.strategy {
      Strategy::Graph => verifier::exists(&AdjacencyGraph::build(board), word),
      Strategy::Lines => line_scan::contains(board, word),
    }
  }
}
