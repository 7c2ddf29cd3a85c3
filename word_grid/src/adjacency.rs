use itertools::Itertools;
use log::debug;
use util::pos::{Diff, Pos};

use crate::{board::Board, enumerator::CandidateEnumerator, verifier};

/// Where a tile sits relative to the board's boundary, which fixes how many
/// neighbors it has.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum PositionClass {
  /// The only tile of a 1x1 board.
  Single,
  Corner,
  /// On the boundary but not a corner. Only exists when size > 2.
  Edge,
  Interior,
}

impl PositionClass {
  pub fn classify(pos: Pos, size: u32) -> Self {
    let last = size as i32 - 1;
    if size <= 1 {
      return PositionClass::Single;
    }
    let on_col_boundary = pos.x == 0 || pos.x == last;
    let on_row_boundary = pos.y == 0 || pos.y == last;
    match (on_col_boundary, on_row_boundary) {
      (true, true) => PositionClass::Corner,
      (true, false) | (false, true) => PositionClass::Edge,
      (false, false) => PositionClass::Interior,
    }
  }

  pub const fn neighbor_count(&self) -> usize {
    match self {
      PositionClass::Single => 0,
      PositionClass::Corner => 3,
      PositionClass::Edge => 5,
      PositionClass::Interior => 8,
    }
  }
}

#[derive(Clone, Debug)]
pub struct Tile {
  letter: char,
  pos: Pos,
  class: PositionClass,
  /// Indices into the owning graph's tile list.
  neighbors: Vec<usize>,
}

impl Tile {
  fn new(letter: char, pos: Pos, class: PositionClass) -> Self {
    Self { letter, pos, class, neighbors: Vec::with_capacity(class.neighbor_count()) }
  }

  pub fn letter(&self) -> char {
    self.letter
  }

  pub fn pos(&self) -> Pos {
    self.pos
  }

  pub fn class(&self) -> PositionClass {
    self.class
  }

  pub fn neighbors(&self) -> &[usize] {
    &self.neighbors
  }
}

/// Every tile of a board with its 8-directional neighbor relations. Tiles are
/// stored in row-major order, so tile `i` is at row `i / size`, column
/// `i % size`.
#[derive(Clone, Debug)]
pub struct AdjacencyGraph {
  size: u32,
  tiles: Vec<Tile>,
}

impl AdjacencyGraph {
  pub fn build(board: &Board) -> Self {
    let grid = board.grid();
    let size = board.size();
    let mut graph = Self {
      size,
      tiles: grid
        .positions()
        .zip(grid.iter())
        .map(|(pos, &letter)| Tile::new(letter, pos, PositionClass::classify(pos, size)))
        .collect(),
    };

    for (index, pos) in grid.positions().enumerate() {
      for diff in Diff::FORWARD_NEIGHBORS {
        if let Some(other) = grid.index_of(pos + diff) {
          graph.link(index, other);
        }
      }
    }

    debug_assert!(graph
      .tiles
      .iter()
      .all(|tile| tile.neighbors.len() == tile.class.neighbor_count()));
    debug!(
      "Built adjacency graph for {size}x{size} board: {} tiles, {} relations",
      graph.len(),
      graph.relation_count()
    );
    graph
  }

  /// Registers `a` and `b` as neighbors of each other.
  fn link(&mut self, a: usize, b: usize) {
    debug_assert!(self.tiles[a].pos.touches(self.tiles[b].pos));
    self.tiles[a].neighbors.push(b);
    self.tiles[b].neighbors.push(a);
  }

  pub fn size(&self) -> u32 {
    self.size
  }

  pub fn len(&self) -> usize {
    self.tiles.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tiles.is_empty()
  }

  pub fn tile(&self, index: usize) -> Option<&Tile> {
    self.tiles.get(index)
  }

  pub fn tiles(&self) -> &[Tile] {
    &self.tiles
  }

  pub fn neighbors(&self, index: usize) -> &[usize] {
    self.tiles.get(index).map(Tile::neighbors).unwrap_or_default()
  }

  pub fn letter(&self, index: usize) -> Option<char> {
    self.tiles.get(index).map(Tile::letter)
  }

  /// Number of unordered neighbor pairs.
  pub fn relation_count(&self) -> usize {
    self.tiles.iter().map(|tile| tile.neighbors.len()).sum::<usize>() / 2
  }

  /// Tile indices whose letter is `letter`.
  pub fn tiles_with_letter(&self, letter: char) -> impl Iterator<Item = usize> + '_ {
    self.tiles.iter().positions(move |tile| tile.letter == letter)
  }

  /// A fresh enumeration of every walk of at most `max_rounds` tiles.
  pub fn candidates(&self, max_rounds: u32) -> CandidateEnumerator<'_> {
    CandidateEnumerator::new(self, max_rounds)
  }

  pub fn can_trace(&self, word: &str) -> bool {
    verifier::exists(self, word)
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;
  use util::pos::Pos;

  use crate::board::Board;

  use super::{AdjacencyGraph, PositionClass};

  fn graph(definition: &str) -> AdjacencyGraph {
    AdjacencyGraph::build(&Board::parse(definition).unwrap())
  }

  fn square(size: usize) -> String {
    let row = "X".repeat(size);
    vec![row; size].join(",")
  }

  #[gtest]
  fn test_single_tile_has_no_neighbors() {
    let graph = graph("A");
    expect_eq!(graph.len(), 1);
    expect_true!(graph.neighbors(0).is_empty());
    expect_eq!(graph.relation_count(), 0);
    expect_eq!(graph.tile(0).unwrap().class(), PositionClass::Single);
  }

  #[gtest]
  fn test_empty_board() {
    let graph = graph("");
    expect_true!(graph.is_empty());
    expect_eq!(graph.relation_count(), 0);
  }

  #[gtest]
  fn test_two_by_two_is_all_corners() {
    let graph = graph("AB,CD");
    for tile in graph.tiles() {
      expect_eq!(tile.class(), PositionClass::Corner);
      expect_eq!(tile.neighbors().len(), 3);
    }
    expect_eq!(graph.relation_count(), 6);
  }

  #[gtest]
  fn test_neighbor_counts_by_class() {
    for size in 3..=7 {
      let graph = graph(&square(size));
      let last = size as i32 - 1;
      for tile in graph.tiles() {
        let Pos { x, y } = tile.pos();
        let expected = match (x == 0 || x == last, y == 0 || y == last) {
          (true, true) => 3,
          (true, false) | (false, true) => 5,
          (false, false) => 8,
        };
        expect_eq!(tile.neighbors().len(), expected);
        expect_eq!(tile.class().neighbor_count(), expected);
      }
      let endpoints: usize = graph.tiles().iter().map(|tile| tile.neighbors().len()).sum();
      expect_eq!(endpoints % 2, 0);
    }
  }

  #[gtest]
  fn test_symmetric_and_touching() {
    let graph = graph(&square(5));
    let linked = |a: usize, b: usize| graph.neighbors(a).contains(&b);
    for (a, tile) in graph.tiles().iter().enumerate() {
      for b in 0..graph.len() {
        expect_eq!(linked(a, b), linked(b, a));
        expect_eq!(linked(a, b), tile.pos().touches(graph.tiles()[b].pos()));
      }
    }
  }

  #[gtest]
  fn test_no_duplicate_relations() {
    let graph = graph(&square(4));
    for tile in graph.tiles() {
      let mut neighbors = tile.neighbors().to_vec();
      neighbors.sort();
      neighbors.dedup();
      expect_eq!(neighbors.len(), tile.neighbors().len());
    }
  }

  #[gtest]
  fn test_row_major_letters() {
    let graph = graph("DEM,RCO,AOY");
    expect_eq!(graph.letter(0), Some('D'));
    expect_eq!(graph.letter(3), Some('R'));
    expect_eq!(graph.letter(8), Some('Y'));
    expect_eq!(graph.tile(4).unwrap().class(), PositionClass::Interior);
    expect_that!(graph.tiles_with_letter('O').collect::<Vec<_>>(), container_eq([5, 7]));
  }
}
