//! Straight-line candidates: contiguous runs along rows, columns and both
//! diagonals, read in either direction. This is a cheaper, narrower
//! alternative to enumerating walks.

use util::{
  grid::Gridlike,
  pos::{Diff, Pos},
};

use crate::board::Board;

pub const MIN_LINE_WORD_LEN: usize = 3;

const RIGHT: Diff = Diff { x: 1, y: 0 };
const DOWN: Diff = Diff { x: 0, y: 1 };
const DOWN_RIGHT: Diff = Diff { x: 1, y: 1 };
const DOWN_LEFT: Diff = Diff { x: -1, y: 1 };

/// Start position and direction of every maximal line: rows, columns,
/// descending diagonals, then ascending diagonals.
fn line_starts(size: u32) -> impl Iterator<Item = (Pos, Diff)> {
  let size = size as i32;
  let rows = (0..size).map(|y| (Pos { x: 0, y }, RIGHT));
  let cols = (0..size).map(|x| (Pos { x, y: 0 }, DOWN));
  let descending = (0..size)
    .map(|x| (Pos { x, y: 0 }, DOWN_RIGHT))
    .chain((1..size).map(|y| (Pos { x: 0, y }, DOWN_RIGHT)));
  let ascending = (0..size)
    .map(|x| (Pos { x, y: 0 }, DOWN_LEFT))
    .chain((1..size).map(move |y| (Pos { x: size - 1, y }, DOWN_LEFT)));
  rows.chain(cols).chain(descending).chain(ascending)
}

/// Every contiguous run of `line` at least `min_len` long, each followed by
/// its reverse.
fn runs(line: Vec<char>, min_len: usize) -> impl Iterator<Item = String> {
  let len = line.len();
  (0..len)
    .flat_map(move |start| (start + min_len..=len).map(move |end| (start, end)))
    .flat_map(move |(start, end)| {
      let run: String = line[start..end].iter().collect();
      let reversed = run.chars().rev().collect();
      [run, reversed]
    })
}

/// Lazily yields every straight-line run of at least `min_len` letters, in
/// both reading directions. Palindromic runs are yielded twice.
pub fn candidates(board: &Board, min_len: usize) -> impl Iterator<Item = String> + '_ {
  let min_len = min_len.max(1);
  line_starts(board.size()).flat_map(move |(start, step)| {
    runs(board.grid().iter_line(start, step).copied().collect(), min_len)
  })
}

/// Whether `word` appears as a straight-line run, ignoring case. Words
/// shorter than `MIN_LINE_WORD_LEN` never do.
pub fn contains(board: &Board, word: &str) -> bool {
  if word.chars().count() < MIN_LINE_WORD_LEN {
    return false;
  }
  let word = word.to_lowercase();
  candidates(board, MIN_LINE_WORD_LEN).any(|candidate| candidate.to_lowercase() == word)
}
