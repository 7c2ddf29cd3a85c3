use crate::adjacency::AdjacencyGraph;

/// Whether `word` can be traced as a walk over `graph`: some tile holds its
/// first letter and each following letter is on a tile adjacent to the
/// previous one. Tiles may be reused. The empty word is never traceable.
///
/// Depth-first with an explicit stack. Whether the rest of the word can be
/// traced from a tile depends only on the tile and how much of the word is
/// consumed, so each such state is expanded at most once.
pub fn exists(graph: &AdjacencyGraph, word: &str) -> bool {
  let letters: Vec<char> = word.chars().collect();
  let Some(&first) = letters.first() else {
    return false;
  };

  let mut expanded = vec![false; graph.len() * letters.len()];
  let mut stack: Vec<(usize, usize)> =
    graph.tiles_with_letter(first).map(|tile| (tile, 1)).collect();

  while let Some((tile, consumed)) = stack.pop() {
    if consumed == letters.len() {
      return true;
    }

    let state = tile * letters.len() + consumed;
    if expanded[state] {
      continue;
    }
    expanded[state] = true;

    let next = letters[consumed];
    stack.extend(
      graph
        .neighbors(tile)
        .iter()
        .filter(|&&neighbor| graph.letter(neighbor) == Some(next))
        .map(|&neighbor| (neighbor, consumed + 1)),
    );
  }

  false
}
