use std::collections::{BTreeSet, HashSet};

/// Answers whether a string is a recognized word.
///
/// Implementations decide their own case policy; callers that need a
/// particular normalization apply it before asking.
pub trait WordOracle {
  fn is_valid_word(&self, word: &str) -> bool;
}

impl<O> WordOracle for &O
where
  O: WordOracle + ?Sized,
{
  fn is_valid_word(&self, word: &str) -> bool {
    (**self).is_valid_word(word)
  }
}

/// Exact, case-sensitive membership.
impl WordOracle for HashSet<String> {
  fn is_valid_word(&self, word: &str) -> bool {
    self.contains(word)
  }
}

impl WordOracle for BTreeSet<String> {
  fn is_valid_word(&self, word: &str) -> bool {
    self.contains(word)
  }
}
