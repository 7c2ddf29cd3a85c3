use core::fmt;
use std::{
  error::Error,
  fmt::{Display, Formatter},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordGridError {
  /// Input was well formed but violates a structural rule, e.g. a board that
  /// is not square.
  Validation(String),
  Parse(String),
  Internal(String),
}

impl WordGridError {
  pub fn is_validation(&self) -> bool {
    matches!(self, WordGridError::Validation(_))
  }

  pub fn message(&self) -> &str {
    match self {
      WordGridError::Validation(msg) | WordGridError::Parse(msg) | WordGridError::Internal(msg) => {
        msg
      }
    }
  }
}

impl Display for WordGridError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      WordGridError::Validation(msg) => write!(f, "Validation error: {msg}"),
      WordGridError::Parse(msg) => write!(f, "Parse error: {msg}"),
      WordGridError::Internal(msg) => write!(f, "Internal error: {msg}"),
    }
  }
}

impl Error for WordGridError {}

pub type WordGridResult<T = ()> = Result<T, Box<dyn Error>>;

/// Returns the `WordGridError` behind a boxed error, if that is what it holds.
pub fn as_word_grid_error<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a WordGridError> {
  err.downcast_ref::<WordGridError>()
}
