use std::fmt::Display;

use log::debug;
use util::{
  error::{WordGridError, WordGridResult},
  grid::{Grid, Gridlike},
};

pub const ROW_SEPARATOR: char = ',';

const NOT_SQUARE: &str = "The given board cannot be defined by a square matrix.";

/// A square matrix of letters, parsed from a definition like `"DEM,RCO,AOY"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
  grid: Grid<char>,
}

impl Board {
  /// Checks that `definition` describes a square matrix without building it.
  pub fn validate(definition: &str) -> WordGridResult {
    Self::split_rows(definition).map(|_| ())
  }

  pub fn parse(definition: &str) -> WordGridResult<Self> {
    let rows = Self::split_rows(definition)?;
    let size = rows.len() as u32;
    let grid = Grid::from_vec(rows.iter().flat_map(|row| row.chars()).collect(), size, size)?;
    debug!("Parsed {size}x{size} board:\n{grid}");
    Ok(Self { grid })
  }

  /// Splits into rows and enforces squareness. The empty definition is the
  /// 0x0 board.
  fn split_rows(definition: &str) -> WordGridResult<Vec<&str>> {
    if definition.is_empty() {
      return Ok(vec![]);
    }

    let rows: Vec<_> = definition.split(ROW_SEPARATOR).collect();
    let size = rows.len();
    if let Some(row) = rows.iter().find(|row| row.chars().count() != size) {
      debug!("Row \"{row}\" has {} characters, expected {size}", row.chars().count());
      return Err(WordGridError::Validation(NOT_SQUARE.to_owned()).into());
    }
    Ok(rows)
  }

  pub fn size(&self) -> u32 {
    self.grid.width()
  }

  pub fn grid(&self) -> &Grid<char> {
    &self.grid
  }

  pub fn rows(&self) -> Vec<String> {
    (0..self.grid.height()).map(|y| self.grid.iter_row(y).collect()).collect()
  }
}

impl Display for Board {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let separator = ROW_SEPARATOR.to_string();
    write!(f, "{}", self.rows().join(separator.as_str()))
  }
}
