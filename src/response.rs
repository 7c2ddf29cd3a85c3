use serde::Serialize;
use word_grid::ScanReport;

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ValidWordsResponse<'a> {
  pub board: &'a [String],
  pub words: &'a [String],
}

impl<'a> From<&'a ScanReport> for ValidWordsResponse<'a> {
  fn from(report: &'a ScanReport) -> Self {
    Self { board: &report.board, words: &report.words }
  }
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ErrorResponse<'a> {
  pub message: &'a str,
}
