use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use word_grid::{enumerator::DEFAULT_MAX_ROUNDS, scan::DEFAULT_MIN_LENGTH, ScanOptions, Strategy};

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum StrategyArg {
  #[default]
  Graph,
  Lines,
}

impl From<StrategyArg> for Strategy {
  fn from(value: StrategyArg) -> Self {
    match value {
      StrategyArg::Graph => Strategy::Graph,
      StrategyArg::Lines => Strategy::Lines,
    }
  }
}

#[derive(ClapArgs, Debug)]
pub struct ScanArgs {
  /// Dictionary file: `.json`, `.bin`, or one word per line.
  #[arg(long)]
  pub dict: PathBuf,

  #[arg(long, value_enum, default_value_t = StrategyArg::Graph)]
  pub strategy: StrategyArg,

  /// Longest walk enumerated, in tiles.
  #[arg(long, default_value_t = DEFAULT_MAX_ROUNDS)]
  pub max_rounds: u32,

  #[arg(long, default_value_t = DEFAULT_MIN_LENGTH)]
  pub min_length: usize,

  /// Stop scanning after this many seconds. 0 disables the limit.
  #[arg(long, default_value_t = 5)]
  pub time_limit_secs: u64,
}

impl ScanArgs {
  pub fn scan_options(&self) -> ScanOptions {
    ScanOptions {
      strategy: self.strategy.into(),
      max_rounds: self.max_rounds,
      min_length: self.min_length,
      time_limit: (self.time_limit_secs > 0)
        .then(|| std::time::Duration::from_secs(self.time_limit_secs)),
    }
  }
}

#[derive(Subcommand, Debug)]
pub enum Command {
  /// List every dictionary word found on a board, e.g. `DEM,RCO,AOY`.
  Find {
    board: String,

    #[command(flatten)]
    scan: ScanArgs,
  },
  /// Check whether a single word can be read off a board.
  Exists {
    board: String,
    word: String,

    #[command(flatten)]
    scan: ScanArgs,
  },
  /// Compile a word list or JSON dictionary into the binary format.
  BuildDict { input: PathBuf, output: PathBuf },
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
  #[command(subcommand)]
  pub command: Command,
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use std::time::Duration;

  use clap::Parser;
  use googletest::prelude::*;
  use word_grid::Strategy;

  use super::{Args, Command};

  #[gtest]
  fn test_find_defaults() {
    let args =
      Args::try_parse_from(["word-grid", "find", "DEM,RCO,AOY", "--dict", "words.txt"]).unwrap();
    let Command::Find { board, scan } = args.command else {
      panic!("expected find");
    };
    expect_eq!(board, "DEM,RCO,AOY");
    let options = scan.scan_options();
    expect_eq!(options.strategy, Strategy::Graph);
    expect_eq!(options.max_rounds, 8);
    expect_eq!(options.min_length, 3);
    expect_eq!(options.time_limit, Some(Duration::from_secs(5)));
  }

  #[gtest]
  fn test_exists_overrides() {
    let args = Args::try_parse_from([
      "word-grid",
      "exists",
      "CAT,XXX,XXX",
      "CAT",
      "--dict",
      "dict.bin",
      "--strategy",
      "lines",
      "--time-limit-secs",
      "0",
    ])
    .unwrap();
    let Command::Exists { word, scan, .. } = args.command else {
      panic!("expected exists");
    };
    expect_eq!(word, "CAT");
    let options = scan.scan_options();
    expect_eq!(options.strategy, Strategy::Lines);
    expect_eq!(options.time_limit, None);
  }

  #[gtest]
  fn test_missing_dict() {
    expect_that!(Args::try_parse_from(["word-grid", "find", "AB,CD"]), err(anything()));
  }
}
