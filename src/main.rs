#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod args;
mod response;

use std::process::ExitCode;

use args::{Args, Command, ScanArgs};
use clap::Parser;
use log::info;
use response::{ErrorResponse, ValidWordsResponse};
use util::{
  error::{as_word_grid_error, WordGridResult},
  time::time_fn,
};
use word_dict::WordDict;
use word_grid::{Board, WordScan};

fn load_scan(scan: &ScanArgs) -> WordGridResult<WordScan<WordDict>> {
  let (elapsed, dict) = time_fn(|| WordDict::load(&scan.dict));
  let dict = dict?;
  info!("Loaded {} words in {}s", dict.len(), elapsed.as_secs_f32());
  Ok(WordScan::new(dict, scan.scan_options()))
}

fn run(args: Args) -> WordGridResult<String> {
  match args.command {
    Command::Find { board, scan } => {
      let board = Board::parse(&board)?;
      let scanner = load_scan(&scan)?;
      let (elapsed, report) = time_fn(|| scanner.find_words(&board));
      info!("Scan took {}s", elapsed.as_secs_f32());
      Ok(serde_json::to_string_pretty(&ValidWordsResponse::from(&report))?)
    }
    Command::Exists { board, word, scan } => {
      let board = Board::parse(&board)?;
      let scanner = load_scan(&scan)?;
      Ok(serde_json::to_string(&scanner.word_exists(&board, &word))?)
    }
    Command::BuildDict { input, output } => {
      let dict = WordDict::load(&input)?;
      dict.save(&output)?;
      Ok(format!("Wrote {} words to {}", dict.len(), output.display()))
    }
  }
}

fn main() -> ExitCode {
  env_logger::init();

  match run(Args::parse()) {
    Ok(output) => {
      println!("{output}");
      ExitCode::SUCCESS
    }
    Err(err) => {
      match as_word_grid_error(err.as_ref()).filter(|err| err.is_validation()) {
        Some(err) => match serde_json::to_string(&ErrorResponse { message: err.message() }) {
          Ok(json) => println!("{json}"),
          Err(_) => println!("Error: {err}"),
        },
        None => println!("Error: {err}"),
      }
      ExitCode::FAILURE
    }
  }
}
