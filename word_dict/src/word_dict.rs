use std::{
  collections::{HashMap, HashSet},
  fs::{self, File},
  io::Write,
  path::Path,
};

use bitcode::{Decode, Encode};
use itertools::Itertools;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{de::IgnoredAny, Deserialize};
use util::error::{WordGridError, WordGridResult};

use crate::oracle::WordOracle;

#[allow(clippy::unwrap_used)]
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\p{Alphabetic}+$").unwrap());

/// The shapes of JSON dictionary accepted by `WordDict::parse_json`.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonDictionary {
  /// `{"word": "definition", ...}`; only the keys are kept.
  Definitions(HashMap<String, IgnoredAny>),
  Words(Vec<String>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DictFormat {
  Json,
  Binary,
  WordList,
}

impl DictFormat {
  pub fn from_path(path: &Path) -> Self {
    match path.extension().and_then(|ext| ext.to_str()) {
      Some("json") => DictFormat::Json,
      Some("bin") => DictFormat::Binary,
      _ => DictFormat::WordList,
    }
  }
}

/// A case-insensitive set of words. Lookups lowercase the query, stored words
/// are lowercase.
#[derive(Clone, Debug, Default, Encode, Decode)]
pub struct WordDict {
  words: HashSet<String>,
}

impl WordDict {
  fn canonicalize_word(word: &str) -> String {
    word.trim().to_lowercase()
  }

  /// Canonical form of `word`, or `None` if it is not purely alphabetic.
  fn admit(word: &str) -> Option<String> {
    let word = Self::canonicalize_word(word);
    WORD_RE.is_match(&word).then_some(word)
  }

  pub fn from_words<S>(words: impl IntoIterator<Item = S>) -> Self
  where
    S: AsRef<str>,
  {
    Self { words: words.into_iter().filter_map(|word| Self::admit(word.as_ref())).collect() }
  }

  /// One word per line. Blank lines and lines starting with `#` are skipped.
  pub fn parse_word_list<S>(lines: impl IntoIterator<Item = S>) -> Self
  where
    S: AsRef<str>,
  {
    Self::from_words(lines.into_iter().filter(|line| {
      let line = line.as_ref().trim();
      !line.is_empty() && !line.starts_with('#')
    }))
  }

  pub fn parse_json(text: &str) -> WordGridResult<Self> {
    let dict: JsonDictionary = serde_json::from_str(text)
      .map_err(|err| WordGridError::Parse(format!("Failed to parse JSON dictionary: {err}")))?;
    Ok(match dict {
      JsonDictionary::Definitions(definitions) => Self::from_words(definitions.keys()),
      JsonDictionary::Words(words) => Self::from_words(words),
    })
  }

  pub fn decode(bytes: &[u8]) -> WordGridResult<Self> {
    Ok(bitcode::decode(bytes)?)
  }

  pub fn encode(&self) -> Vec<u8> {
    bitcode::encode(self)
  }

  pub fn load(path: impl AsRef<Path>) -> WordGridResult<Self> {
    let path = path.as_ref();
    let format = DictFormat::from_path(path);
    let dict = match format {
      DictFormat::Json => Self::parse_json(&fs::read_to_string(path)?)?,
      DictFormat::Binary => Self::decode(&fs::read(path)?)?,
      DictFormat::WordList => Self::parse_word_list(fs::read_to_string(path)?.lines()),
    };
    debug!("Loaded {} words from {} ({format:?})", dict.len(), path.display());
    Ok(dict)
  }

  pub fn save(&self, path: impl AsRef<Path>) -> WordGridResult {
    let mut file = File::create(path)?;
    file.write_all(&self.encode())?;
    Ok(())
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  pub fn contains(&self, word: &str) -> bool {
    self.words.contains(&Self::canonicalize_word(word))
  }

  /// All words in alphabetical order.
  pub fn words(&self) -> impl Iterator<Item = &str> {
    self.words.iter().map(|word| word.as_str()).sorted()
  }
}

impl WordOracle for WordDict {
  fn is_valid_word(&self, word: &str) -> bool {
    !word.is_empty() && self.contains(word)
  }
}
