#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod oracle;
pub mod word_dict;

pub use oracle::WordOracle;
pub use word_dict::WordDict;
