#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod adjacency;
pub mod board;
pub mod enumerator;
pub mod line_scan;
pub mod scan;
pub mod verifier;

pub use adjacency::{AdjacencyGraph, PositionClass, Tile};
pub use board::Board;
pub use enumerator::{CandidateEnumerator, DEFAULT_MAX_ROUNDS};
pub use scan::{ScanOptions, ScanReport, Strategy, WordScan};
