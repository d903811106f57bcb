//! Engine Duel Runner
//!
//! This crate provides infrastructure for:
//! - Playing head-to-head series between two engines
//! - Alternating colors so neither side keeps the first-move edge
//! - Aggregating wins, disc averages and margins per engine
//! - Saving series reports as JSON for later comparison
//!
//! # Usage
//!
//! ```bash
//! # Ten games, colors alternating, minimax against the random baseline
//! cargo run -p duel -- minimax random --games 10 --depth 3
//!
//! # Reproducible series on a small board, report written to a file
//! cargo run -p duel -- minimax minimax --size 6 --seed 7 --out series.json
//! ```

mod match_runner;
mod results;
mod stats;

pub use match_runner::*;
pub use results::*;
pub use stats::*;
