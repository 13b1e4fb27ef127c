// File: crates/mood-charts/src/error.rs
// Summary: Dataset invariant violations and chart construction failures.

use chart_core::ChartError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("category '{category}' has {got} scores for {expected} mechanics")]
    ScoreCount {
        category: String,
        got: usize,
        expected: usize,
    },

    #[error("score {score} for '{mechanic}' in '{category}' is outside 0..={max}")]
    ScoreRange {
        category: String,
        mechanic: String,
        score: u8,
        max: u8,
    },

    #[error("palette has {colors} colors for {needed} series")]
    Palette { colors: usize, needed: usize },

    #[error("edge {from}->{to} references a stage outside 0..{stages}")]
    EdgeOutOfRange { from: usize, to: usize, stages: usize },

    #[error("edge {0}->{0} loops onto its own stage")]
    SelfLoop(usize),

    #[error(transparent)]
    Chart(#[from] ChartError),
}
