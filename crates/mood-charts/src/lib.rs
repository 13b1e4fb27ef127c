// File: crates/mood-charts/src/lib.rs
// Summary: Mood tracker chart builders: compiled-in datasets turned into `chart_core::Chart`s.

pub mod benefits;
pub mod error;
pub mod flow;

pub use error::DatasetError;

use std::path::PathBuf;

/// Output path for a chart binary: the first CLI argument when given,
/// otherwise the fixed default filename in the working directory.
pub fn output_path(default_file: &str) -> PathBuf {
    output_path_from(std::env::args().nth(1), default_file)
}

fn output_path_from(arg: Option<String>, default_file: &str) -> PathBuf {
    match arg.filter(|a| !a.trim().is_empty()) {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(default_file),
    }
}
