// File: crates/chart-core/src/error.rs
// Summary: Error type shared by chart construction and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid color '{0}': expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    #[error("series '{name}' has {categories} categories but {values} values")]
    LengthMismatch {
        name: String,
        categories: usize,
        values: usize,
    },

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("encode PNG failed")]
    Encode,

    #[error("reading back surface pixels failed")]
    ReadPixels,

    #[error("serialize chart spec: {0}")]
    Spec(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
