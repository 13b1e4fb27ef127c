// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the chart model and headless PNG rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod layout;
pub mod grid;
pub mod types;
pub mod error;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod text;

pub use chart::{Chart, RenderOptions};
pub use series::{Dash, Fill, LineStyle, MarkerStyle, Mode, Series, SeriesType};
pub use axis::{Axis, ScaleKind};
pub use layout::{BarMode, Layout, Legend, Orientation};
pub use error::{ChartError, Result};
pub use types::Color;
pub use theme::Theme;
pub use text::TextShaper;
pub use grid::linspace;
