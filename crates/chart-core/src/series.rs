// File: crates/chart-core/src/series.rs
// Summary: Series (trace) model for grouped bars and scatter lines/markers/text.
// Notes:
// - A `Series` keeps one flat layout for both trace kinds, like the renderer
//   expects: bars read `categories`/`values`, scatters read `data_xy`.
// - Styling is attached with `with_*` builders so chart builders read top-down.

use serde::Serialize;

use crate::error::{ChartError, Result};
use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SeriesType {
    Bar,     // one bar per category, grouped with sibling bar series
    Scatter, // (x, y) points drawn as lines, markers and/or text
}

/// Which parts of a scatter trace are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Mode {
    pub lines: bool,
    pub markers: bool,
    pub text: bool,
}

impl Mode {
    pub const LINES: Mode = Mode { lines: true, markers: false, text: false };
    pub const MARKERS: Mode = Mode { lines: false, markers: true, text: false };
    pub const TEXT: Mode = Mode { lines: false, markers: false, text: true };
    pub const MARKERS_TEXT: Mode = Mode { lines: false, markers: true, text: true };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Dash {
    Solid,
    Dot,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: Color,
    pub width: f32,
    pub dash: Dash,
}

impl LineStyle {
    pub fn solid(color: Color, width: f32) -> Self {
        Self { color, width, dash: Dash::Solid }
    }

    pub fn dotted(color: Color, width: f32) -> Self {
        Self { color, width, dash: Dash::Dot }
    }
}

/// Circle marker; `size` is the diameter in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub size: f32,
    pub color: Color,
    pub outline: Option<(f32, Color)>,
}

/// Text drawn centered on every point of a scatter trace.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PointText {
    pub text: String,
    pub size: f32,
    pub color: Option<Color>, // None: theme label color
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Fill {
    None,
    ToSelf, // close the point polygon and fill it with the line color
}

#[derive(Clone, Debug, Serialize)]
pub struct Series {
    pub series_type: SeriesType,
    pub name: Option<String>,
    pub categories: Vec<String>,   // used by Bar
    pub values: Vec<f64>,          // used by Bar
    pub data_xy: Vec<(f64, f64)>,  // used by Scatter
    pub color: Color,              // bar fill
    pub mode: Mode,
    pub line: Option<LineStyle>,
    pub marker: Option<MarkerStyle>,
    pub text: Option<PointText>,
    pub fill: Fill,
    pub show_legend: bool,
}

impl Series {
    pub fn new(series_type: SeriesType) -> Self {
        Self {
            series_type,
            name: None,
            categories: Vec::new(),
            values: Vec::new(),
            data_xy: Vec::new(),
            color: Color::GRAY,
            mode: Mode::LINES,
            line: None,
            marker: None,
            text: None,
            fill: Fill::None,
            show_legend: true,
        }
    }

    /// Bar series over named categories.
    /// Contract: one value per category.
    pub fn try_bar(
        name: impl Into<String>,
        categories: Vec<String>,
        values: Vec<f64>,
    ) -> Result<Self> {
        let name = name.into();
        if categories.len() != values.len() {
            return Err(ChartError::LengthMismatch {
                name,
                categories: categories.len(),
                values: values.len(),
            });
        }
        let mut s = Self::new(SeriesType::Bar);
        s.name = Some(name);
        s.categories = categories;
        s.values = values;
        Ok(s)
    }

    pub fn scatter(mode: Mode, data: Vec<(f64, f64)>) -> Self {
        let mut s = Self::new(SeriesType::Scatter);
        s.mode = mode;
        s.data_xy = data;
        s
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_line(mut self, line: LineStyle) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_marker(mut self, marker: MarkerStyle) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>, size: f32) -> Self {
        self.text = Some(PointText { text: text.into(), size, color: None });
        self
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    pub fn hide_legend(mut self) -> Self {
        self.show_legend = false;
        self
    }

    /// Whether this series contributes an entry to the legend.
    pub fn in_legend(&self) -> bool {
        self.show_legend && self.name.is_some()
    }

    /// Swatch color for the legend entry.
    pub fn legend_color(&self) -> Color {
        match self.series_type {
            SeriesType::Bar => self.color,
            SeriesType::Scatter => self
                .marker
                .map(|m| m.color)
                .or(self.line.map(|l| l.color))
                .unwrap_or(self.color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_requires_one_value_per_category() {
        let err = Series::try_bar("x", vec!["a".into(), "b".into()], vec![1.0]).unwrap_err();
        assert!(matches!(err, ChartError::LengthMismatch { categories: 2, values: 1, .. }));
    }

    #[test]
    fn scatter_legend_color_prefers_marker() {
        let s = Series::scatter(Mode::MARKERS_TEXT, vec![(0.0, 0.0)])
            .with_line(LineStyle::solid(Color::GRAY, 2.0))
            .with_marker(MarkerStyle { size: 10.0, color: Color::WHITE, outline: None });
        assert_eq!(s.legend_color(), Color::WHITE);
        assert!(!s.in_legend(), "unnamed series stays out of the legend");
    }
}
