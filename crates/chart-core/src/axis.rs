// File: crates/chart-core/src/axis.rs
// Summary: Axis model with titles, ranges, category labels and tick styling.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ScaleKind {
    Linear,
    Category,
}

#[derive(Clone, Debug, Serialize)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
    /// Category names; category `i` sits at data coordinate `i`.
    pub categories: Vec<String>,
    /// Tick label rotation in degrees, clockwise.
    pub tick_angle: f32,
    pub tick_font_size: f32,
    pub show_grid: bool,
    pub show_zero_line: bool,
    pub show_tick_labels: bool,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            kind: ScaleKind::Linear,
            categories: Vec::new(),
            tick_angle: 0.0,
            tick_font_size: 12.0,
            show_grid: true,
            show_zero_line: true,
            show_tick_labels: true,
        }
    }

    /// Category axis spanning half a slot on each side of the outer categories.
    pub fn categorical(label: impl Into<String>, categories: Vec<String>) -> Self {
        let n = categories.len().max(1) as f64;
        let mut a = Self::new(label, -0.5, n - 0.5);
        a.kind = ScaleKind::Category;
        a.categories = categories;
        a.show_grid = false;
        a.show_zero_line = false;
        a
    }

    pub fn default_x() -> Self {
        Self::new("", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("", 0.0, 10.0)
    }

    pub fn with_tick_angle(mut self, degrees: f32) -> Self {
        self.tick_angle = degrees;
        self
    }

    pub fn with_tick_font_size(mut self, size: f32) -> Self {
        self.tick_font_size = size;
        self
    }

    /// Hide grid, zero line and tick labels; keeps the range.
    pub fn hidden(mut self) -> Self {
        self.show_grid = false;
        self.show_zero_line = false;
        self.show_tick_labels = false;
        self
    }

    pub fn contains(&self, v: f64) -> bool {
        let (lo, hi) = if self.min <= self.max { (self.min, self.max) } else { (self.max, self.min) };
        v >= lo && v <= hi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorical_range_pads_half_slot() {
        let a = Axis::categorical("Mechanics", vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!((a.min, a.max), (-0.5, 2.5));
        assert_eq!(a.kind, ScaleKind::Category);
        assert!(a.contains(0.0) && a.contains(2.0) && !a.contains(3.0));
    }
}
