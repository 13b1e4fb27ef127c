// File: crates/chart-core/src/layout.rs
// Summary: Figure-level layout: title, bar grouping, legend placement, plot background.

use serde::Serialize;

use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BarMode {
    /// Bars of different series sit side by side inside each category slot.
    Group,
    /// Bars of different series share the full slot, drawn in series order.
    Overlay,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Legend box. Horizontal legends are centered above the plot area;
/// vertical legends stack at the top right inside the plot area.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Legend {
    pub visible: bool,
    pub orientation: Orientation,
    pub font_size: f32,
}

impl Legend {
    pub fn horizontal_above() -> Self {
        Self { visible: true, orientation: Orientation::Horizontal, font_size: 12.0 }
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self { visible: true, orientation: Orientation::Vertical, font_size: 12.0 }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Layout {
    pub title: Option<String>,
    pub bar_mode: BarMode,
    /// Gap between adjacent category groups, as a fraction of the slot.
    pub bar_gap: f64,
    /// Gap between bars of one group, as a fraction of each bar's sub-slot.
    pub bar_group_gap: f64,
    pub legend: Legend,
    /// Overrides the theme's plot-area background.
    pub plot_background: Option<Color>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            title: None,
            bar_mode: BarMode::Group,
            bar_gap: 0.2,
            bar_group_gap: 0.0,
            legend: Legend::default(),
            plot_background: None,
        }
    }
}

impl Layout {
    /// Data-space `(x0, x1)` of the bar for `trace` (0-based among `n_traces`
    /// bar series) in category slot `category`.
    pub fn bar_extent(&self, category: usize, trace: usize, n_traces: usize) -> (f64, f64) {
        let center = category as f64;
        let group = (1.0 - self.bar_gap.clamp(0.0, 1.0)).max(0.0);
        let (slot_center, slot) = match self.bar_mode {
            BarMode::Overlay => (center, group),
            BarMode::Group => {
                let n = n_traces.max(1) as f64;
                let slot = group / n;
                (center - group * 0.5 + slot * (trace as f64 + 0.5), slot)
            }
        };
        let half = slot * (1.0 - self.bar_group_gap.clamp(0.0, 1.0)) * 0.5;
        (slot_center - half, slot_center + half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grouped(gap: f64, group_gap: f64) -> Layout {
        Layout { bar_gap: gap, bar_group_gap: group_gap, ..Layout::default() }
    }

    #[test]
    fn grouped_bars_stay_inside_their_group() {
        let l = grouped(0.2, 0.15);
        let (first_lo, _) = l.bar_extent(3, 0, 4);
        let (_, last_hi) = l.bar_extent(3, 3, 4);
        assert!(first_lo >= 3.0 - 0.4 - 1e-9);
        assert!(last_hi <= 3.0 + 0.4 + 1e-9);
    }

    #[test]
    fn grouped_bars_do_not_overlap() {
        let l = grouped(0.2, 0.15);
        for k in 0..3 {
            let (_, hi) = l.bar_extent(0, k, 4);
            let (lo, _) = l.bar_extent(0, k + 1, 4);
            assert!(hi < lo, "bar {k} overlaps its neighbour");
        }
    }

    #[test]
    fn group_gap_shrinks_bar_width() {
        let (a0, a1) = grouped(0.2, 0.0).bar_extent(0, 1, 4);
        let (b0, b1) = grouped(0.2, 0.15).bar_extent(0, 1, 4);
        assert!((a1 - a0 - 0.2).abs() < 1e-9);
        assert!((b1 - b0 - 0.2 * 0.85).abs() < 1e-9);
        assert!(((a0 + a1) - (b0 + b1)).abs() < 1e-9, "shrinks around the same center");
    }

    #[test]
    fn overlay_bars_share_the_slot() {
        let l = Layout { bar_mode: BarMode::Overlay, ..grouped(0.2, 0.0) };
        assert_eq!(l.bar_extent(2, 0, 3), l.bar_extent(2, 2, 3));
    }
}
