// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for the X and Y axes.

use crate::axis::Axis;

/// Maps a data interval onto a pixel interval. The pixel interval may be
/// reversed (Y grows downward on screen), so `px1 < px0` is allowed.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub px0: f32,
    pub px1: f32,
}

impl LinearScale {
    pub fn new(d0: f64, d1: f64, px0: f32, px1: f32) -> Self {
        let mut s = Self { d0, d1, px0, px1 };
        if (s.d1 - s.d0).abs() < 1e-12 { s.d1 = s.d0 + 1.0; }
        s
    }

    /// Horizontal scale for `axis` across `[left, right]` pixels.
    pub fn for_x(axis: &Axis, left: f32, right: f32) -> Self {
        Self::new(axis.min, axis.max, left, right)
    }

    /// Vertical scale for `axis`; `axis.min` lands on `bottom`.
    pub fn for_y(axis: &Axis, top: f32, bottom: f32) -> Self {
        Self::new(axis.min, axis.max, bottom, top)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.d0) / (self.d1 - self.d0);
        self.px0 + t as f32 * (self.px1 - self.px0)
    }
}
