// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub plot_background: Color,
    pub grid: Color,
    pub zero_line: Color,
    pub axis_label: Color,
    pub tick: Color,
    pub title: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: Color::WHITE,
            plot_background: Color::rgb(0xe5, 0xec, 0xf6),
            grid: Color::WHITE,
            zero_line: Color::WHITE,
            axis_label: Color::rgb(0x2a, 0x3f, 0x5f),
            tick: Color::rgb(0x50, 0x5a, 0x6b),
            title: Color::rgb(0x2a, 0x3f, 0x5f),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::rgb(18, 18, 20),
            plot_background: Color::rgb(24, 24, 28),
            grid: Color::rgb(40, 40, 45),
            zero_line: Color::rgb(90, 90, 100),
            axis_label: Color::rgb(235, 235, 245),
            tick: Color::rgb(150, 150, 160),
            title: Color::rgb(235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}
