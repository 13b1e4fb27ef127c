// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, colors, paddings).

use serde::Serialize;
use skia_safe as skia;

use crate::error::{ChartError, Result};

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(80, 40, 96, 72)
    }
}

/// Straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional, case-insensitive).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        let bad = || ChartError::InvalidColor(hex.to_string());
        if !(digits.len() == 6 || digits.len() == 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| bad());
        let a = if digits.len() == 8 { byte(6)? } else { 255 };
        Ok(Self { r: byte(0)?, g: byte(2)?, b: byte(4)?, a })
    }

    /// Parse a whole palette, failing on the first bad entry.
    pub fn palette(hexes: &[&str]) -> Result<Vec<Self>> {
        hexes.iter().map(|h| Self::from_hex(h)).collect()
    }

    pub fn to_skia(self) -> skia::Color {
        skia::Color::from_argb(self.a, self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_brand_hex() {
        let c = Color::from_hex("#1FB8CD").unwrap();
        assert_eq!(c, Color::rgb(0x1f, 0xb8, 0xcd));
        let c = Color::from_hex("b4413c80").unwrap();
        assert_eq!(c, Color::rgba(0xb4, 0x41, 0x3c, 0x80));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#GG0000").is_err());
        assert!(Color::from_hex("#ééé").is_err());
        // from_str_radix alone would take the sign
        assert!(Color::from_hex("#+f+f+f").is_err());
    }

    #[test]
    fn palette_reports_first_bad_entry() {
        match Color::palette(&["#FFFFFF", "nope"]) {
            Err(ChartError::InvalidColor(s)) => assert_eq!(s, "nope"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
