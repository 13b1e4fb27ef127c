// File: crates/mood-charts/src/benefits.rs
// Summary: Benefit-score dataset (mechanic x category) and its grouped bar chart.

use chart_core::{Axis, BarMode, Chart, Color, Layout, Legend, Series};
use indexmap::IndexMap;

use crate::error::DatasetError;

pub const OUTPUT_FILE: &str = "mood_tracker_benefits.png";
pub const TITLE: &str = "Game Mechanic Benefits Analysis";

/// Scores run from 0 to this value inclusive; the y axis is pinned to it.
pub const MAX_SCORE: u8 = 10;

pub const MECHANICS: [&str; 8] = [
    "Daily Checkins",
    "Point Systems",
    "Streak Track",
    "Achievement",
    "Progress Viz",
    "Social Feats",
    "Mini-Games",
    "Data Export",
];

/// Per-category scores, positionally aligned with `MECHANICS`.
pub const CATEGORIES: [(&str, [u8; 8]); 4] = [
    ("User Engage", [7, 8, 9, 8, 6, 9, 10, 4]),
    ("Habit Form", [9, 7, 10, 8, 5, 6, 7, 3]),
    ("Data Quality", [8, 6, 7, 5, 9, 4, 5, 10]),
    ("Retention", [6, 7, 9, 8, 7, 8, 9, 5]),
];

pub const PALETTE: [&str; 4] = ["#1FB8CD", "#FFC185", "#D2BA4C", "#B4413C"];

const BAR_GAP: f64 = 0.2;
const BAR_GROUP_GAP: f64 = 0.15;
const TICK_ANGLE: f32 = 90.0;
const TICK_FONT_SIZE: f32 = 10.0;

#[derive(Clone, Debug)]
pub struct BenefitDataset {
    pub mechanics: Vec<String>,
    /// Category name -> one score per mechanic, in insertion order.
    pub scores: IndexMap<String, Vec<u8>>,
    pub palette: Vec<Color>,
}

impl BenefitDataset {
    /// The compiled-in mood tracker table.
    pub fn mood_tracker() -> Result<Self, DatasetError> {
        Ok(Self {
            mechanics: MECHANICS.iter().map(|m| m.to_string()).collect(),
            scores: CATEGORIES
                .iter()
                .map(|(name, row)| (name.to_string(), row.to_vec()))
                .collect(),
            palette: Color::palette(&PALETTE)?,
        })
    }

    /// Every category has one score per mechanic, every score is within
    /// `0..=MAX_SCORE`, and there is a color for every category.
    pub fn validate(&self) -> Result<(), DatasetError> {
        for (category, row) in &self.scores {
            if row.len() != self.mechanics.len() {
                return Err(DatasetError::ScoreCount {
                    category: category.clone(),
                    got: row.len(),
                    expected: self.mechanics.len(),
                });
            }
            if let Some((i, &score)) = row.iter().enumerate().find(|&(_, &s)| s > MAX_SCORE) {
                return Err(DatasetError::ScoreRange {
                    category: category.clone(),
                    mechanic: self.mechanics[i].clone(),
                    score,
                    max: MAX_SCORE,
                });
            }
        }
        if self.palette.len() < self.scores.len() {
            return Err(DatasetError::Palette { colors: self.palette.len(), needed: self.scores.len() });
        }
        Ok(())
    }

    /// Category -> score for one mechanic, in category order.
    pub fn scores_for(&self, mechanic: &str) -> Option<IndexMap<&str, u8>> {
        let i = self.mechanics.iter().position(|m| m == mechanic)?;
        Some(
            self.scores
                .iter()
                .filter_map(|(cat, row)| row.get(i).map(|&s| (cat.as_str(), s)))
                .collect(),
        )
    }
}

/// One bar series per category over all mechanics, grouped per mechanic,
/// with a rotated category x axis and a 0..=10 y axis.
pub fn build_chart(data: &BenefitDataset) -> Result<Chart, DatasetError> {
    data.validate()?;

    let mut chart = Chart::new();
    for ((category, row), color) in data.scores.iter().zip(&data.palette) {
        let values = row.iter().map(|&s| f64::from(s)).collect();
        let series = Series::try_bar(category.as_str(), data.mechanics.clone(), values)?;
        chart.add_series(series.with_color(*color));
    }

    chart.layout = Layout {
        title: Some(TITLE.to_string()),
        bar_mode: BarMode::Group,
        bar_gap: BAR_GAP,
        bar_group_gap: BAR_GROUP_GAP,
        legend: Legend::horizontal_above(),
        plot_background: None,
    };
    chart.x_axis = Axis::categorical("Game Mechanics", data.mechanics.clone())
        .with_tick_angle(TICK_ANGLE)
        .with_tick_font_size(TICK_FONT_SIZE);
    chart.y_axis = Axis::new("Benefit Score", 0.0, f64::from(MAX_SCORE));
    Ok(chart)
}
