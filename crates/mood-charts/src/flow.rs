// File: crates/mood-charts/src/flow.rs
// Summary: Flow-diagram dataset (stages + directed edges) and its node-link chart.
// Notes:
// - Stages sit on one horizontal line at x = index, y = 0.
// - Forward edges get a right-pointing arrowhead before the target node;
//   the feedback edge (target left of source) gets a left-pointing one plus
//   a dotted half-sine arc so it reads apart from the straight forward path.

use chart_core::{
    linspace, Axis, Chart, Color, Fill, Layout, Legend, LineStyle, MarkerStyle, Mode, Series,
};

use crate::error::DatasetError;

pub const OUTPUT_FILE: &str = "mood_tracker_flow.png";
pub const TITLE: &str = "Mood Tracker Game Flow";

pub const PALETTE: [&str; 6] = ["#1FB8CD", "#FFC185", "#ECEBD5", "#5D878F", "#D2BA4C", "#B4413C"];

const NODE_Y: f64 = 0.0;
const NODE_SIZE: f32 = 60.0;
const NODE_OUTLINE: f32 = 2.0;
const ICON_SIZE: f32 = 24.0;
const LABEL_SIZE: f32 = 12.0;
const LABEL_DROP: f64 = 0.2;
const EDGE_WIDTH: f32 = 2.0;

// arrowhead offsets from the target node center, in data units
const ARROW_TIP: f64 = 0.15;
const ARROW_BASE: f64 = 0.3;
const ARROW_HALF_HEIGHT: f64 = 0.1;

const CURVE_AMPLITUDE: f64 = 0.5;
pub const CURVE_SAMPLES: usize = 50;

const X_PAD: f64 = 0.5;
const Y_RANGE: (f64, f64) = (-0.7, 1.2);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stage {
    pub name: String,
    pub description: String,
    pub icon: String,
}

impl Stage {
    fn new(name: &str, description: &str, icon: &str) -> Self {
        Self { name: name.into(), description: description.into(), icon: icon.into() }
    }
}

/// Directed connection between two stage positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

impl Edge {
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Points back toward an earlier stage.
    pub fn is_feedback(&self) -> bool {
        self.to < self.from
    }
}

#[derive(Clone, Debug)]
pub struct FlowDataset {
    pub stages: Vec<Stage>,
    pub edges: Vec<Edge>,
    pub palette: Vec<Color>,
}

impl FlowDataset {
    /// The compiled-in mood tracker pipeline.
    pub fn mood_tracker() -> Result<Self, DatasetError> {
        Ok(Self {
            stages: vec![
                Stage::new("User Input", "Mood select via emojis", "😊"),
                Stage::new("Game Mechanics", "Points & streaks", "🎮"),
                Stage::new("Data Storage", "localStorage", "💾"),
                Stage::new("Feedback Systems", "Achievements", "🏆"),
                Stage::new("Visualization", "Charts", "📊"),
                Stage::new("Analytics", "Insights", "🧠"),
            ],
            edges: vec![
                Edge::new(0, 1),
                Edge::new(1, 2),
                Edge::new(2, 3),
                Edge::new(2, 4),
                Edge::new(4, 5),
                Edge::new(5, 0),
            ],
            palette: Color::palette(&PALETTE)?,
        })
    }

    /// Every edge joins two distinct, existing stages; the palette is non-empty.
    pub fn validate(&self) -> Result<(), DatasetError> {
        let stages = self.stages.len();
        for e in &self.edges {
            if e.from >= stages || e.to >= stages {
                return Err(DatasetError::EdgeOutOfRange { from: e.from, to: e.to, stages });
            }
            if e.from == e.to {
                return Err(DatasetError::SelfLoop(e.from));
            }
        }
        if self.palette.is_empty() && stages > 0 {
            return Err(DatasetError::Palette { colors: 0, needed: 1 });
        }
        Ok(())
    }

    pub fn feedback_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| e.is_feedback())
    }

    /// Node x coordinate for a stage position (unit spacing).
    pub fn stage_x(index: usize) -> f64 {
        index as f64
    }
}

/// Filled triangle just short of the target node, pointing along the edge.
/// Points are (base top, tip, base bottom).
pub fn arrowhead(edge: &Edge) -> Vec<(f64, f64)> {
    let to = FlowDataset::stage_x(edge.to);
    let sign = if edge.is_feedback() { 1.0 } else { -1.0 };
    let base = to + sign * ARROW_BASE;
    let tip = to + sign * ARROW_TIP;
    vec![
        (base, NODE_Y + ARROW_HALF_HEIGHT),
        (tip, NODE_Y),
        (base, NODE_Y - ARROW_HALF_HEIGHT),
    ]
}

/// Half a sine period from the source node back to the target node,
/// rising `CURVE_AMPLITUDE` above the node line at its midpoint.
pub fn feedback_curve(edge: &Edge) -> Vec<(f64, f64)> {
    let from = FlowDataset::stage_x(edge.from);
    let to = FlowDataset::stage_x(edge.to);
    linspace(from, to, CURVE_SAMPLES)
        .into_iter()
        .map(|x| {
            let t = (x - to) / (from - to);
            (x, NODE_Y + CURVE_AMPLITUDE * (std::f64::consts::PI * t).sin())
        })
        .collect()
}

fn edge_line() -> LineStyle {
    LineStyle::solid(Color::GRAY, EDGE_WIDTH)
}

/// Node, label and edge traces laid out left to right with hidden axes.
pub fn build_chart(data: &FlowDataset) -> Result<Chart, DatasetError> {
    data.validate()?;

    let mut chart = Chart::new();
    for (i, stage) in data.stages.iter().enumerate() {
        let x = FlowDataset::stage_x(i);
        let marker = MarkerStyle {
            size: NODE_SIZE,
            color: data.palette[i % data.palette.len()],
            outline: Some((NODE_OUTLINE, Color::WHITE)),
        };
        chart.add_series(
            Series::scatter(Mode::MARKERS_TEXT, vec![(x, NODE_Y)])
                .with_name(stage.name.as_str())
                .with_marker(marker)
                .with_text(stage.icon.as_str(), ICON_SIZE),
        );
        chart.add_series(
            Series::scatter(Mode::TEXT, vec![(x, NODE_Y - LABEL_DROP)])
                .with_text(stage.name.as_str(), LABEL_SIZE)
                .hide_legend(),
        );
    }

    for edge in &data.edges {
        let (x0, x1) = (FlowDataset::stage_x(edge.from), FlowDataset::stage_x(edge.to));
        chart.add_series(
            Series::scatter(Mode::LINES, vec![(x0, NODE_Y), (x1, NODE_Y)])
                .with_line(edge_line())
                .hide_legend(),
        );
        chart.add_series(
            Series::scatter(Mode::LINES, arrowhead(edge))
                .with_line(edge_line())
                .with_fill(Fill::ToSelf)
                .hide_legend(),
        );
        if edge.is_feedback() {
            chart.add_series(
                Series::scatter(Mode::LINES, feedback_curve(edge))
                    .with_line(LineStyle::dotted(Color::GRAY, EDGE_WIDTH))
                    .hide_legend(),
            );
        }
    }

    chart.layout = Layout {
        title: Some(TITLE.to_string()),
        legend: Legend::horizontal_above(),
        plot_background: Some(Color::WHITE),
        ..Layout::default()
    };
    let n = data.stages.len() as f64;
    chart.x_axis = Axis::new("", -X_PAD, n - X_PAD).hidden();
    chart.y_axis = Axis::new("", Y_RANGE.0, Y_RANGE.1).hidden();
    Ok(chart)
}
