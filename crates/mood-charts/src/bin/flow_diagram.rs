// File: crates/mood-charts/src/bin/flow_diagram.rs
// Summary: Renders the mood tracker pipeline as a node-link flow diagram PNG.

use anyhow::{Context, Result};
use chart_core::RenderOptions;
use mood_charts::flow::{self, FlowDataset};

fn main() -> Result<()> {
    let data = FlowDataset::mood_tracker()?;
    println!(
        "Loaded {} stages, {} connections ({} feedback)",
        data.stages.len(),
        data.edges.len(),
        data.feedback_edges().count()
    );

    let chart = flow::build_chart(&data).context("building flow diagram")?;

    let out = mood_charts::output_path(flow::OUTPUT_FILE);
    chart
        .render_to_png(&RenderOptions::default(), &out)
        .with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}
