// File: crates/mood-charts/src/bin/benefit_chart.rs
// Summary: Renders the game-mechanic benefit scores as a grouped bar chart PNG.

use anyhow::{Context, Result};
use chart_core::RenderOptions;
use mood_charts::benefits::{self, BenefitDataset};

fn main() -> Result<()> {
    let data = BenefitDataset::mood_tracker()?;
    println!(
        "Loaded {} mechanics x {} categories",
        data.mechanics.len(),
        data.scores.len()
    );

    let chart = benefits::build_chart(&data).context("building benefit chart")?;

    let out = mood_charts::output_path(benefits::OUTPUT_FILE);
    chart
        .render_to_png(&RenderOptions::default(), &out)
        .with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}
