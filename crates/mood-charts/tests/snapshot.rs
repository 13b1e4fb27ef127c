// File: crates/mood-charts/tests/snapshot.rs
// Purpose: Render both mood tracker charts; golden pixel snapshots with bless flow.
// Behavior:
// - If env UPDATE_SNAPSHOTS=1, (re)writes tests/__snapshots__/<name>.png.
// - Else, if the snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and skips.

use chart_core::{Chart, RenderOptions};
use mood_charts::benefits::{self, BenefitDataset};
use mood_charts::flow::{self, FlowDataset};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn unlabeled_png(chart: &Chart) -> Vec<u8> {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // text shaping differs across platforms
    chart.render_to_png_bytes(&opts).expect("render bytes")
}

fn benefit_chart() -> Chart {
    benefits::build_chart(&BenefitDataset::mood_tracker().expect("dataset")).expect("chart")
}

fn flow_chart() -> Chart {
    flow::build_chart(&FlowDataset::mood_tracker().expect("dataset")).expect("chart")
}

#[test]
fn golden_benefit_bars() {
    write_or_compare("benefits.png", &unlabeled_png(&benefit_chart()));
}

#[test]
fn golden_flow_diagram() {
    write_or_compare("flow.png", &unlabeled_png(&flow_chart()));
}

#[test]
fn labeled_renders_write_png_files() {
    let dir = std::path::PathBuf::from("target/test_out");
    for (chart, file) in [(benefit_chart(), benefits::OUTPUT_FILE), (flow_chart(), flow::OUTPUT_FILE)] {
        let out = dir.join(file);
        chart.render_to_png(&RenderOptions::default(), &out).expect("render should succeed");
        let bytes = std::fs::read(&out).expect("output exists");
        assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
        let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
        assert_eq!((img.width(), img.height()), (1024, 640));
    }
}

#[test]
fn unlabeled_renders_are_deterministic() {
    let a = benefit_chart().render_to_rgba8(&RenderOptions { draw_labels: false, ..RenderOptions::default() });
    let b = benefit_chart().render_to_rgba8(&RenderOptions { draw_labels: false, ..RenderOptions::default() });
    assert_eq!(a.expect("first").0, b.expect("second").0);
}
