// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use chart_core::{Axis, Chart, Color, LineStyle, Mode, RenderOptions, Series};

fn small_chart() -> Chart {
    let mut chart = Chart::new();
    chart.x_axis = Axis::categorical("Mechanic", vec!["A".into(), "B".into(), "C".into()]);
    chart.y_axis = Axis::new("Score", 0.0, 10.0);
    chart.add_series(
        Series::try_bar("One", vec!["A".into(), "B".into(), "C".into()], vec![3.0, 7.0, 5.0])
            .expect("matching lengths")
            .with_color(Color::rgb(0x1f, 0xb8, 0xcd)),
    );
    chart.add_series(
        Series::scatter(Mode::LINES, vec![(0.0, 1.0), (1.0, 4.0), (2.0, 9.0)])
            .with_line(LineStyle::dotted(Color::GRAY, 2.0))
            .with_name("Trend"),
    );
    chart
}

#[test]
fn render_smoke_png() {
    let chart = small_chart();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/nested/smoke.png");
    let _ = std::fs::remove_file(&out);

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn spec_json_is_stable() {
    let a = small_chart().to_spec_json().expect("spec json");
    let b = small_chart().to_spec_json().expect("spec json");
    assert_eq!(a, b);
    assert!(a.contains("\"series_type\": \"Bar\""));
    assert!(a.contains("\"dash\": \"Dot\""));
}
