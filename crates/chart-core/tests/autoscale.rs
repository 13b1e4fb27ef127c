// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale over mixed series types.

use chart_core::{Axis, Chart, Mode, Series};

#[test]
fn autoscale_mixed_series() {
    let mut chart = Chart::new();

    // XY series
    chart.add_series(Series::scatter(Mode::LINES, vec![(0.0, 1.0), (5.0, 3.0)]));

    // Bars over two categories
    chart.add_series(Series::try_bar("b", vec!["a".into(), "b".into()], vec![6.0, 2.0]).unwrap());

    chart.autoscale_axes(0.0);

    // X spans 0..5 from the line vs 0..1 from bar slots
    assert!(chart.x_axis.min <= 0.0 + 1e-9);
    assert!(chart.x_axis.max >= 5.0 - 1e-9);

    // Bars pull the baseline down to zero and the top up to 6
    assert!(chart.y_axis.min <= 0.0 + 1e-9);
    assert!(chart.y_axis.max >= 6.0 - 1e-9);
}

#[test]
fn autoscale_keeps_category_range() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::categorical("m", vec!["a".into(), "b".into()]);
    chart.add_series(Series::try_bar("b", vec!["a".into(), "b".into()], vec![4.0, 8.0]).unwrap());

    chart.autoscale_axes(0.1);

    assert_eq!((chart.x_axis.min, chart.x_axis.max), (-0.5, 1.5));
    assert!((chart.y_axis.min - -0.8).abs() < 1e-9);
    assert!((chart.y_axis.max - 8.8).abs() < 1e-9);
}
