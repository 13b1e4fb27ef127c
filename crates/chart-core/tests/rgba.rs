// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chart_core::{Axis, Chart, Color, RenderOptions, Series};

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0).hidden();
    chart.y_axis = Axis::new("Y", 0.0, 4.0).hidden();
    chart.layout.plot_background = Some(Color::rgb(10, 200, 30));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Paper background (top-left) is the theme's white
    assert_eq!(pixel(&px, stride, 0, 0), [255, 255, 255, 255]);

    // Plot center takes the plot background override
    let (cx, cy) = (w as usize / 2, h as usize / 2);
    assert_eq!(pixel(&px, stride, cx, cy), [10, 200, 30, 255]);
}

#[test]
fn bars_paint_their_color() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::categorical("", vec!["only".into()]);
    chart.y_axis = Axis::new("", 0.0, 10.0).hidden();
    chart.layout.legend.visible = false;
    chart.add_series(
        Series::try_bar("s", vec!["only".into()], vec![10.0])
            .expect("bar")
            .with_color(Color::rgb(0xb4, 0x41, 0x3c)),
    );

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    // single full-height bar centered on the only category
    assert_eq!(pixel(&px, stride, w as usize / 2, h as usize / 2), [0xb4, 0x41, 0x3c, 255]);
}

#[test]
fn dark_theme_paints_dark_paper() {
    let chart = Chart::new();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.theme = chart_core::Theme::dark();
    let (px, _, _, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(pixel(&px, stride, 0, 0), [18, 18, 20, 255]);
}
