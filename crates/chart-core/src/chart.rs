// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use serde::Serialize;
use skia_safe as skia;

use crate::axis::{Axis, ScaleKind};
use crate::error::{ChartError, Result};
use crate::geometry::{rect_between, RectF};
use crate::grid::nice_ticks;
use crate::layout::{Layout, Orientation};
use crate::scale::LinearScale;
use crate::series::{Dash, Fill, Series, SeriesType};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Color, Insets, HEIGHT, WIDTH};

const TITLE_SIZE: f32 = 17.0;
const AXIS_TITLE_SIZE: f32 = 14.0;
const TICK_PAD: f32 = 8.0;
const LEGEND_SWATCH: f32 = 14.0;
const LEGEND_SPACING: f32 = 24.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw titles, tick labels, legend text and point text.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub layout: Layout,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            layout: Layout::default(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Number of bar series; they share each category slot in group mode.
    pub fn bar_count(&self) -> usize {
        self.series.iter().filter(|s| s.series_type == SeriesType::Bar).count()
    }

    /// Fit linear axes to the data, padding each side by `margin` times the span.
    /// Category axes keep their range. Bars always include the zero baseline.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let mut x = (f64::INFINITY, f64::NEG_INFINITY);
        let mut y = (f64::INFINITY, f64::NEG_INFINITY);
        let grow = |r: &mut (f64, f64), v: f64| {
            if v.is_finite() {
                r.0 = r.0.min(v);
                r.1 = r.1.max(v);
            }
        };
        for s in &self.series {
            match s.series_type {
                SeriesType::Scatter => {
                    for &(px, py) in &s.data_xy {
                        grow(&mut x, px);
                        grow(&mut y, py);
                    }
                }
                SeriesType::Bar => {
                    for (i, &v) in s.values.iter().enumerate() {
                        grow(&mut x, i as f64);
                        grow(&mut y, v);
                    }
                    if !s.values.is_empty() { grow(&mut y, 0.0); }
                }
            }
        }
        for (axis, (lo, hi)) in [(&mut self.x_axis, x), (&mut self.y_axis, y)] {
            if axis.kind == ScaleKind::Category || !lo.is_finite() || !hi.is_finite() {
                continue;
            }
            let hi = if (hi - lo).abs() < 1e-9 { lo + 1.0 } else { hi };
            let pad = (hi - lo) * margin.max(0.0);
            axis.min = lo - pad;
            axis.max = hi + pad;
        }
    }

    /// Stable pretty JSON of the complete chart specification.
    pub fn to_spec_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Render the chart and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.paint(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart into an unpremultiplied RGBA8 buffer.
    /// Returns `(pixels, width, height, row_stride_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.paint(opts)?;
        let (w, h) = (opts.width.max(1), opts.height.max(1));
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((px, w as u32, h as u32, stride))
    }

    fn paint(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let (w, h) = (opts.width.max(1), opts.height.max(1));
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(ChartError::Surface { width: w, height: h })?;
        let canvas = surface.canvas();
        let theme = &opts.theme;
        let shaper = TextShaper::new();

        canvas.clear(theme.background.to_skia());

        let plot = self.plot_area(opts, &shaper);
        let sx = LinearScale::for_x(&self.x_axis, plot.left, plot.right);
        let sy = LinearScale::for_y(&self.y_axis, plot.top, plot.bottom);

        let mut bg = fill_paint(self.layout.plot_background.unwrap_or(theme.plot_background));
        bg.set_anti_alias(false);
        canvas.draw_rect(plot.to_skia(), &bg);

        draw_grid(canvas, &plot, &sx, &sy, &self.x_axis, &self.y_axis, theme);

        let n_bars = self.bar_count();
        let mut bar_index = 0;
        for s in &self.series {
            match s.series_type {
                SeriesType::Bar => {
                    draw_bar_series(canvas, &sx, &sy, &self.x_axis, &self.layout, s, bar_index, n_bars);
                    bar_index += 1;
                }
                SeriesType::Scatter => {
                    let text = opts.draw_labels.then_some(&shaper);
                    draw_scatter_series(canvas, &sx, &sy, s, text, theme);
                }
            }
        }

        if opts.draw_labels {
            let label_extent = draw_tick_labels(canvas, &shaper, &plot, &sx, &sy, &self.x_axis, &self.y_axis, theme);
            draw_axis_titles(canvas, &shaper, &plot, label_extent, &self.x_axis, &self.y_axis, theme);
            if let Some(title) = self.layout.title.as_deref().filter(|t| !t.is_empty()) {
                shaper.draw_left(canvas, title, opts.insets.left as f32, 28.0, TITLE_SIZE, theme.title.to_skia());
            }
        }
        if self.layout.legend.visible {
            draw_legend(canvas, &shaper, &plot, self, opts);
        }

        Ok(surface)
    }

    /// Plot rectangle after insets, shrunk at the bottom to fit rotated
    /// category labels.
    fn plot_area(&self, opts: &RenderOptions, shaper: &TextShaper) -> RectF {
        let ins = opts.insets;
        let mut bottom = opts.height as f32 - ins.bottom as f32;
        if opts.draw_labels && self.x_axis.show_tick_labels && self.x_axis.tick_angle != 0.0 {
            let extent = rotated_label_extent(shaper, &x_tick_labels(&self.x_axis), &self.x_axis);
            let line = self.x_axis.tick_font_size * 1.4;
            bottom -= (extent - line).max(0.0);
        }
        let top = ins.top as f32;
        RectF::from_ltrb(
            ins.left as f32,
            top,
            (opts.width - ins.right as i32) as f32,
            bottom.max(top + 1.0),
        )
    }
}

// ---- helpers ----------------------------------------------------------------

fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color.to_skia());
    paint
}

fn stroke_paint(color: Color, width: f32, dash: Dash) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color.to_skia());
    if dash == Dash::Dot {
        let w = width.max(1.0);
        paint.set_stroke_cap(skia::paint::Cap::Round);
        paint.set_path_effect(skia::PathEffect::dash(&[0.1, w * 2.5], 0.0));
    }
    paint
}

/// Labels along the x axis: category names, or formatted linear ticks.
fn x_tick_labels(axis: &Axis) -> Vec<(f64, String)> {
    match axis.kind {
        ScaleKind::Category => axis
            .categories
            .iter()
            .enumerate()
            .map(|(i, c)| (i as f64, c.clone()))
            .collect(),
        ScaleKind::Linear => nice_ticks(axis.min, axis.max, 8)
            .into_iter()
            .map(|t| (t, fmt_tick(t)))
            .collect(),
    }
}

fn fmt_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        let s = format!("{v:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Vertical room taken by the x tick labels once rotated.
fn rotated_label_extent(shaper: &TextShaper, labels: &[(f64, String)], axis: &Axis) -> f32 {
    let rad = axis.tick_angle.to_radians();
    labels
        .iter()
        .map(|(_, l)| {
            let (w, h) = shaper.measure(l, axis.tick_font_size);
            w * rad.sin().abs() + h * rad.cos().abs()
        })
        .fold(0.0, f32::max)
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectF,
    sx: &LinearScale,
    sy: &LinearScale,
    x: &Axis,
    y: &Axis,
    theme: &Theme,
) {
    let grid = stroke_paint(theme.grid, 1.0, Dash::Solid);
    if x.show_grid && x.kind == ScaleKind::Linear {
        for t in nice_ticks(x.min, x.max, 8) {
            let px = sx.to_px(t);
            canvas.draw_line((px, plot.top), (px, plot.bottom), &grid);
        }
    }
    if y.show_grid && y.kind == ScaleKind::Linear {
        for t in nice_ticks(y.min, y.max, 5) {
            let py = sy.to_px(t);
            canvas.draw_line((plot.left, py), (plot.right, py), &grid);
        }
    }

    let zero = stroke_paint(theme.zero_line, 2.0, Dash::Solid);
    if x.show_zero_line && x.kind == ScaleKind::Linear && x.contains(0.0) {
        let px = sx.to_px(0.0);
        canvas.draw_line((px, plot.top), (px, plot.bottom), &zero);
    }
    if y.show_zero_line && y.kind == ScaleKind::Linear && y.contains(0.0) {
        let py = sy.to_px(0.0);
        canvas.draw_line((plot.left, py), (plot.right, py), &zero);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_bar_series(
    canvas: &skia::Canvas,
    sx: &LinearScale,
    sy: &LinearScale,
    x_axis: &Axis,
    layout: &Layout,
    series: &Series,
    trace: usize,
    n_traces: usize,
) {
    let paint = fill_paint(series.color);
    let base = sy.to_px(0.0);
    for (i, (cat, &v)) in series.categories.iter().zip(&series.values).enumerate() {
        let slot = x_axis.categories.iter().position(|c| c == cat).unwrap_or(i);
        let (x0, x1) = layout.bar_extent(slot, trace, n_traces);
        let r = rect_between((sx.to_px(x0), base), (sx.to_px(x1), sy.to_px(v)));
        canvas.draw_rect(r.to_skia(), &paint);
    }
}

fn points_path(points: &[(f32, f32)], close: bool) -> skia::Path {
    let mut path = skia::Path::new();
    if let Some(&first) = points.first() {
        path.move_to(first);
        for &p in points.iter().skip(1) {
            path.line_to(p);
        }
        if close {
            path.close();
        }
    }
    path
}

fn draw_scatter_series(
    canvas: &skia::Canvas,
    sx: &LinearScale,
    sy: &LinearScale,
    series: &Series,
    shaper: Option<&TextShaper>,
    theme: &Theme,
) {
    if series.data_xy.is_empty() {
        return;
    }
    let pts: Vec<(f32, f32)> = series
        .data_xy
        .iter()
        .map(|&(x, y)| (sx.to_px(x), sy.to_px(y)))
        .collect();
    let line_color = series.line.map(|l| l.color).unwrap_or(series.color);

    if series.fill == Fill::ToSelf && pts.len() >= 3 {
        canvas.draw_path(&points_path(&pts, true), &fill_paint(line_color));
    }

    if series.mode.lines && pts.len() >= 2 {
        let (width, dash) = series.line.map(|l| (l.width, l.dash)).unwrap_or((2.0, Dash::Solid));
        let closed = series.fill == Fill::ToSelf;
        canvas.draw_path(&points_path(&pts, closed), &stroke_paint(line_color, width, dash));
    }

    if series.mode.markers {
        if let Some(m) = series.marker {
            let r = m.size * 0.5;
            let body = fill_paint(m.color);
            for &p in &pts {
                canvas.draw_circle(p, r, &body);
                if let Some((w, c)) = m.outline {
                    canvas.draw_circle(p, r, &stroke_paint(c, w, Dash::Solid));
                }
            }
        }
    }

    if let (true, Some(t), Some(shaper)) = (series.mode.text, &series.text, shaper) {
        let color = t.color.unwrap_or(theme.axis_label).to_skia();
        for &(x, y) in &pts {
            shaper.draw_centered(canvas, &t.text, x, y, t.size, color);
        }
    }
}

/// Draws tick labels; returns the vertical room used below the plot.
#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &RectF,
    sx: &LinearScale,
    sy: &LinearScale,
    x: &Axis,
    y: &Axis,
    theme: &Theme,
) -> f32 {
    let color = theme.tick.to_skia();
    if y.show_tick_labels {
        let labels: Vec<(f64, String)> = match y.kind {
            ScaleKind::Category => y.categories.iter().enumerate().map(|(i, c)| (i as f64, c.clone())).collect(),
            ScaleKind::Linear => nice_ticks(y.min, y.max, 5).into_iter().map(|t| (t, fmt_tick(t))).collect(),
        };
        for (v, label) in labels {
            shaper.draw_right(canvas, &label, plot.left - TICK_PAD, sy.to_px(v), y.tick_font_size, color);
        }
    }

    if !x.show_tick_labels {
        return 0.0;
    }
    let labels = x_tick_labels(x);
    if x.tick_angle == 0.0 {
        let line = x.tick_font_size * 1.4;
        for (v, label) in &labels {
            shaper.draw_centered(canvas, label, sx.to_px(*v), plot.bottom + TICK_PAD + line * 0.5, x.tick_font_size, color);
        }
        return TICK_PAD + line;
    }
    let rad = x.tick_angle.to_radians();
    for (v, label) in &labels {
        let (mut ox, mut oy) = (sx.to_px(*v), plot.bottom + TICK_PAD);
        if x.tick_angle < 0.0 {
            // counter-clockwise text must end at the tick, not start there
            let (w, _) = shaper.measure(label, x.tick_font_size);
            ox -= w * rad.cos();
            oy -= w * rad.sin();
        }
        shaper.draw_rotated(canvas, label, ox, oy, x.tick_angle, x.tick_font_size, color);
    }
    TICK_PAD + rotated_label_extent(shaper, &labels, x)
}

fn draw_axis_titles(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &RectF,
    label_extent: f32,
    x: &Axis,
    y: &Axis,
    theme: &Theme,
) {
    let color = theme.axis_label.to_skia();
    if !x.label.is_empty() {
        let cy = plot.bottom + label_extent + AXIS_TITLE_SIZE;
        shaper.draw_centered(canvas, &x.label, plot.center_x(), cy, AXIS_TITLE_SIZE, color);
    }
    if !y.label.is_empty() {
        let (w, _) = shaper.measure(&y.label, AXIS_TITLE_SIZE);
        let widest_tick = if y.show_tick_labels {
            nice_ticks(y.min, y.max, 5)
                .into_iter()
                .map(|t| shaper.measure(&fmt_tick(t), y.tick_font_size).0)
                .fold(0.0, f32::max)
        } else {
            0.0
        };
        let cx = plot.left - TICK_PAD - widest_tick - AXIS_TITLE_SIZE;
        shaper.draw_rotated(canvas, &y.label, cx, plot.center_y() + w * 0.5, -90.0, AXIS_TITLE_SIZE, color);
    }
}

fn draw_legend_swatch(canvas: &skia::Canvas, s: &Series, x: f32, cy: f32) {
    let color = s.legend_color();
    let half = LEGEND_SWATCH * 0.5;
    match s.series_type {
        SeriesType::Bar => {
            let r = RectF::from_ltrb(x, cy - half, x + LEGEND_SWATCH, cy + half);
            canvas.draw_rect(r.to_skia(), &fill_paint(color));
        }
        SeriesType::Scatter if s.mode.markers => {
            canvas.draw_circle((x + half, cy), half, &fill_paint(color));
        }
        SeriesType::Scatter => {
            let (w, dash) = s.line.map(|l| (l.width, l.dash)).unwrap_or((2.0, Dash::Solid));
            canvas.draw_line((x, cy), (x + LEGEND_SWATCH, cy), &stroke_paint(color, w, dash));
        }
    }
}

fn draw_legend(canvas: &skia::Canvas, shaper: &TextShaper, plot: &RectF, chart: &Chart, opts: &RenderOptions) {
    let legend = chart.layout.legend;
    let entries: Vec<&Series> = chart.series.iter().filter(|s| s.in_legend()).collect();
    if entries.is_empty() {
        return;
    }
    let color = opts.theme.axis_label.to_skia();
    let text_w = |s: &Series| -> f32 {
        if opts.draw_labels {
            shaper.measure(s.name.as_deref().unwrap_or_default(), legend.font_size).0
        } else {
            0.0
        }
    };
    let entry_w = |s: &Series| LEGEND_SWATCH + 6.0 + text_w(s);

    match legend.orientation {
        Orientation::Horizontal => {
            let total: f32 = entries.iter().map(|s| entry_w(*s)).sum::<f32>()
                + LEGEND_SPACING * (entries.len() - 1) as f32;
            let mut x = plot.center_x() - total * 0.5;
            let cy = plot.top - legend.font_size * 1.2;
            for s in entries {
                draw_legend_swatch(canvas, s, x, cy);
                if opts.draw_labels {
                    let name = s.name.as_deref().unwrap_or_default();
                    shaper.draw_left(canvas, name, x + LEGEND_SWATCH + 6.0, cy, legend.font_size, color);
                }
                x += entry_w(s) + LEGEND_SPACING;
            }
        }
        Orientation::Vertical => {
            let widest = entries.iter().map(|s| entry_w(*s)).fold(0.0, f32::max);
            let x = plot.right - widest - 8.0;
            let mut cy = plot.top + legend.font_size;
            for s in entries {
                draw_legend_swatch(canvas, s, x, cy);
                if opts.draw_labels {
                    let name = s.name.as_deref().unwrap_or_default();
                    shaper.draw_left(canvas, name, x + LEGEND_SWATCH + 6.0, cy, legend.font_size, color);
                }
                cy += legend.font_size * 1.6;
            }
        }
    }
}
