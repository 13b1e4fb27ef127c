// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

/// `steps` evenly spaced samples from `start` to `end`, both inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps)
        .map(|i| if i + 1 == steps { end } else { start + step * i as f64 })
        .collect()
}

/// Round tick values (1, 2 or 5 times a power of ten) inside `[min, max]`,
/// aiming for about `target` ticks.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let span = hi - lo;
    if !span.is_finite() || span <= 0.0 || target == 0 {
        return vec![lo];
    }
    let raw = span / target as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * mag)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * mag);
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last)
        .map(|k| k as f64 * step)
        // snap -0.0 and float dust so labels print cleanly
        .map(|v| if v.abs() < step * 1e-9 { 0.0 } else { (v / step).round() * step })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_ends() {
        let v = linspace(5.0, 0.0, 50);
        assert_eq!(v.len(), 50);
        assert_eq!(v[0], 5.0);
        assert_eq!(v[49], 0.0);
    }

    #[test]
    fn ticks_for_score_axis() {
        assert_eq!(nice_ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn ticks_skip_values_outside_range() {
        let t = nice_ticks(-0.7, 1.2, 4);
        assert_eq!(t, vec![-0.5, 0.0, 0.5, 1.0]);
    }
}
