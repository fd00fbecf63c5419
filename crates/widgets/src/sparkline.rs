const TICKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// One tick per value, scaled against the largest value in the window.
pub fn sparkline(values: &[f64]) -> String {
    let peak = values.iter().copied().filter(|v| v.is_finite()).fold(0.0, f64::max);
    values
        .iter()
        .map(|&v| {
            if peak <= 0.0 || !v.is_finite() {
                return TICKS[0];
            }
            let level = (v.max(0.0) / peak * (TICKS.len() - 1) as f64).round() as usize;
            TICKS[level.min(TICKS.len() - 1)]
        })
        .collect()
}
