use crossterm::style::Stylize;
use om_theme::{Severity, Theme};

/// A horizontal fill bar for a 0 – 100 value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    pub filled:   usize,
    pub width:    usize,
    pub severity: Severity,
}

impl Bar {
    /// One cell per `100 / width` units of `value`, rounded, clamped to `width`.
    pub fn new(value: f64, width: usize) -> Self {
        Self {
            filled: filled_cells(value, width),
            width,
            severity: Severity::of(value),
        }
    }

    /// `|███⣿⣿|`, fill colored by severity.
    pub fn render(&self, theme: &Theme) -> String {
        let fill: String = std::iter::repeat(theme.filled).take(self.filled).collect();
        let rest: String = std::iter::repeat(theme.empty).take(self.width - self.filled).collect();
        let color = theme.color(self.severity).to_crossterm();
        format!("|{}{}|", fill.with(color), rest)
    }
}

fn filled_cells(value: f64, width: usize) -> usize {
    if width == 0 || !value.is_finite() {
        return 0;
    }
    // value / (100 / width), rearranged to avoid 100/width rounding error.
    let cells = (value * width as f64 / 100.0).round();
    cells.clamp(0.0, width as f64) as usize
}
