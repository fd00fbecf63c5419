use om_config::Style;
use om_core::MetricSeries;
use om_theme::Theme;
use om_widgets::{sparkline, Bar};

/// Unit a metric is displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Percent,
    Degrees,
    MegabytesPerSec,
}

impl Unit {
    /// `45` → `"45%"`, `1.25` MB/s → `"1.3 MB/s"`.
    pub fn format(self, value: f64) -> String {
        match self {
            Unit::Percent         => format!("{value}%"),
            Unit::Degrees         => format!("{value}°"),
            Unit::MegabytesPerSec => format!("{value:.1} MB/s"),
        }
    }
}

/// How one metric line is drawn.  Both strategies see the same data.
pub trait MetricView: Send + Sync {
    /// `value` is this cycle's reading; `series` already contains it.
    fn render(&self, value: f64, series: &MetricSeries, unit: Unit, budget: usize, theme: &Theme)
        -> String;
}

/// Fill bar of the current value: `|████⣿⣿| 45%`.
#[derive(Debug, Default)]
pub struct ProgressView;

impl MetricView for ProgressView {
    fn render(&self, value: f64, _series: &MetricSeries, unit: Unit, budget: usize, theme: &Theme)
        -> String {
        format!("{} {}", Bar::new(value, budget).render(theme), unit.format(value))
    }
}

/// Sparkline over the retained history: `▁▃▅█ 45% (60% peak)`.
#[derive(Debug, Default)]
pub struct GraphView;

impl MetricView for GraphView {
    fn render(&self, value: f64, series: &MetricSeries, unit: Unit, budget: usize, _theme: &Theme)
        -> String {
        let window: Vec<f64> = series.last_n(budget).collect();
        let peak = window.iter().copied().fold(value, f64::max);
        format!(
            "{} {} ({} peak)",
            sparkline(&window),
            unit.format(value),
            unit.format(peak)
        )
    }
}

pub fn view_for(style: Style) -> Box<dyn MetricView> {
    match style {
        Style::Progress => Box::new(ProgressView),
        Style::Graph    => Box::new(GraphView),
    }
}
