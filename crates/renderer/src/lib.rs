//! Frame composition for the dashboard.
//!
//! A frame is a list of lines: banner, device, uptime, one line per metric
//! and known GPU, then the process table.  Metric lines are drawn by the
//! [`MetricView`] chosen from the configured [`Style`].

pub mod labels;
pub mod layout;
pub mod strategy;

pub use labels::{Labels, EN};
pub use layout::Layout;
pub use strategy::{GraphView, MetricView, ProgressView, Unit};

use om_config::Style;
use om_core::{MetricHistory, ProcessRow, Result, SeriesId, Snapshot};
use om_theme::Theme;
use om_widgets::{banner_lines, fit, format_duration, Table};
use std::fmt::Write;

/// Turns a snapshot plus history into the lines of one frame.
pub struct Renderer {
    view:   Box<dyn MetricView>,
    labels: &'static Labels,
}

impl Renderer {
    pub fn new(style: Style) -> Self {
        Self {
            view: strategy::view_for(style),
            labels: &EN,
        }
    }

    pub fn render(
        &self,
        snapshot: &Snapshot,
        history: &MetricHistory,
        layout: &Layout,
        theme: &Theme,
    ) -> Result<Vec<String>> {
        let l = self.labels;
        let budget = layout.char_budget;
        let mut lines: Vec<String> = banner_lines().map(str::to_string).collect();

        lines.push(fit(snapshot.device_name.as_deref().unwrap_or(l.unknown), budget));
        let uptime = snapshot.uptime_secs.map_or_else(|| l.unknown.to_string(), format_duration);
        self.row(&mut lines, l.uptime, &uptime, budget)?;

        let scalars = [
            (l.memory, SeriesId::Memory, Unit::Percent),
            (l.swap, SeriesId::Swap, Unit::Percent),
            (l.cpu, SeriesId::Cpu, Unit::Percent),
            (l.temperature, SeriesId::Temperature, Unit::Degrees),
        ];
        for (label, id, unit) in scalars {
            let text = self.metric(snapshot.value(id), history, id, unit, budget, theme);
            self.row(&mut lines, label, &text, budget)?;
        }

        lines.push(String::new());
        for (gpu, series) in history.gpus().iter() {
            let text = match snapshot.gpu_usage(gpu) {
                Some(v) => self.view.render(v, series, Unit::Percent, budget, theme),
                None => l.gpu_unknown.to_string(),
            };
            self.row(&mut lines, gpu, &text, budget)?;
        }
        lines.push(String::new());

        for (label, id) in [(l.net_down, SeriesId::NetworkDown), (l.net_up, SeriesId::NetworkUp)] {
            let text = self.metric(snapshot.value(id), history, id, Unit::MegabytesPerSec, budget, theme);
            self.row(&mut lines, label, &text, budget)?;
        }

        lines.push(String::new());
        if layout.process_rows == 0 {
            lines.push(l.no_processes.to_string());
        } else {
            match &snapshot.processes {
                Some(rows) => lines.extend(self.process_table(rows, layout)),
                None => lines.push(l.unknown.to_string()),
            }
        }

        Ok(lines)
    }

    /// A blank spacer line, then `label value`.
    fn row(&self, lines: &mut Vec<String>, label: &str, value: &str, budget: usize) -> Result<()> {
        lines.push(String::new());
        let mut line = fit(label, budget);
        write!(line, " {value}")?;
        lines.push(line);
        Ok(())
    }

    fn metric(
        &self,
        value: Option<f64>,
        history: &MetricHistory,
        id: SeriesId,
        unit: Unit,
        budget: usize,
        theme: &Theme,
    ) -> String {
        match value {
            Some(v) => self.view.render(v, history.series(id), unit, budget, theme),
            None => self.labels.unknown.to_string(),
        }
    }

    fn process_table(&self, rows: &[ProcessRow], layout: &Layout) -> Vec<String> {
        let l = self.labels;
        let mut table = Table::new(layout.table_widths());
        table.push_row([l.col_name, l.col_cpu, l.col_memory, l.col_command]);
        for p in rows.iter().take(layout.process_rows) {
            table.push_row([
                p.name.clone(),
                percent_cell(p.cpu),
                percent_cell(p.mem),
                p.command.clone(),
            ]);
        }
        table.lines()
    }
}

/// One decimal, never above 100.
fn percent_cell(value: f64) -> String {
    format!("{:.1}%", value.min(100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use om_core::{DashboardState, GpuReading};

    fn render(style: Style, state: &DashboardState, snap: &Snapshot, layout: Layout) -> Vec<String> {
        Renderer::new(style)
            .render(snap, &state.history, &layout, &Theme::default())
            .unwrap()
    }

    fn line_with<'a>(lines: &'a [String], needle: &str) -> &'a str {
        lines
            .iter()
            .find(|l| l.contains(needle))
            .unwrap_or_else(|| panic!("no line containing {needle:?} in {lines:#?}"))
    }

    fn snapshot_with_gpu(id: &str, usage: Option<f64>) -> Snapshot {
        Snapshot {
            memory: Some(75.0),
            gpus: Some(vec![GpuReading { id: id.into(), usage }]),
            processes: Some(vec![ProcessRow {
                name: "node".into(),
                cpu: 12.345,
                mem: 100.0,
                command: "/usr/bin/node index.js".into(),
            }]),
            ..Snapshot::default()
        }
    }

    #[test]
    fn gpu_row_at_ninety_columns() {
        let mut state = DashboardState::new(1000);
        let snap = snapshot_with_gpu("AMD Navi", Some(45.0));
        state.commit(&snap);

        let lines = render(Style::Progress, &state, &snap, Layout::compute(90, 40));
        let gpu = line_with(&lines, "AMD Navi");
        assert_eq!(gpu.matches('█').count(), 14);
        assert_eq!(gpu.matches('⣿').count(), 16);
        assert!(gpu.ends_with(" 45%"));
    }

    #[test]
    fn missing_gpu_renders_unknown_and_unseen_gpu_renders_nothing() {
        let mut state = DashboardState::new(1000);
        state.commit(&snapshot_with_gpu("AMD Navi", Some(45.0)));

        let next = snapshot_with_gpu("Intel Arc", Some(10.0));
        let lines = render(Style::Progress, &state, &next, Layout::compute(90, 40));

        assert!(line_with(&lines, "AMD Navi").ends_with(EN.gpu_unknown));
        assert!(!lines.iter().any(|l| l.contains("Intel Arc")));
    }

    #[test]
    fn failed_graphics_call_keeps_known_gpus() {
        let mut state = DashboardState::new(1000);
        state.commit(&snapshot_with_gpu("AMD Navi", Some(45.0)));

        let next = Snapshot { gpus: None, ..snapshot_with_gpu("AMD Navi", Some(45.0)) };
        state.commit(&next);
        let lines = render(Style::Graph, &state, &next, Layout::compute(90, 40));

        assert!(line_with(&lines, "AMD Navi").ends_with(EN.gpu_unknown));
        assert_eq!(state.history.gpus().get("AMD Navi").map(|s| s.len()), Some(1));
    }

    #[test]
    fn short_terminal_replaces_process_table() {
        let state = DashboardState::new(1000);
        let snap = snapshot_with_gpu("x", None);
        let lines = render(Style::Progress, &state, &snap, Layout::compute(90, 20));

        assert_eq!(lines.last().map(String::as_str), Some(EN.no_processes));
        assert!(!lines.iter().any(|l| l.contains("node")));
    }

    #[test]
    fn process_table_rows_are_formatted() {
        let state = DashboardState::new(1000);
        let snap = snapshot_with_gpu("x", None);
        let lines = render(Style::Progress, &state, &snap, Layout::compute(90, 40));

        let row = line_with(&lines, "node");
        assert!(row.contains("12.3%"), "{row}");
        assert!(row.contains("100.0%"), "{row}");
        assert!(lines.last().is_some_and(|l| l.starts_with('└')));
    }

    #[test]
    fn absent_metrics_render_unknown_in_both_styles() {
        for style in [Style::Progress, Style::Graph] {
            let lines = render(style, &DashboardState::new(1000), &Snapshot::default(), Layout::compute(90, 40));
            assert!(line_with(&lines, EN.cpu).ends_with(EN.unknown));
            assert!(line_with(&lines, EN.net_up).ends_with(EN.unknown));
            assert!(line_with(&lines, EN.uptime).ends_with(EN.unknown));
        }
    }

    #[test]
    fn frame_order_is_fixed() {
        let mut state = DashboardState::new(1000);
        let mut snap = snapshot_with_gpu("AMD Navi", Some(45.0));
        snap.device_name = Some("Arch Linux rolling".into());
        snap.uptime_secs = Some(3_600);
        state.commit(&snap);

        let lines = render(Style::Graph, &state, &snap, Layout::compute(90, 40));
        let pos = |needle: &str| lines.iter().position(|l| l.contains(needle)).unwrap();
        let order = [
            "Arch Linux", EN.uptime, EN.memory, EN.swap, EN.cpu, EN.temperature,
            "AMD Navi", EN.net_down, EN.net_up, EN.col_command,
        ];
        assert!(order.windows(2).all(|w| pos(w[0]) < pos(w[1])), "{lines:#?}");
        assert!(line_with(&lines, EN.uptime).ends_with("1:00:00"));
    }
}
