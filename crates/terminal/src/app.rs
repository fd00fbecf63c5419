use crate::display::Screen;
use om_config::MonitorConfig;
use om_core::{DashboardState, Result};
use om_renderer::{Layout, Renderer};
use om_system::{aggregate, aggregate::network_interval, MetricsProvider, Sampler};
use om_theme::Theme;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// The loop controller's state: everything that outlives a single cycle.
pub struct App<P: ?Sized> {
    sampler:  Sampler<P>,
    state:    DashboardState,
    renderer: Renderer,
    theme:    Theme,
    delay:    Duration,
}

impl<P: MetricsProvider + ?Sized + 'static> App<P> {
    pub fn new(provider: Arc<P>, config: &MonitorConfig) -> Self {
        Self {
            sampler:  Sampler::new(provider, config.global.provider_timeout()),
            state:    DashboardState::new(config.global.delay_ms),
            renderer: Renderer::new(config.global.style),
            theme:    Theme::from_config(&config.theme),
            delay:    Duration::from_millis(config.global.delay_ms),
        }
    }

    /// Pause between the end of one cycle and the start of the next.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Swap in a reloaded config.  History is kept.
    pub fn apply_config(&mut self, config: &MonitorConfig) {
        self.sampler.set_timeout(config.global.provider_timeout());
        self.renderer = Renderer::new(config.global.style);
        self.theme = Theme::from_config(&config.theme);
        self.delay = Duration::from_millis(config.global.delay_ms);
    }

    /// sample → aggregate → commit → trim → layout → render → draw.
    ///
    /// Provider failures never fail the cycle; terminal and render errors do.
    pub async fn cycle(&mut self, screen: &mut impl Screen) -> Result<()> {
        let started = Instant::now();

        let raw = self.sampler.sample().await;
        let sampled = started.elapsed();

        let snapshot = aggregate(&raw, self.state.network_interval_ms);
        if let Some(ms) = raw.network.as_deref().and_then(network_interval) {
            self.state.network_interval_ms = ms;
        }
        self.state.commit(&snapshot);

        let (columns, rows) = screen.size()?;
        let layout = Layout::compute(columns, rows);
        self.state.history.trim(layout.char_budget);

        let lines = self
            .renderer
            .render(&snapshot, &self.state.history, &layout, &self.theme)?;
        screen.draw(&lines)?;

        debug!(
            sample_ms = sampled.as_millis() as u64,
            total_ms = started.elapsed().as_millis() as u64,
            budget = layout.char_budget,
            "cycle complete"
        );
        Ok(())
    }
}
