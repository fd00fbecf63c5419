//! Terminal front-end for `overmonitor`.
//!
//! Owns the loop controller and wires together:
//! - the sampler over [`SysinfoProvider`]
//! - the config file watcher (live reload between cycles)
//! - the Ctrl-C shutdown signal

pub mod app;
pub mod display;

pub use app::App;
pub use display::{Screen, Terminal};

use om_config::{default_path, load as load_config, ConfigWatcher, MonitorConfig};
use om_core::{Message, Result};
use om_renderer::EN;
use om_system::SysinfoProvider;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

// ── Entry point ───────────────────────────────────────────────────────────────

/// How long exit waits for provider calls still running on the blocking pool.
const SHUTDOWN_GRACE: Duration = Duration::from_millis(250);

/// Run the dashboard until Ctrl-C.  Returns early only on a terminal or
/// render error.
pub fn run() -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    run_to_exit(runtime, run_loop())
}

/// Drive `fut` to completion, then release the runtime without joining
/// provider calls the sampler gave up on.
fn run_to_exit<T>(runtime: Runtime, fut: impl Future<Output = T>) -> T {
    let out = runtime.block_on(fut);
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    out
}

async fn run_loop() -> Result<()> {
    let config_path = default_path();
    let config = load_or_default(&config_path);

    let mut terminal = Terminal::stdout();
    terminal.notice(EN.loading)?;

    let mut app = App::new(Arc::new(SysinfoProvider::new()), &config);
    let (watcher, mut reload_rx) = ConfigWatcher::spawn(&config_path);
    let mut shutdown_rx = spawn_shutdown_listener();

    loop {
        if let Err(e) = app.cycle(&mut terminal).await {
            error!("Cycle failed: {e}");
            return Err(e);
        }

        match idle(app.delay(), &mut reload_rx, &mut shutdown_rx).await {
            Message::Tick => {}
            Message::ConfigReloaded => match load_config(watcher.path()) {
                Ok(cfg) => {
                    info!("Config reloaded");
                    app.apply_config(&cfg);
                }
                Err(e) => warn!("Config reload failed: {e}"),
            },
            Message::Shutdown => {
                info!("Shutting down");
                return Ok(());
            }
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_or_default(path: &Path) -> MonitorConfig {
    load_config(path).unwrap_or_else(|e| {
        warn!("{e}; using defaults");
        MonitorConfig::default()
    })
}

/// Resolves once Ctrl-C is pressed, even if that happens mid-cycle.
fn spawn_shutdown_listener() -> mpsc::Receiver<()> {
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                let _ = tx.send(()).await;
            }
            Err(e) => warn!("Cannot listen for Ctrl-C: {e}"),
        }
    });
    rx
}

/// Wait out the inter-cycle delay, cut short by a config change or shutdown.
async fn idle(
    delay: Duration,
    reload_rx: &mut mpsc::Receiver<()>,
    shutdown_rx: &mut mpsc::Receiver<()>,
) -> Message {
    tokio::select! {
        Some(()) = shutdown_rx.recv() => Message::Shutdown,
        Some(()) = reload_rx.recv() => Message::ConfigReloaded,
        _ = tokio::time::sleep(delay) => Message::Tick,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use om_core::raw::*;
    use om_core::MonitorError;
    use om_system::{MetricsProvider, Sampler};

    #[tokio::test]
    async fn idle_ticks_after_delay() {
        let (_reload_tx, mut reload_rx) = mpsc::channel(1);
        let (_shutdown_tx, mut shutdown_rx) = mpsc::channel(1);
        let msg = idle(Duration::from_millis(10), &mut reload_rx, &mut shutdown_rx).await;
        assert_eq!(msg, Message::Tick);
    }

    #[tokio::test]
    async fn shutdown_interrupts_the_delay() {
        let (_reload_tx, mut reload_rx) = mpsc::channel(1);
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel(1);
        shutdown_tx.send(()).await.unwrap();
        let msg = idle(Duration::from_secs(3600), &mut reload_rx, &mut shutdown_rx).await;
        assert_eq!(msg, Message::Shutdown);
    }

    #[tokio::test]
    async fn reload_interrupts_the_delay() {
        let (reload_tx, mut reload_rx) = mpsc::channel(1);
        let (_shutdown_tx, mut shutdown_rx) = mpsc::channel(1);
        reload_tx.send(()).await.unwrap();
        let msg = idle(Duration::from_secs(3600), &mut reload_rx, &mut shutdown_rx).await;
        assert_eq!(msg, Message::ConfigReloaded);
    }

    struct StuckLoad;

    impl MetricsProvider for StuckLoad {
        fn os_info(&self) -> Result<OsInfo> {
            Err(MonitorError::Provider("unused".into()))
        }
        fn memory(&self) -> Result<MemoryInfo> {
            Err(MonitorError::Provider("unused".into()))
        }
        fn current_load(&self) -> Result<CpuLoad> {
            std::thread::sleep(Duration::from_secs(4));
            Err(MonitorError::Provider("too late".into()))
        }
        fn cpu_temperature(&self) -> Result<CpuTemperature> {
            Err(MonitorError::Provider("unused".into()))
        }
        fn graphics(&self) -> Result<Graphics> {
            Err(MonitorError::Provider("unused".into()))
        }
        fn processes(&self) -> Result<ProcessList> {
            Err(MonitorError::Provider("unused".into()))
        }
        fn network_stats(&self) -> Result<Vec<NetworkStat>> {
            Err(MonitorError::Provider("unused".into()))
        }
        fn uptime_seconds(&self) -> Result<u64> {
            Err(MonitorError::Provider("unused".into()))
        }
    }

    #[test]
    fn exit_does_not_wait_for_abandoned_provider_calls() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .unwrap();
        let sampler = Sampler::new(Arc::new(StuckLoad), Some(Duration::from_millis(50)));

        let started = std::time::Instant::now();
        let raw = run_to_exit(runtime, async move { sampler.sample().await });

        assert!(raw.load.is_none());
        assert!(started.elapsed() < Duration::from_secs(2), "exit took {:?}", started.elapsed());
    }

    #[tokio::test]
    async fn closed_watcher_still_ticks() {
        let (reload_tx, mut reload_rx) = mpsc::channel::<()>(1);
        drop(reload_tx);
        let (_shutdown_tx, mut shutdown_rx) = mpsc::channel(1);
        let msg = idle(Duration::from_millis(10), &mut reload_rx, &mut shutdown_rx).await;
        assert_eq!(msg, Message::Tick);
    }
}
