use crate::MetricsProvider;
use om_core::{RawSnapshot, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Fetches every raw data source once per cycle.
///
/// The seven provider calls run concurrently on the blocking pool and are
/// joined: the sample is complete once each call has settled.  A failed,
/// panicked or timed-out call leaves its field `None`; nothing is retried
/// until the next cycle.
pub struct Sampler<P: ?Sized> {
    provider: Arc<P>,
    timeout:  Option<Duration>,
}

impl<P: MetricsProvider + ?Sized + 'static> Sampler<P> {
    /// `timeout` bounds each provider call; `None` waits indefinitely.
    pub fn new(provider: Arc<P>, timeout: Option<Duration>) -> Self {
        Self { provider, timeout }
    }

    pub fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub async fn sample(&self) -> RawSnapshot {
        let (os, memory, load, temperature, graphics, processes, network) = tokio::join!(
            self.settle("os info", |p| p.os_info()),
            self.settle("memory", |p| p.memory()),
            self.settle("cpu load", |p| p.current_load()),
            self.settle("cpu temperature", |p| p.cpu_temperature()),
            self.settle("graphics", |p| p.graphics()),
            self.settle("processes", |p| p.processes()),
            self.settle("network", |p| p.network_stats()),
        );
        let uptime_secs = self.settle("uptime", |p| p.uptime_seconds()).await;

        RawSnapshot {
            os,
            memory,
            load,
            temperature,
            graphics,
            processes,
            network,
            uptime_secs,
        }
    }

    /// Run one provider call to completion, mapping every failure to `None`.
    async fn settle<T, F>(&self, source: &'static str, call: F) -> Option<T>
    where
        T: Send + 'static,
        F: FnOnce(&P) -> Result<T> + Send + 'static,
    {
        let provider = Arc::clone(&self.provider);
        let task = tokio::task::spawn_blocking(move || call(provider.as_ref()));

        let joined = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, task).await {
                Ok(joined) => joined,
                Err(_) => {
                    warn!(source, "provider call timed out after {limit:?}");
                    return None;
                }
            },
            None => task.await,
        };

        match joined {
            Ok(Ok(value)) => Some(value),
            Ok(Err(e)) => {
                warn!(source, "provider call failed: {e}");
                None
            }
            Err(e) => {
                warn!(source, "provider task did not complete: {e}");
                None
            }
        }
    }
}
