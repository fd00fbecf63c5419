use crate::history::{MetricHistory, SeriesId};

/// One row of the process table, after coalescing by name.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessRow {
    pub name:    String,
    /// Summed CPU usage, clamped to 100.
    pub cpu:     f64,
    /// Summed memory usage, clamped to 100.
    pub mem:     f64,
    pub command: String,
}

/// Usage of one GPU this cycle.  `usage` is `None` when the controller
/// reported no memory figures.
#[derive(Debug, Clone, PartialEq)]
pub struct GpuReading {
    pub id:    String,
    pub usage: Option<f64>,
}

/// Derived values for one cycle.  `None` = unknown this cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// `"{distro} {release}"`.
    pub device_name: Option<String>,
    pub uptime_secs: Option<u64>,
    pub memory:      Option<f64>,
    pub swap:        Option<f64>,
    pub cpu:         Option<f64>,
    pub temperature: Option<f64>,
    /// MB/s, rounded to one decimal.
    pub net_down:    Option<f64>,
    pub net_up:      Option<f64>,
    /// `None` when the process list could not be read.
    pub processes:   Option<Vec<ProcessRow>>,
    /// `None` when the controller list could not be read at all.
    pub gpus:        Option<Vec<GpuReading>>,
}

impl Snapshot {
    /// Current value of a scalar series.
    pub fn value(&self, id: SeriesId) -> Option<f64> {
        match id {
            SeriesId::Memory      => self.memory,
            SeriesId::Swap        => self.swap,
            SeriesId::Cpu         => self.cpu,
            SeriesId::Temperature => self.temperature,
            SeriesId::NetworkDown => self.net_down,
            SeriesId::NetworkUp   => self.net_up,
        }
    }

    /// This cycle's reading for a known GPU; `None` if missing or unreadable.
    pub fn gpu_usage(&self, id: &str) -> Option<f64> {
        self.gpus
            .as_ref()?
            .iter()
            .find(|g| g.id == id)
            .and_then(|g| g.usage)
    }
}

/// Process-wide dashboard state, owned by the loop controller.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub history: MetricHistory,
    /// Length of the last network measurement interval, in milliseconds.
    pub network_interval_ms: u64,
}

impl DashboardState {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            history: MetricHistory::new(),
            network_interval_ms: delay_ms,
        }
    }

    /// Commit this cycle's scalars and GPU readings into the histories.
    /// Absent values are skipped.
    pub fn commit(&mut self, snapshot: &Snapshot) {
        for id in SeriesId::ALL {
            if let Some(v) = snapshot.value(id) {
                self.history.append(id, v);
            }
        }
        if let Some(gpus) = &snapshot.gpus {
            for gpu in gpus {
                self.history.observe_gpu(&gpu.id, gpu.usage);
            }
        }
    }
}
