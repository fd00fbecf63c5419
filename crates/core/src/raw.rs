//! Raw data as returned by a metrics provider, before any aggregation.

/// Operating system identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OsInfo {
    pub distro:  String,
    pub release: String,
}

/// Memory and swap figures, all in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemoryInfo {
    pub available: u64,
    pub total:     u64,
    pub swap_free:  u64,
    pub swap_total: u64,
}

/// Load of one logical core (0.0 – 100.0).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CoreLoad {
    pub load: f64,
}

/// Per-core load figures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpuLoad {
    pub cpus: Vec<CoreLoad>,
}

/// Main CPU temperature in degrees Celsius.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CpuTemperature {
    pub main: f64,
}

/// One graphics controller.  Memory figures are in bytes and may be unknown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GpuController {
    pub vendor:       String,
    pub model:        String,
    pub memory_free:  Option<u64>,
    pub memory_total: Option<u64>,
}

impl GpuController {
    /// Stable identifier used to key the GPU's history series.
    pub fn id(&self) -> String {
        format!("{} {}", self.vendor, self.model)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graphics {
    pub controllers: Vec<GpuController>,
}

/// One process as reported by the provider.
///
/// `cpu` and `mem` are percentages of the whole machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessEntry {
    pub name:    String,
    pub cpu:     f64,
    pub mem:     f64,
    pub command: String,
    pub params:  String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessList {
    pub list: Vec<ProcessEntry>,
}

/// Throughput of one network interface.
///
/// `rx_sec` / `tx_sec` are bytes per second; `ms` is the length of the
/// measurement interval, `None` when the provider has no previous reading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkStat {
    pub iface:  String,
    pub rx_sec: f64,
    pub tx_sec: f64,
    pub ms:     Option<u64>,
}

/// Everything the sampler gathered in one cycle.  `None` = that call failed.
#[derive(Debug, Clone, Default)]
pub struct RawSnapshot {
    pub os:          Option<OsInfo>,
    pub memory:      Option<MemoryInfo>,
    pub load:        Option<CpuLoad>,
    pub temperature: Option<CpuTemperature>,
    pub graphics:    Option<Graphics>,
    pub processes:   Option<ProcessList>,
    pub network:     Option<Vec<NetworkStat>>,
    pub uptime_secs: Option<u64>,
}
