//! Host metrics: the provider seam, its `sysinfo`-backed implementation,
//! the per-cycle sampler and the aggregation rules.

pub mod aggregate;
pub mod cpu;
pub mod gpu;
pub mod memory;
pub mod network;
pub mod process;
pub mod sampler;

pub use aggregate::aggregate;
pub use sampler::Sampler;

use om_core::raw::{
    CpuLoad, CpuTemperature, Graphics, MemoryInfo, NetworkStat, OsInfo, ProcessList,
};
use om_core::{MonitorError, Result};
use network::NetworkMeter;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};
use sysinfo::{Components, System};

/// Source of raw host metrics.
///
/// Methods are blocking; the [`Sampler`] runs each one on the blocking pool
/// and treats any `Err` as "absent this cycle".
pub trait MetricsProvider: Send + Sync {
    fn os_info(&self) -> Result<OsInfo>;
    fn memory(&self) -> Result<MemoryInfo>;
    fn current_load(&self) -> Result<CpuLoad>;
    fn cpu_temperature(&self) -> Result<CpuTemperature>;
    fn graphics(&self) -> Result<Graphics>;
    fn processes(&self) -> Result<ProcessList>;
    fn network_stats(&self) -> Result<Vec<NetworkStat>>;
    fn uptime_seconds(&self) -> Result<u64>;
}

/// Default sysfs directory scanned for graphics cards.
const DRM_ROOT: &str = "/sys/class/drm";

/// [`MetricsProvider`] backed by `sysinfo`, plus the DRM sysfs tree for GPUs.
///
/// Each concern owns its own handle so concurrent calls don't queue on a
/// single lock.
pub struct SysinfoProvider {
    cpu:        Mutex<System>,
    memory:     Mutex<System>,
    processes:  Mutex<System>,
    components: Mutex<Components>,
    networks:   Mutex<NetworkMeter>,
    drm_root:   PathBuf,
}

impl SysinfoProvider {
    pub fn new() -> Self {
        let mut cpu = System::new();
        // CPU usage is a delta between two refreshes; take the first one now.
        cpu.refresh_cpu_usage();

        Self {
            cpu:        Mutex::new(cpu),
            memory:     Mutex::new(System::new()),
            processes:  Mutex::new(System::new()),
            components: Mutex::new(Components::new_with_refreshed_list()),
            networks:   Mutex::new(NetworkMeter::new()),
            drm_root:   PathBuf::from(DRM_ROOT),
        }
    }
}

impl Default for SysinfoProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<'a, T>(mutex: &'a Mutex<T>, what: &str) -> Result<MutexGuard<'a, T>> {
    mutex
        .lock()
        .map_err(|_| MonitorError::Provider(format!("{what} handle poisoned")))
}

impl MetricsProvider for SysinfoProvider {
    fn os_info(&self) -> Result<OsInfo> {
        let distro = System::name()
            .ok_or_else(|| MonitorError::Provider("OS name unavailable".into()))?;
        Ok(OsInfo {
            distro,
            release: System::os_version().unwrap_or_default(),
        })
    }

    fn memory(&self) -> Result<MemoryInfo> {
        memory::read(&mut *lock(&self.memory, "memory")?)
    }

    fn current_load(&self) -> Result<CpuLoad> {
        cpu::current_load(&mut *lock(&self.cpu, "cpu")?)
    }

    fn cpu_temperature(&self) -> Result<CpuTemperature> {
        cpu::temperature(&mut *lock(&self.components, "components")?)
    }

    fn graphics(&self) -> Result<Graphics> {
        gpu::read_controllers(&self.drm_root)
    }

    fn processes(&self) -> Result<ProcessList> {
        Ok(process::read(&mut *lock(&self.processes, "processes")?))
    }

    fn network_stats(&self) -> Result<Vec<NetworkStat>> {
        Ok(lock(&self.networks, "networks")?.stats())
    }

    fn uptime_seconds(&self) -> Result<u64> {
        Ok(System::uptime())
    }
}
