//! Per-cycle aggregation: raw provider data → display-ready [`Snapshot`].

use om_core::raw::{CpuLoad, MemoryInfo, NetworkStat, ProcessEntry};
use om_core::{GpuReading, ProcessRow, RawSnapshot, Snapshot};
use std::collections::HashMap;

/// Summed core loads are divided by this constant, not by the core count.
/// The dashboard was tuned on an 8-core host and keeps that scale.
pub const CPU_DIVISOR: f64 = 8.0;

const MIB: f64 = 1024.0 * 1024.0;

/// Derive this cycle's [`Snapshot`].  `previous_interval_ms` stands in for
/// any interface that reports no measurement interval of its own.
pub fn aggregate(raw: &RawSnapshot, previous_interval_ms: u64) -> Snapshot {
    let (memory, swap) = match raw.memory {
        Some(m) => memory_percentages(&m),
        None => (None, None),
    };

    let (net_down, net_up) = match &raw.network {
        Some(stats) => {
            let (down, up) = network_totals(stats, previous_interval_ms);
            (Some(down), Some(up))
        }
        None => (None, None),
    };

    Snapshot {
        device_name: raw.os.as_ref().map(|os| format!("{} {}", os.distro, os.release).trim().to_string()),
        uptime_secs: raw.uptime_secs,
        memory,
        swap,
        cpu: raw.load.as_ref().map(cpu_percent),
        temperature: raw.temperature.map(|t| round1(t.main)),
        net_down,
        net_up,
        processes: raw.processes.as_ref().map(|p| coalesce_processes(&p.list)),
        gpus: raw.graphics.as_ref().map(|g| {
            g.controllers
                .iter()
                .map(|c| GpuReading {
                    id: c.id(),
                    usage: c.memory_free.zip(c.memory_total).and_then(|(f, t)| used_percent(f, t)),
                })
                .collect()
        }),
    }
}

/// `round(100 − free/total·100)`, clamped to `[0, 100]`.  `None` when `total` is 0.
pub fn used_percent(free: u64, total: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    let used = 100.0 - free as f64 / total as f64 * 100.0;
    Some(clamp_percent(used.round()))
}

fn memory_percentages(m: &MemoryInfo) -> (Option<f64>, Option<f64>) {
    (
        used_percent(m.available, m.total),
        used_percent(m.swap_free, m.swap_total),
    )
}

/// `round(Σ load / 8)`, clamped to 100.
pub fn cpu_percent(load: &CpuLoad) -> f64 {
    let sum: f64 = load.cpus.iter().map(|c| c.load / CPU_DIVISOR).sum();
    clamp_percent(sum.round())
}

/// Merge entries sharing a name, hottest first.
///
/// The raw list is sorted once by CPU (descending, stable), then folded in
/// that order: the first entry of each name fixes the row position and
/// command, later ones add their CPU and memory.
pub fn coalesce_processes(list: &[ProcessEntry]) -> Vec<ProcessRow> {
    let mut sorted: Vec<&ProcessEntry> = list.iter().collect();
    sorted.sort_by(|a, b| b.cpu.total_cmp(&a.cpu));

    let mut rows: Vec<ProcessRow> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for p in sorted {
        match index.get(p.name.as_str()) {
            Some(&i) => {
                rows[i].cpu += p.cpu;
                rows[i].mem += p.mem;
            }
            None => {
                index.insert(p.name.as_str(), rows.len());
                rows.push(ProcessRow {
                    name:    p.name.clone(),
                    cpu:     p.cpu,
                    mem:     p.mem,
                    command: format!("{} {}", p.command, p.params).trim().to_string(),
                });
            }
        }
    }

    for row in &mut rows {
        row.cpu = clamp_percent(row.cpu);
        row.mem = clamp_percent(row.mem);
    }
    rows
}

/// MB/s for one interface: `bytes_per_sec / (1000 / interval_ms) / 1 MiB`.
pub fn network_rate(bytes_per_sec: f64, interval_ms: u64) -> f64 {
    if interval_ms == 0 {
        return 0.0;
    }
    bytes_per_sec / (1000.0 / interval_ms as f64) / MIB
}

/// Summed (down, up) MB/s across interfaces, each rounded to one decimal.
pub fn network_totals(stats: &[NetworkStat], previous_interval_ms: u64) -> (f64, f64) {
    let (down, up) = stats.iter().fold((0.0, 0.0), |(down, up), s| {
        let ms = s.ms.unwrap_or(previous_interval_ms);
        (down + network_rate(s.rx_sec, ms), up + network_rate(s.tx_sec, ms))
    });
    (round1(down), round1(up))
}

/// Longest measurement interval reported this cycle, if any.
pub fn network_interval(stats: &[NetworkStat]) -> Option<u64> {
    stats.iter().filter_map(|s| s.ms).max()
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use om_core::raw::*;

    const GB: u64 = 1_000_000_000;

    fn entry(name: &str, cpu: f64, mem: f64) -> ProcessEntry {
        ProcessEntry {
            name: name.into(),
            cpu,
            mem,
            command: format!("/usr/bin/{name}"),
            params: String::new(),
        }
    }

    #[test]
    fn memory_scenario() {
        let m = MemoryInfo { available: 2 * GB, total: 8 * GB, swap_free: GB, swap_total: 4 * GB };
        assert_eq!(memory_percentages(&m), (Some(75.0), Some(75.0)));
    }

    #[test]
    fn memory_percent_stays_in_range() {
        for available in [0, 1, 3, GB, 8 * GB] {
            let pct = used_percent(available, 8 * GB).unwrap();
            assert!((0.0..=100.0).contains(&pct), "{available} -> {pct}");
        }
        assert_eq!(used_percent(9 * GB, 8 * GB), Some(0.0));
        assert_eq!(used_percent(0, 0), None);
    }

    #[test]
    fn cpu_uses_fixed_divisor() {
        let load = CpuLoad { cpus: vec![CoreLoad { load: 40.0 }, CoreLoad { load: 80.0 }] };
        assert_eq!(cpu_percent(&load), 15.0);

        let busy = CpuLoad { cpus: vec![CoreLoad { load: 100.0 }; 16] };
        assert_eq!(cpu_percent(&busy), 100.0);
    }

    #[test]
    fn same_name_processes_are_summed_and_clamped() {
        let rows = coalesce_processes(&[
            entry("chrome", 30.0, 10.0),
            entry("bash", 1.0, 0.5),
            entry("chrome", 80.0, 95.0),
        ]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "chrome");
        assert_eq!(rows[0].cpu, 100.0);
        assert_eq!(rows[0].mem, 100.0);
        assert_eq!(rows[1].name, "bash");
        assert_eq!(rows[1].cpu, 1.0);
    }

    #[test]
    fn coalesced_rows_follow_hottest_first_seen() {
        let rows = coalesce_processes(&[
            entry("a", 5.0, 0.0),
            entry("b", 20.0, 0.0),
            entry("a", 30.0, 0.0),
        ]);
        // "a" was first seen at 30%, ahead of "b".
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(rows[0].cpu, 35.0);
        assert_eq!(rows[0].command, "/usr/bin/a");
    }

    #[test]
    fn network_rate_is_linear() {
        let one = network_rate(5.0 * MIB, 1000);
        let two = network_rate(10.0 * MIB, 1000);
        assert_eq!(one, 5.0);
        assert_eq!(two, 2.0 * one);
        assert_eq!(network_rate(MIB, 0), 0.0);
    }

    #[test]
    fn network_totals_sum_interfaces_and_round() {
        let stats = vec![
            NetworkStat { iface: "eth0".into(), rx_sec: 1.04 * MIB, tx_sec: 0.0, ms: Some(1000) },
            NetworkStat { iface: "wlan0".into(), rx_sec: MIB, tx_sec: 0.5 * MIB, ms: None },
        ];
        // wlan0 falls back to the previous interval of 2000 ms.
        assert_eq!(network_totals(&stats, 2000), (3.0, 1.0));
        assert_eq!(network_interval(&stats), Some(1000));
    }

    #[test]
    fn gpu_without_memory_figures_is_unknown() {
        let raw = RawSnapshot {
            graphics: Some(Graphics {
                controllers: vec![
                    GpuController {
                        vendor: "AMD".into(),
                        model: "Navi".into(),
                        memory_free: Some(55),
                        memory_total: Some(100),
                    },
                    GpuController { vendor: "NVIDIA".into(), model: "RTX".into(), ..Default::default() },
                ],
            }),
            ..RawSnapshot::default()
        };
        let snap = aggregate(&raw, 1000);
        assert_eq!(snap.gpu_usage("AMD Navi"), Some(45.0));
        assert_eq!(snap.gpus.as_ref().map(Vec::len), Some(2));
        assert_eq!(snap.gpu_usage("NVIDIA RTX"), None);
    }

    #[test]
    fn temperature_is_rounded_to_one_decimal() {
        // Sensors report f32; widening keeps the binary noise.
        for (reading, shown) in [(27.8f32, 27.8), (48.686f32, 48.7), (55.0f32, 55.0)] {
            let raw = RawSnapshot {
                temperature: Some(CpuTemperature { main: f64::from(reading) }),
                ..RawSnapshot::default()
            };
            assert_eq!(aggregate(&raw, 1000).temperature, Some(shown));
        }
    }

    #[test]
    fn absent_sources_stay_absent() {
        let snap = aggregate(&RawSnapshot::default(), 1000);
        assert_eq!(snap, Snapshot::default());
    }
}
