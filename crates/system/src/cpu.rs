use om_core::raw::{CoreLoad, CpuLoad, CpuTemperature};
use om_core::{MonitorError, Result};
use sysinfo::{Components, System};

/// Per-core usage since the previous refresh of `sys`.
pub(crate) fn current_load(sys: &mut System) -> Result<CpuLoad> {
    sys.refresh_cpu_usage();
    let cpus: Vec<CoreLoad> = sys
        .cpus()
        .iter()
        .map(|c| CoreLoad { load: f64::from(c.cpu_usage()) })
        .collect();

    if cpus.is_empty() {
        return Err(MonitorError::Provider("no CPUs reported".into()));
    }
    Ok(CpuLoad { cpus })
}

/// Hottest CPU sensor reading.
pub(crate) fn temperature(components: &mut Components) -> Result<CpuTemperature> {
    components.refresh(false);
    let readings = components.iter().map(|c| (c.label(), c.temperature()));
    pick_cpu_temperature(readings)
        .map(|main| CpuTemperature { main })
        .ok_or_else(|| MonitorError::Provider("no CPU temperature sensor".into()))
}

/// Sensor labels that identify a CPU die or package across drivers
/// (coretemp, k10temp, zenpower, Apple SMC).
const CPU_SENSOR_HINTS: &[&str] = &["package", "tctl", "tdie", "coretemp", "k10temp", "cpu"];

fn pick_cpu_temperature<'a>(
    readings: impl Iterator<Item = (&'a str, Option<f32>)>,
) -> Option<f64> {
    readings
        .filter(|(label, _)| {
            let label = label.to_lowercase();
            CPU_SENSOR_HINTS.iter().any(|hint| label.contains(hint))
        })
        .filter_map(|(_, temp)| temp.filter(|t| t.is_finite() && *t > 0.0))
        .map(f64::from)
        .reduce(f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_hottest_cpu_sensor() {
        let readings = [
            ("coretemp Package id 0", Some(52.0)),
            ("coretemp Core 1", Some(55.0)),
            ("nvme Composite", Some(70.0)),
        ];
        assert_eq!(pick_cpu_temperature(readings.into_iter()), Some(55.0));
    }

    #[test]
    fn ignores_non_cpu_and_empty_sensors() {
        let readings = [("nvme Composite", Some(40.0)), ("k10temp Tctl", None)];
        assert_eq!(pick_cpu_temperature(readings.into_iter()), None);
    }
}
