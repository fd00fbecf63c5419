use om_core::raw::MemoryInfo;
use om_core::{MonitorError, Result};
use sysinfo::System;

/// RAM and swap figures in bytes.
pub(crate) fn read(sys: &mut System) -> Result<MemoryInfo> {
    sys.refresh_memory();
    if sys.total_memory() == 0 {
        return Err(MonitorError::Provider("total memory reported as zero".into()));
    }

    Ok(MemoryInfo {
        available:  sys.available_memory(),
        total:      sys.total_memory(),
        swap_free:  sys.free_swap(),
        swap_total: sys.total_swap(),
    })
}

/// Format a byte count as a human-readable string (e.g. `"7.3 GiB"`).
pub fn format_bytes(bytes: u64) -> String {
    const GIB: u64 = 1 << 30;
    const MIB: u64 = 1 << 20;
    const KIB: u64 = 1 << 10;

    if bytes >= GIB {
        format!("{:.1} GiB", bytes as f64 / GIB as f64)
    } else if bytes >= MIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_bytes_gib() {
        assert_eq!(format_bytes(8 * 1024 * 1024 * 1024), "8.0 GiB");
    }

    #[test]
    fn format_bytes_zero() {
        assert_eq!(format_bytes(0), "0 B");
    }
}
