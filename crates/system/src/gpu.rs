//! Graphics controllers from the Linux DRM sysfs interface.
//!
//! Each `cardN/device` directory exposes a PCI vendor id and, for drivers
//! that support it (amdgpu, recent i915/xe), VRAM totals.  Controllers without
//! VRAM figures are still listed, with unknown memory.

use crate::memory::format_bytes;
use om_core::raw::{GpuController, Graphics};
use om_core::Result;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// List the graphics cards under `root` (normally `/sys/class/drm`), ordered
/// by card number.  A missing `root` means no GPUs, not an error.
pub(crate) fn read_controllers(root: &Path) -> Result<Graphics> {
    let entries = match std::fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Graphics::default()),
        Err(e) => return Err(e.into()),
    };

    let mut cards: Vec<(u32, std::path::PathBuf)> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name();
            let index = card_index(name.to_str()?)?;
            Some((index, entry.path().join("device")))
        })
        .collect();
    cards.sort_by_key(|(index, _)| *index);

    let controllers = cards
        .into_iter()
        .filter_map(|(index, device)| read_controller(index, &device))
        .collect();

    Ok(Graphics { controllers })
}

/// `"card0"` → `Some(0)`; connector entries such as `"card0-DP-1"` → `None`.
fn card_index(name: &str) -> Option<u32> {
    name.strip_prefix("card")?.parse().ok()
}

fn read_controller(index: u32, device: &Path) -> Option<GpuController> {
    let vendor_id = read_trimmed(&device.join("vendor"))?;
    let vendor = vendor_name(&vendor_id).to_string();

    let model = read_trimmed(&device.join("product_name"))
        .filter(|s| !s.is_empty())
        .or_else(|| read_trimmed(&device.join("device")).map(|id| format!("[{id}]")))
        .unwrap_or_else(|| format!("card{index}"));

    let total = read_u64(&device.join("mem_info_vram_total"));
    let used  = read_u64(&device.join("mem_info_vram_used"));
    let free  = total.zip(used).map(|(t, u)| t.saturating_sub(u));

    if let Some(total) = total {
        debug!("card{index}: {vendor} {model}, {} VRAM", format_bytes(total));
    }

    Some(GpuController {
        vendor,
        model,
        memory_free: free,
        memory_total: total,
    })
}

fn vendor_name(pci_id: &str) -> &str {
    match pci_id.to_ascii_lowercase().as_str() {
        "0x1002" => "AMD",
        "0x10de" => "NVIDIA",
        "0x8086" => "Intel",
        _ => pci_id,
    }
}

fn read_trimmed(path: &Path) -> Option<String> {
    std::fs::read_to_string(path).ok().map(|s| s.trim().to_string())
}

fn read_u64(path: &Path) -> Option<u64> {
    read_trimmed(path)?.parse().ok()
}
