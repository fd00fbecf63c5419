use om_core::raw::{ProcessEntry, ProcessList};
use std::ffi::OsString;
use sysinfo::{ProcessesToUpdate, System};

/// All user-visible processes, with CPU and memory as whole-machine percentages.
pub(crate) fn read(sys: &mut System) -> ProcessList {
    sys.refresh_memory();
    sys.refresh_processes(ProcessesToUpdate::All, true);

    let total_mem = sys.total_memory() as f64;
    // sysinfo reports per-process CPU relative to one core.
    let cores = std::thread::available_parallelism().map_or(1, |n| n.get()) as f64;

    let list = sys
        .processes()
        .values()
        .filter(|p| p.thread_kind().is_none())
        .map(|p| {
            let (command, params) = split_cmd(p.cmd());
            let name = p.name().to_string_lossy().into_owned();
            ProcessEntry {
                command: command.unwrap_or_else(|| {
                    p.exe().map_or_else(|| name.clone(), |e| e.display().to_string())
                }),
                name,
                cpu: f64::from(p.cpu_usage()) / cores,
                mem: if total_mem > 0.0 { p.memory() as f64 / total_mem * 100.0 } else { 0.0 },
                params,
            }
        })
        .collect();

    ProcessList { list }
}

/// Split argv into the executable and its space-joined arguments.
fn split_cmd(cmd: &[OsString]) -> (Option<String>, String) {
    let mut parts = cmd.iter().map(|s| s.to_string_lossy());
    let command = parts.next().map(|c| c.into_owned());
    let params = parts.collect::<Vec<_>>().join(" ");
    (command, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_cmd_separates_executable() {
        let cmd: Vec<OsString> = ["/usr/bin/node", "index.js", "--port", "80"]
            .into_iter()
            .map(OsString::from)
            .collect();
        let (command, params) = split_cmd(&cmd);
        assert_eq!(command.as_deref(), Some("/usr/bin/node"));
        assert_eq!(params, "index.js --port 80");
    }

    #[test]
    fn split_cmd_empty() {
        assert_eq!(split_cmd(&[]), (None, String::new()));
    }
}
