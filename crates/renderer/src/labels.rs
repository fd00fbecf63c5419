/// User-facing strings.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub loading:      &'static str,
    pub uptime:       &'static str,
    pub memory:       &'static str,
    pub swap:         &'static str,
    pub cpu:          &'static str,
    pub temperature:  &'static str,
    pub gpu_unknown:  &'static str,
    pub net_down:     &'static str,
    pub net_up:       &'static str,
    pub unknown:      &'static str,
    pub col_name:     &'static str,
    pub col_cpu:      &'static str,
    pub col_memory:   &'static str,
    pub col_command:  &'static str,
    pub no_processes: &'static str,
}

pub const EN: Labels = Labels {
    loading:      "Please wait...",
    uptime:       "Uptime :",
    memory:       "Memory Usage :",
    swap:         "Swap Usage :",
    cpu:          "CPU Usage :",
    temperature:  "CPU Temperature :",
    gpu_unknown:  "GPU Usage Unknown",
    net_down:     "Network Download :",
    net_up:       "Network Upload :",
    unknown:      "unknown",
    col_name:     "Name",
    col_cpu:      "CPU",
    col_memory:   "Memory",
    col_command:  "Command",
    no_processes: "Not enough space to show processes, please resize your terminal",
};
