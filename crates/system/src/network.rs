use om_core::raw::NetworkStat;
use std::time::Instant;
use sysinfo::Networks;

/// Per-interface throughput since the previous call.
pub(crate) struct NetworkMeter {
    networks: Networks,
    last_refresh: Instant,
}

impl NetworkMeter {
    pub(crate) fn new() -> Self {
        Self {
            networks: Networks::new_with_refreshed_list(),
            last_refresh: Instant::now(),
        }
    }

    pub(crate) fn stats(&mut self) -> Vec<NetworkStat> {
        let elapsed = self.last_refresh.elapsed();
        self.networks.refresh(false); // false = keep existing interfaces list
        self.last_refresh = Instant::now();

        let secs = elapsed.as_secs_f64();
        let ms = u64::try_from(elapsed.as_millis()).ok().filter(|ms| *ms > 0);

        // `received()` / `transmitted()` are deltas since the last refresh.
        self.networks
            .iter()
            .map(|(iface, data)| NetworkStat {
                iface:  iface.clone(),
                rx_sec: per_second(data.received(), secs),
                tx_sec: per_second(data.transmitted(), secs),
                ms,
            })
            .collect()
    }
}

fn per_second(bytes: u64, secs: f64) -> f64 {
    if secs > 0.0 {
        bytes as f64 / secs
    } else {
        0.0
    }
}
