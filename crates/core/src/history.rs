use std::collections::VecDeque;

/// Rolling history of one metric. Feeds the graph style's sparklines.
///
/// The series has no capacity of its own; [`MetricSeries::trim`] is called
/// once per cycle with the current character budget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricSeries {
    samples: VecDeque<f64>,
}

impl MetricSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: f64) {
        self.samples.push_back(value);
    }

    /// Evict the oldest samples until at most `max_len` remain.
    pub fn trim(&mut self, max_len: usize) {
        while self.samples.len() > max_len {
            self.samples.pop_front();
        }
    }

    pub fn last(&self) -> Option<f64> {
        self.samples.back().copied()
    }

    /// The newest `n` samples, oldest first.
    pub fn last_n(&self, n: usize) -> impl Iterator<Item = f64> + '_ {
        let skip = self.samples.len().saturating_sub(n);
        self.samples.iter().skip(skip).copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }
}

/// Identifies one of the scalar series kept by [`MetricHistory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesId {
    Memory,
    Swap,
    Cpu,
    Temperature,
    NetworkDown,
    NetworkUp,
}

impl SeriesId {
    pub const ALL: [SeriesId; 6] = [
        SeriesId::Memory,
        SeriesId::Swap,
        SeriesId::Cpu,
        SeriesId::Temperature,
        SeriesId::NetworkDown,
        SeriesId::NetworkUp,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Per-GPU series in first-seen order.
///
/// Entries are never removed: a GPU that disappears from a reading keeps its
/// row (rendered as unknown) so the render order stays stable.
#[derive(Debug, Clone, Default)]
pub struct GpuSeries {
    entries: Vec<(String, MetricSeries)>,
}

impl GpuSeries {
    /// Series for `id`, created empty on first sight.
    pub fn entry(&mut self, id: &str) -> &mut MetricSeries {
        let pos = match self.entries.iter().position(|(k, _)| k == id) {
            Some(pos) => pos,
            None => {
                self.entries.push((id.to_string(), MetricSeries::new()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[pos].1
    }

    pub fn get(&self, id: &str) -> Option<&MetricSeries> {
        self.entries.iter().find(|(k, _)| k == id).map(|(_, s)| s)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricSeries)> {
        self.entries.iter().map(|(k, s)| (k.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn trim(&mut self, max_len: usize) {
        for (_, series) in &mut self.entries {
            series.trim(max_len);
        }
    }
}

/// All rolling histories kept for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct MetricHistory {
    scalars: [MetricSeries; 6],
    gpus:    GpuSeries,
}

impl MetricHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, id: SeriesId, value: f64) {
        self.scalars[id.index()].push(value);
    }

    /// Record a GPU reading.  The GPU becomes known even when `value` is
    /// `None`; a missing reading appends nothing.
    pub fn observe_gpu(&mut self, id: &str, value: Option<f64>) {
        let series = self.gpus.entry(id);
        if let Some(v) = value {
            series.push(v);
        }
    }

    /// Trim every scalar and GPU series to at most `max_len` samples.
    pub fn trim(&mut self, max_len: usize) {
        for series in &mut self.scalars {
            series.trim(max_len);
        }
        self.gpus.trim(max_len);
    }

    pub fn last(&self, id: SeriesId) -> Option<f64> {
        self.series(id).last()
    }

    pub fn last_n(&self, id: SeriesId, n: usize) -> Vec<f64> {
        self.series(id).last_n(n).collect()
    }

    pub fn series(&self, id: SeriesId) -> &MetricSeries {
        &self.scalars[id.index()]
    }

    pub fn gpus(&self) -> &GpuSeries {
        &self.gpus
    }
}
