pub mod error;
pub mod event;
pub mod history;
pub mod raw;
pub mod state;

pub use error::{MonitorError, Result};
pub use event::Message;
pub use history::{GpuSeries, MetricHistory, MetricSeries, SeriesId};
pub use raw::RawSnapshot;
pub use state::{DashboardState, GpuReading, ProcessRow, Snapshot};
