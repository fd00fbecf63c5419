//! Text primitives the dashboard is drawn with: padded labels, fill bars,
//! sparklines, bordered tables, durations and the banner.

pub mod banner;
pub mod bar;
pub mod duration;
pub mod label;
pub mod sparkline;
pub mod table;

pub use banner::banner_lines;
pub use bar::Bar;
pub use duration::format_duration;
pub use label::fit;
pub use sparkline::sparkline;
pub use table::Table;
