//! Horizontal bar charts of integer `(x, y)` points.
//!
//! Points are bucketed along the x axis and each bucket is drawn as one
//! labelled row. Rows for buckets without any point read `nil`:
//!
//! ```text
//! 0   █ 1
//! 1   ██▉ 3
//! 2   nil
//! 3   ███████████████████▏ 20
//! ```

mod chart;
mod error;
mod render;

pub use chart::BarChart;
pub use chart::MAX_BUCKETS;
pub use chart::XY;
pub use chart::XYf;
pub use error::Error;
pub use error::Result;
pub use render::fprint;
pub use render::fprintf;
pub use uniplot_utils_format::Linear;
pub use uniplot_utils_format::Scale;
