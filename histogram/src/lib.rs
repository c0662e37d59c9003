//! Histograms of floating point samples, printed as aligned rows:
//!
//! ```text
//! 0.1-0.2  5%   ▋       [1/20]
//! 0.2-0.3  25%  ██▊     [5/20]
//! 0.3-0.4  0%   ▏       [0/20]
//! ```

mod error;
mod hist;
mod render;

pub use error::Error;
pub use error::Result;
pub use hist::Bucket;
pub use hist::Histogram;
pub use hist::hist;
pub use render::fprint;
pub use render::fprintf;
pub use uniplot_utils_format::Linear;
pub use uniplot_utils_format::Scale;
