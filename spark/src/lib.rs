//! Live-updating terminal sparklines.
//!
//! A [`SparkStream`] accepts samples from any number of producer threads and
//! redraws a single terminal line on a fixed cadence from a background
//! renderer thread. Each redraw sums the samples added since the previous
//! one into a new window entry, rescales the window between its minimum and
//! maximum, and appends the average rate:
//!
//! ```ignore
//! let mut stream = SparkStream::new(Duration::from_millis(100));
//! stream.set_unit(Unit::Bytes)?;
//! stream.start();
//! stream.add(4096.0);
//! ```
//!
//! [`SparkReader`] and [`SparkWriter`] wrap byte streams and feed transfer
//! sizes into an owned stream.

mod accumulator;
mod error;
mod io;
mod render;
mod stream;
mod terminal;
mod unit;
mod window;

pub use accumulator::Accumulator;
pub use error::Result;
pub use error::SparkError;
pub use io::ADAPTER_REFRESH_INTERVAL;
pub use io::SparkReader;
pub use io::SparkWriter;
pub use render::GLYPHS;
pub use render::Renderer;
pub use render::average_label;
pub use render::glyph;
pub use render::glyph_level;
pub use stream::Sampler;
pub use stream::SparkStream;
pub use terminal::CrosstermTerminal;
pub use terminal::FixedWidth;
pub use terminal::TerminalSize;
pub use unit::Unit;
pub use window::SlidingWindow;
pub use window::WindowStats;
