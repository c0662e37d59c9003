//! Small text-formatting helpers shared by the uniplot renderers.
//!
//! Humanized byte counts and thousands grouping for sparkline labels,
//! printf-style `%g` output for axis labels, horizontal bar glyphs and
//! scaling, and a tab-stop column aligner.

mod bar;
mod general;
mod humanize;
mod scale;
mod tabwriter;

pub use bar::horizontal_bar;
pub use general::general;
pub use humanize::bytes;
pub use humanize::comma;
pub use scale::Linear;
pub use scale::Scale;
pub use tabwriter::TabWriter;
