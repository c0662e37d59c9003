use std::time::Duration;

use tracing::debug;
use unicode_width::UnicodeWidthStr;
use uniplot_utils_format::bytes;
use uniplot_utils_format::comma;

use crate::unit::Unit;
use crate::window::SlidingWindow;
use crate::window::WindowStats;

/// Vertical levels, shortest first.
pub const GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Rates above this print as grouped integers instead of three decimals.
const LARGE_RATE: f64 = 1000.0;

/// Maps `value` to a glyph level in `0..GLYPHS.len()`.
///
/// A window without variation draws every value at the shortest level.
pub fn glyph_level(value: f64, min: f64, max: f64) -> usize {
    let span = max - min;
    if span.is_nan() || span <= f64::MIN_POSITIVE {
        return 0;
    }
    if value >= max {
        return GLYPHS.len() - 1;
    }
    let level = ((value - min) / span * GLYPHS.len() as f64).floor();
    (level as usize).min(GLYPHS.len() - 1)
}

pub fn glyph(value: f64, min: f64, max: f64) -> char {
    GLYPHS[glyph_level(value, min, max)]
}

/// Formats the trailing average label, including its leading space.
pub fn average_label(unit: &Unit, average: f64) -> String {
    match unit {
        Unit::Bytes => format!(" {}/s", bytes(average as u64)),
        Unit::None | Unit::Custom(_) if average > LARGE_RATE => {
            format!(" {}{unit}/s", comma(average as i64))
        }
        Unit::None | Unit::Custom(_) => format!(" {average:.3}{unit}/s"),
    }
}

/// Owns the window and composes one line per tick.
///
/// The renderer is single-threaded; [`SparkStream`](crate::SparkStream)
/// moves it onto its background thread.
#[derive(Debug)]
pub struct Renderer {
    refresh_interval: Duration,
    unit: Unit,
    window: SlidingWindow,
    stats: Option<WindowStats>,
    line: String,
}

impl Renderer {
    pub fn new(refresh_interval: Duration, unit: Unit) -> Self {
        Self {
            refresh_interval,
            unit,
            window: SlidingWindow::new(),
            stats: None,
            line: String::new(),
        }
    }

    pub fn window(&self) -> &SlidingWindow {
        &self.window
    }

    pub fn stats(&self) -> Option<WindowStats> {
        self.stats
    }

    /// Pushes `pending` as the newest entry and returns the line to draw on a
    /// terminal `width` columns wide.
    ///
    /// The line starts with `\r` and then fills exactly `width` columns: the
    /// newest entries as glyphs, blank padding, then the average label. The
    /// label wins when the terminal is too narrow for both.
    pub fn render(&mut self, width: usize, pending: f64) -> &str {
        self.window.grow_to(width);
        self.window.push(pending);
        self.stats = self.window.stats(self.refresh_interval);

        let average = self.stats.map_or(0.0, |stats| stats.average);
        let label = average_label(&self.unit, average);
        let budget = width.saturating_sub(label.width());
        let first_visible = self.window.len().saturating_sub(budget);
        debug!(
            first_visible,
            label_width = label.width(),
            window_len = self.window.len(),
            "composing sparkline"
        );

        self.line.clear();
        self.line.push('\r');
        let mut drawn = 0;
        if let Some(WindowStats { min, max, .. }) = self.stats {
            for value in self.window.recent(budget) {
                self.line.push(glyph(value, min, max));
                drawn += 1;
            }
        }
        self.line.extend(std::iter::repeat_n(' ', budget.saturating_sub(drawn)));
        self.line.push_str(&label);
        &self.line
    }
}
