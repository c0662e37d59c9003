use std::collections::VecDeque;
use std::time::Duration;

/// Minimum, maximum and average rate over every entry of a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowStats {
    pub min: f64,
    pub max: f64,
    /// Units per second: the window sum divided by the time it covers.
    pub average: f64,
}

/// FIFO of per-tick sums whose capacity follows the widest terminal seen.
///
/// Capacity never shrinks. Narrowing the terminal only narrows what is drawn,
/// so history hidden by a resize comes back when the terminal widens again.
/// Storage is reserved when the capacity grows and reused on every other tick.
#[derive(Debug, Default)]
pub struct SlidingWindow {
    values: VecDeque<f64>,
    capacity: usize,
}

impl SlidingWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raises the capacity to `width` if it is larger than any seen before.
    pub fn grow_to(&mut self, width: usize) {
        if width > self.capacity {
            self.values.reserve_exact(width - self.values.len());
            self.capacity = width;
        }
    }

    /// Appends `value`, evicting the oldest entry when the window is full.
    ///
    /// A window that has never been grown has no room and drops the value.
    pub fn push(&mut self, value: f64) {
        if self.capacity == 0 {
            return;
        }
        if self.values.len() == self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(value);
    }

    /// Oldest-first iterator over the whole window.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = f64> + ExactSizeIterator + '_ {
        self.values.iter().copied()
    }

    /// Oldest-first iterator over the newest `count` entries.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = f64> + '_ {
        let skip = self.values.len().saturating_sub(count);
        self.values.iter().skip(skip).copied()
    }

    /// Scans the whole window. `None` when it is empty.
    pub fn stats(&self, refresh_interval: Duration) -> Option<WindowStats> {
        let mut values = self.iter();
        let first = values.next()?;
        let (min, max, sum) = values.fold((first, first, first), |(min, max, sum), value| {
            (min.min(value), max.max(value), sum + value)
        });
        let covered_secs = refresh_interval.as_secs_f64() * self.values.len() as f64;
        Some(WindowStats {
            min,
            max,
            average: sum / covered_secs,
        })
    }
}
