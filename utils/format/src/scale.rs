/// Maps a value within `[min, max]` onto a bar length in columns.
pub trait Scale {
    fn scale(&self, min: i64, max: i64, value: i64) -> f64;
}

impl<F> Scale for F
where
    F: Fn(i64, i64, i64) -> f64,
{
    fn scale(&self, min: i64, max: i64, value: i64) -> f64 {
        self(min, max, value)
    }
}

/// Scales linearly so that `max` is drawn `width` columns long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Linear {
    pub width: usize,
}

impl Linear {
    pub fn new(width: usize) -> Self {
        Self { width }
    }
}

impl Scale for Linear {
    fn scale(&self, min: i64, max: i64, value: i64) -> f64 {
        if max == min {
            return 0.0;
        }
        // Widened first: `max - min` overflows i64 for bounds of opposite sign.
        (value as f64 - min as f64) / (max as f64 - min as f64) * self.width as f64
    }
}
