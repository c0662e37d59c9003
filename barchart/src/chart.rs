use uniplot_utils_format::Scale;

use crate::error::Error;
use crate::error::Result;

/// Most buckets a chart will allocate. Dense slots and default-width prints
/// refuse charts whose x span is wider.
pub const MAX_BUCKETS: usize = 100_000;

pub(crate) fn check_buckets(buckets: usize) -> Result<()> {
    if buckets > MAX_BUCKETS {
        return Err(Error::TooManyBuckets {
            buckets,
            limit: MAX_BUCKETS,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XY {
    pub x: i64,
    pub y: i64,
}

/// One bucket of a scaled chart. `y` and `scaled_y` are `None` when no
/// point fell into the bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XYf {
    pub x: f64,
    pub y: Option<f64>,
    pub scaled_y: Option<f64>,
}

/// Points to plot together with their bounds on both axes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarChart {
    min_x: i64,
    max_x: i64,
    min_y: i64,
    max_y: i64,
    points: Vec<XY>,
}

impl BarChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(i64, i64)]) -> Self {
        let mut chart = Self::new();
        for &(x, y) in pairs {
            chart.add(x, y);
        }
        chart
    }

    pub fn add(&mut self, x: i64, y: i64) {
        if self.points.is_empty() {
            (self.min_x, self.max_x, self.min_y, self.max_y) = (x, x, y, y);
        } else {
            self.min_x = self.min_x.min(x);
            self.max_x = self.max_x.max(x);
            self.min_y = self.min_y.min(y);
            self.max_y = self.max_y.max(y);
        }
        self.points.push(XY { x, y });
    }

    pub fn min_x(&self) -> i64 {
        self.min_x
    }

    pub fn max_x(&self) -> i64 {
        self.max_x
    }

    pub fn min_y(&self) -> i64 {
        self.min_y
    }

    pub fn max_y(&self) -> i64 {
        self.max_y
    }

    pub fn points(&self) -> &[XY] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of integer x values between the bounds, both included.
    pub fn x_span(&self) -> usize {
        if self.points.is_empty() {
            return 0;
        }
        usize::try_from(self.max_x.abs_diff(self.min_x))
            .map_or(usize::MAX, |diff| diff.saturating_add(1))
    }

    /// One slot per x in `min_x..=max_x`, summing the y of points that share
    /// an x. Slots no point landed on are `None`.
    ///
    /// Fails with [`Error::TooManyBuckets`] when the span exceeds
    /// [`MAX_BUCKETS`]. Sums saturate at the `i64` bounds.
    pub fn xys(&self) -> Result<Vec<Option<XY>>> {
        let span = self.x_span();
        check_buckets(span)?;
        let mut slots = vec![None; span];
        for point in &self.points {
            let idx = self.min_x.abs_diff(point.x) as usize;
            let slot = slots[idx].get_or_insert(XY { x: point.x, y: 0 });
            slot.y = slot.y.saturating_add(point.y);
        }
        Ok(slots)
    }

    /// Spreads the points over `x_width` evenly spaced buckets, summing both
    /// the raw and the scaled y of the points in each bucket.
    ///
    /// Bucket `i` is labelled `min_x + i * step` where
    /// `step = (max_x - min_x) / (x_width - 1)`.
    pub fn scale_xys(&self, x_width: usize, scale: &impl Scale) -> Vec<XYf> {
        if x_width == 0 || self.points.is_empty() {
            return Vec::new();
        }
        let step = if x_width > 1 {
            self.max_x.abs_diff(self.min_x) as f64 / (x_width - 1) as f64
        } else {
            0.0
        };

        let mut buckets: Vec<XYf> = (0..x_width)
            .map(|i| XYf {
                x: i as f64 * step + self.min_x as f64,
                y: None,
                scaled_y: None,
            })
            .collect();
        for point in &self.points {
            let idx = if step > 0.0 {
                ((point.x.abs_diff(self.min_x) as f64 / step) as usize).min(x_width - 1)
            } else {
                0
            };
            let bucket = &mut buckets[idx];
            *bucket.y.get_or_insert(0.0) += point.y as f64;
            *bucket.scaled_y.get_or_insert(0.0) += scale.scale(self.min_y, self.max_y, point.y);
        }
        buckets
    }
}
