use uniplot_utils_format::Scale;

/// Samples falling in `[min, max)`. The last bucket of a histogram also
/// holds samples equal to its `max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
    pub count: usize,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Histogram {
    /// Size of the smallest bucket.
    pub min: usize,
    /// Size of the largest bucket.
    pub max: usize,
    /// Number of samples over all buckets.
    pub count: usize,
    pub buckets: Vec<Bucket>,
}

/// Partitions `input` over `bins` equally wide buckets spanning the smallest
/// to the largest sample.
///
/// Empty input or zero bins give an empty histogram. When every sample is
/// equal they all land in the first bucket.
pub fn hist(bins: usize, input: &[f64]) -> Histogram {
    let Some(&first) = input.first() else {
        return Histogram::default();
    };
    if bins == 0 {
        return Histogram::default();
    }

    let (low, high) = input
        .iter()
        .fold((first, first), |(low, high), &value| (low.min(value), high.max(value)));
    let scale = (high - low) / bins as f64;

    let mut buckets: Vec<Bucket> = (0..bins)
        .map(|i| Bucket {
            count: 0,
            min: low + i as f64 * scale,
            max: low + (i + 1) as f64 * scale,
        })
        .collect();
    for &value in input {
        let idx = if scale > 0.0 {
            (((value - low) / scale) as usize).min(bins - 1)
        } else {
            0
        };
        buckets[idx].count += 1;
    }

    let counts = buckets.iter().map(|bucket| bucket.count);
    Histogram {
        min: counts.clone().min().unwrap_or_default(),
        max: counts.max().unwrap_or_default(),
        count: input.len(),
        buckets,
    }
}

impl Histogram {
    /// Scaled size of the bucket at `idx`, where an empty bucket scales to
    /// zero and the largest bucket to the full width.
    pub fn scale(&self, scale: &impl Scale, idx: usize) -> Option<f64> {
        let bucket = self.buckets.get(idx)?;
        Some(scale.scale(0, count_as_i64(self.max), count_as_i64(bucket.count)))
    }
}

fn count_as_i64(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}
