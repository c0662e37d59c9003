use std::io::Write;

use uniplot_utils_format::Scale;
use uniplot_utils_format::TabWriter;
use uniplot_utils_format::general;
use uniplot_utils_format::horizontal_bar;

use crate::error::Result;
use crate::hist::Histogram;

const MIN_CELL_WIDTH: usize = 2;
const CELL_PADDING: usize = 2;
const LABEL_PRECISION: usize = 4;
const PERCENT_PRECISION: usize = 3;

/// Prints one row per bucket, labelling bounds with four significant digits.
pub fn fprint<W: Write>(w: W, histogram: &Histogram, scale: &impl Scale) -> Result<()> {
    fprintf(w, histogram, scale, |value| general(value, LABEL_PRECISION))
}

/// Prints one row per bucket, labelling bounds with `label`.
///
/// Each row reads `min-max`, the bucket's share of all samples, its bar and
/// `[count/total]`.
pub fn fprintf<W, F>(w: W, histogram: &Histogram, scale: &impl Scale, label: F) -> Result<()>
where
    W: Write,
    F: Fn(f64) -> String,
{
    let mut table = TabWriter::new(w, MIN_CELL_WIDTH, CELL_PADDING);
    for (idx, bucket) in histogram.buckets.iter().enumerate() {
        let share = bucket.count as f64 * 100.0 / histogram.count as f64;
        let bar = horizontal_bar(histogram.scale(scale, idx).unwrap_or_default());
        writeln!(
            table,
            "{}-{}\t{}%\t{bar}\t[{}/{}]",
            label(bucket.min),
            label(bucket.max),
            general(share, PERCENT_PRECISION),
            bucket.count,
            histogram.count,
        )?;
    }
    table.flush()?;
    Ok(())
}
