use std::io::Write;

use uniplot_utils_format::Scale;
use uniplot_utils_format::TabWriter;
use uniplot_utils_format::horizontal_bar;

use crate::chart::BarChart;
use crate::chart::check_buckets;
use crate::error::Result;

const MIN_CELL_WIDTH: usize = 2;
const CELL_PADDING: usize = 2;

/// Prints one row per integer x between the chart bounds.
///
/// Charts spanning more than [`MAX_BUCKETS`](crate::MAX_BUCKETS) x values are
/// rejected before anything is written; use [`fprintf`] with a narrower width.
pub fn fprint<W: Write>(w: W, chart: &BarChart, scale: &impl Scale) -> Result<()> {
    let label = |value: f64| value.to_string();
    fprintf(w, chart, chart.x_span(), scale, label, label)
}

/// Prints `width` rows, labelling the x axis with `xfmt` and bar values with
/// `yfmt`. `width` is capped at [`MAX_BUCKETS`](crate::MAX_BUCKETS).
pub fn fprintf<W, X, Y>(
    w: W,
    chart: &BarChart,
    width: usize,
    scale: &impl Scale,
    xfmt: X,
    yfmt: Y,
) -> Result<()>
where
    W: Write,
    X: Fn(f64) -> String,
    Y: Fn(f64) -> String,
{
    check_buckets(width)?;
    let mut table = TabWriter::new(w, MIN_CELL_WIDTH, CELL_PADDING);
    for bucket in chart.scale_xys(width, scale) {
        let x = xfmt(bucket.x);
        match (bucket.y, bucket.scaled_y) {
            (Some(y), Some(scaled_y)) => {
                writeln!(table, "{x}\t{} {}", horizontal_bar(scaled_y), yfmt(y))?
            }
            _ => writeln!(table, "{x}\tnil")?,
        }
    }
    table.flush()?;
    Ok(())
}
