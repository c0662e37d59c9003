use std::io;
use std::io::BufRead;
use std::io::Write;
use std::thread;

use anyhow::Context;
use tracing::warn;
use uniplot_barchart::BarChart;
use uniplot_barchart::MAX_BUCKETS;
use uniplot_histogram::Linear;
use uniplot_spark::FixedWidth;
use uniplot_spark::SparkReader;
use uniplot_spark::SparkStream;
use uniplot_spark::Unit;

use crate::cli::BarArgs;
use crate::cli::HistArgs;
use crate::cli::Output;
use crate::cli::PipeArgs;
use crate::cli::SampleArgs;
use crate::cli::SparkArgs;
use crate::config::ConfigToml;

fn spark_stream<W>(
    config: &ConfigToml,
    args: &SparkArgs,
    unit: Unit,
    output: W,
) -> anyhow::Result<SparkStream>
where
    W: Write + Send + 'static,
{
    let mut stream = SparkStream::new(config.refresh_interval(args.interval_ms));
    stream.set_unit(unit)?;
    stream.set_output(output)?;
    if let Some(columns) = args.columns {
        stream.set_terminal(FixedWidth(columns))?;
    }
    Ok(stream)
}

/// Moves the cursor past the sparkline once drawing is over.
fn finish_line(output: Output) -> io::Result<()> {
    match output {
        Output::Stderr => writeln!(io::stderr()),
        Output::Stdout => writeln!(io::stdout()),
    }
}

pub(crate) fn pipe(config: &ConfigToml, args: PipeArgs) -> anyhow::Result<()> {
    let stream = match args.output {
        Output::Stderr => spark_stream(config, &args.spark, Unit::Bytes, io::stderr())?,
        Output::Stdout => spark_stream(config, &args.spark, Unit::Bytes, io::stdout())?,
    };
    let mut reader = SparkReader::with_stream(io::stdin().lock(), stream);
    let copied = match args.output {
        Output::Stderr => io::copy(&mut reader, &mut io::stdout().lock()),
        Output::Stdout => io::copy(&mut reader, &mut io::sink()),
    };
    reader.into_inner();
    finish_line(args.output)?;
    copied.context("failed to copy stdin to stdout")?;
    Ok(())
}

pub(crate) fn sample(config: &ConfigToml, args: SampleArgs) -> anyhow::Result<()> {
    let unit = config.unit(args.unit);
    let mut stream = spark_stream(config, &args.spark, unit, io::stderr())?;
    stream.start();
    for sample in read_lines(io::stdin().lock(), parse_sample) {
        stream.add(sample?);
    }
    // Give the renderer a tick to draw what arrived after the last redraw.
    thread::sleep(stream.refresh_interval() * 2);
    stream.stop();
    finish_line(Output::Stderr)?;
    Ok(())
}

pub(crate) fn hist(config: &ConfigToml, args: HistArgs) -> anyhow::Result<()> {
    let samples = read_lines(io::stdin().lock(), parse_sample).collect::<anyhow::Result<Vec<_>>>()?;
    let histogram = uniplot_histogram::hist(config.hist_bins(args.bins), &samples);
    let scale = Linear::new(config.hist_width(args.width));
    uniplot_histogram::fprint(io::stdout().lock(), &histogram, &scale)
        .context("failed to print histogram")
}

pub(crate) fn bar(config: &ConfigToml, args: BarArgs) -> anyhow::Result<()> {
    let mut chart = BarChart::new();
    for pair in read_lines(io::stdin().lock(), parse_pair) {
        let (x, y) = pair?;
        chart.add(x, y);
    }
    if chart.x_span() > MAX_BUCKETS {
        anyhow::bail!(
            "x values span {}..={}, too wide for one row per x (limit {MAX_BUCKETS})",
            chart.min_x(),
            chart.max_x()
        );
    }
    let scale = Linear::new(config.bar_width(args.width));
    uniplot_barchart::fprint(io::stdout().lock(), &chart, &scale)
        .context("failed to print bar chart")
}

fn parse_sample(line: &str) -> Result<f64, String> {
    line.parse::<f64>().map_err(|err| err.to_string())
}

fn parse_pair(line: &str) -> Result<(i64, i64), String> {
    let mut fields = line.split_whitespace();
    let (Some(x), Some(y), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err("expected two integers".to_string());
    };
    let x = x.parse::<i64>().map_err(|err| format!("bad x: {err}"))?;
    let y = y.parse::<i64>().map_err(|err| format!("bad y: {err}"))?;
    Ok((x, y))
}

/// Parses every non-blank line of `input`. Lines that fail to parse are
/// logged and skipped; read errors end the iteration.
fn read_lines<R, T, F>(input: R, parse: F) -> impl Iterator<Item = anyhow::Result<T>>
where
    R: BufRead,
    F: Fn(&str) -> Result<T, String>,
{
    input
        .lines()
        .enumerate()
        .filter_map(move |(idx, line)| {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    return Some(Err(anyhow::Error::new(err).context("failed to read stdin")));
                }
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match parse(trimmed) {
                Ok(value) => Some(Ok(value)),
                Err(err) => {
                    warn!("skipping malformed line {}: {trimmed:?}: {err}", idx + 1);
                    None
                }
            }
        })
}
