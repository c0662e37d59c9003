use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

/// Terminal plots for numbers arriving on stdin.
#[derive(Debug, Parser)]
#[clap(author, version, bin_name = "uniplot")]
pub struct Cli {
    /// TOML file providing defaults for the flags below.
    #[arg(long, global = true, env = "UNIPLOT_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Whether log lines on stderr are colored.
    #[arg(long, global = true, value_enum, default_value_t = Color::Auto)]
    pub color: Color,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Copy stdin to stdout while drawing the byte rate as a sparkline.
    Pipe(PipeArgs),

    /// Read one number per line and draw their rate as a sparkline.
    Sample(SampleArgs),

    /// Read one number per line and print their histogram.
    Hist(HistArgs),

    /// Read `x y` integer pairs, one per line, and print a bar chart.
    Bar(BarArgs),
}

#[derive(Debug, Clone, Args)]
pub struct SparkArgs {
    /// Milliseconds between two redraws.
    #[arg(long = "interval-ms", value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Draw this many columns instead of asking the terminal.
    #[arg(long, value_name = "N")]
    pub columns: Option<u16>,
}

#[derive(Debug, Clone, Args)]
pub struct PipeArgs {
    #[clap(flatten)]
    pub spark: SparkArgs,

    /// Where the sparkline is drawn. Piped data is discarded when the
    /// sparkline takes stdout.
    #[arg(long, value_enum, default_value_t = Output::Stderr)]
    pub output: Output,
}

#[derive(Debug, Clone, Args)]
pub struct SampleArgs {
    #[clap(flatten)]
    pub spark: SparkArgs,

    /// Unit printed after the average, `bytes` for humanized sizes.
    #[arg(long)]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct HistArgs {
    /// Number of buckets.
    #[arg(long)]
    pub bins: Option<usize>,

    /// Columns taken by the largest bucket.
    #[arg(long)]
    pub width: Option<usize>,
}

#[derive(Debug, Clone, Args)]
pub struct BarArgs {
    /// Columns taken by the longest bar.
    #[arg(long)]
    pub width: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum Color {
    Always,
    Never,
    #[default]
    Auto,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum Output {
    #[default]
    Stderr,
    Stdout,
}
