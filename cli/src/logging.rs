use supports_color::Stream;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::cli::Color;

const DEFAULT_LEVEL: &str = "warn";

/// Sends `tracing` events to stderr, filtered by `RUST_LOG`.
pub fn init_logging(color: Color) {
    let stderr_with_ansi = match color {
        Color::Always => true,
        Color::Never => false,
        Color::Auto => supports_color::on_cached(Stream::Stderr).is_some(),
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LEVEL))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(stderr_with_ansi)
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
