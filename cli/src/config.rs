use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;
use uniplot_spark::ADAPTER_REFRESH_INTERVAL;
use uniplot_spark::Unit;

pub const DEFAULT_BINS: usize = 10;
pub const DEFAULT_WIDTH: usize = 40;

/// Contents of the file passed with `--config`. Every key is optional and
/// command-line flags take precedence over it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigToml {
    pub spark: SparkToml,
    pub hist: HistToml,
    pub bar: BarToml,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SparkToml {
    pub refresh_interval_ms: Option<u64>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HistToml {
    pub bins: Option<usize>,
    pub width: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BarToml {
    pub width: Option<usize>,
}

impl ConfigToml {
    /// Reads `path`, or returns the defaults when no file was named.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn refresh_interval(&self, flag: Option<u64>) -> Duration {
        flag.or(self.spark.refresh_interval_ms)
            .map_or(ADAPTER_REFRESH_INTERVAL, Duration::from_millis)
    }

    pub fn unit(&self, flag: Option<String>) -> Unit {
        flag.or_else(|| self.spark.unit.clone())
            .map(Unit::from)
            .unwrap_or_default()
    }

    pub fn hist_bins(&self, flag: Option<usize>) -> usize {
        flag.or(self.hist.bins).unwrap_or(DEFAULT_BINS)
    }

    pub fn hist_width(&self, flag: Option<usize>) -> usize {
        flag.or(self.hist.width).unwrap_or(DEFAULT_WIDTH)
    }

    pub fn bar_width(&self, flag: Option<usize>) -> usize {
        flag.or(self.bar.width).unwrap_or(DEFAULT_WIDTH)
    }
}
