use std::fmt;

/// Label controlling how the average rate is printed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Unit {
    /// Plain numbers, e.g. ` 12.500/s`.
    #[default]
    None,
    /// Humanized byte counts, e.g. ` 12MB/s`.
    Bytes,
    /// A caller-chosen suffix, e.g. ` 3.000req/s`.
    Custom(String),
}

impl Unit {
    pub const BYTES: &'static str = "bytes";
}

impl From<&str> for Unit {
    fn from(value: &str) -> Self {
        match value {
            "" => Unit::None,
            Unit::BYTES => Unit::Bytes,
            other => Unit::Custom(other.to_string()),
        }
    }
}

impl From<String> for Unit {
    fn from(value: String) -> Self {
        match value.as_str() {
            "" => Unit::None,
            Unit::BYTES => Unit::Bytes,
            _ => Unit::Custom(value),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::None => Ok(()),
            Unit::Bytes => f.write_str(Unit::BYTES),
            Unit::Custom(unit) => f.write_str(unit),
        }
    }
}
