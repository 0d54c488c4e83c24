//! Environment-driven defaults for the command line.

/// Default number of decimal places in text output.
const DEFAULT_PRECISION: usize = 4;

/// Largest precision accepted for text output. An f64 carries 17
/// significant digits.
pub const MAX_PRECISION: usize = 17;

/// How the result record is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// ΔE₀₀ only, or one `key = value` line per quantity with `--verbose`.
    Text,
    /// The full result record as a JSON object.
    Json,
}

impl OutputFormat {
    fn from_env_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Runtime configuration read before argument parsing.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Output format when `--json` is not given.
    pub format: OutputFormat,
    /// Decimal places for text output.
    pub precision: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: std::env::var("CIEDE2000_FORMAT")
                .ok()
                .and_then(|s| OutputFormat::from_env_value(&s))
                .unwrap_or(OutputFormat::Text),
            precision: std::env::var("CIEDE2000_PRECISION")
                .ok()
                .and_then(|s| parse_precision(&s))
                .unwrap_or(DEFAULT_PRECISION),
        }
    }
}

/// Decimal places from an environment value; anything unparsable or above
/// [`MAX_PRECISION`] is ignored.
fn parse_precision(value: &str) -> Option<usize> {
    value
        .trim()
        .parse()
        .ok()
        .filter(|&precision| precision <= MAX_PRECISION)
}
