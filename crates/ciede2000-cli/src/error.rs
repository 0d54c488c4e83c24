use std::num::ParseFloatError;

use ciede2000_core::LabError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("invalid number {arg:?}: {source}")]
    InvalidNumber {
        arg: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("expected two colors, got {0}")]
    ColorCount(usize),
    #[error(transparent)]
    Lab(#[from] LabError),
    #[error("failed to encode result: {0}")]
    Json(#[from] serde_json::Error),
}
