//! Domain error types.

/// Top-level error type for percentile_export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("cannot read {file}: {reason}")]
    CsvRead { file: String, reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("cannot encode output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("cannot locate program directory: {reason}")]
    Location { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&ExportError> for std::process::ExitCode {
    fn from(err: &ExportError) -> Self {
        let code: u8 = match err {
            ExportError::Io(_) | ExportError::Location { .. } => 1,
            ExportError::ConfigParse { .. } | ExportError::ConfigInvalid { .. } => 2,
            ExportError::CsvRead { .. } => 3,
            ExportError::Serialize(_) => 4,
        };
        std::process::ExitCode::from(code)
    }
}
