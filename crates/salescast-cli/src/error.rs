use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] salescast_core::ValidationError),

    #[error(transparent)]
    Model(#[from] salescast_core::ModelError),

    #[error(transparent)]
    Forecast(#[from] salescast_core::ForecastError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Model(_) => 3,
            Self::Forecast(_) => 4,
            Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
