use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable is set but its value cannot be used.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        name: String,
        value: String,
        reason: String,
    },

    /// The requested infrastructure backend is known but no client for it is available.
    ///
    /// Raised while wiring the process so that selecting an unavailable backend fails
    /// at startup rather than on the first request.
    #[error("Infrastructure backend '{0}' is not available in this build")]
    UnsupportedBackend(String),
}
