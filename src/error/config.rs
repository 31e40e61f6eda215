use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot cannot start without this variable. Check the `.env` file or the
    /// hosting platform's environment settings.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    ///
    /// Discord ids must be non-zero unsigned integers and the port must fit in a u16.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// The raw value read from the environment
        value: String,
        /// Why the value was rejected
        reason: String,
    },
}
