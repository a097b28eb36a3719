use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but cannot be parsed into the expected type.
    ///
    /// Check the documentation or `.env.example` file for the expected format.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar { name: &'static str, value: String },
}
