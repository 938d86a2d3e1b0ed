//! Error types for forge-settings

/// Result type for forge-settings operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading the settings backing
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Namespace or object name not usable with the backing layout
    #[error("Invalid settings identifier: {value:?}")]
    InvalidIdentifier { value: String },

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML deserialization error
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
