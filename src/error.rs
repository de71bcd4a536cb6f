use thiserror::Error;

/// Errors that can occur while driving the recipe core
#[derive(Error, Debug)]
pub enum ForkifyError {
    /// Failed to reach the recipe API
    #[error("Failed to fetch: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The recipe API answered, but not with something usable
    #[error("Recipe API error: {0}")]
    Api(String),

    /// Failed to (de)serialize persisted or fetched data
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Persistent store I/O failure
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persistent store rejected an operation
    #[error("Storage error: {0}")]
    Storage(String),

    /// No recipe is loaded for a command that needs one
    #[error("No active recipe")]
    NoActiveRecipe,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, ForkifyError>;
