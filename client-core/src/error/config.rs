use common::ErrorLocation;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config Validation Error: {reason} {location}")]
    ValidationError {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Config Environment Error: {reason} {location}")]
    Environment {
        reason: String,
        location: ErrorLocation,
    },
}
