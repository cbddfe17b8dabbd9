use common::ErrorLocation;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Logger File Error: {message} {location}")]
    File {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger Dispatch Error: {message} {location}")]
    Dispatch {
        message: String,
        location: ErrorLocation,
    },
}
