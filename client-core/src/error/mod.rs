pub mod api_client;
pub mod config;
pub mod logger;

pub use api_client::ApiClientError;
pub use config::ConfigError;
pub use logger::LoggerError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    ApiClient(#[from] api_client::ApiClientError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Logger(#[from] logger::LoggerError),
}
