pub mod api_client;
pub mod config;
pub mod error;
pub mod logger;
pub mod markdown;
pub mod token_store;

#[cfg(test)]
mod tests;

pub const DASHBOARD_API_HOSTNAME: &str = "localhost";
pub const DASHBOARD_API_DEFAULT_PORT: &str = "8000";
pub const DASHBOARD_API_DEFAULT_BASE_URL: &str = const_format::concatcp!(
    "http://",
    DASHBOARD_API_HOSTNAME,
    ":",
    DASHBOARD_API_DEFAULT_PORT,
    "/api/"
);
