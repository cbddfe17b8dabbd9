pub mod logger;
pub mod markdown;
