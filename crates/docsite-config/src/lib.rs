pub mod config;
pub mod error;
pub mod index;
pub mod markdown;
pub mod page;
pub mod templates;

pub use config::Config;
pub use error::ConfigError;
