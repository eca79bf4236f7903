pub mod api;
pub mod catalog;
pub mod config;
pub mod embeddings;
pub mod errors;
pub mod logging;
pub mod matcher;

#[cfg(test)]
mod config_tests;

pub use catalog::Catalog;
pub use catalog::QaEntry;
pub use config::AppConfig;
pub use errors::*;
pub use matcher::Matcher;
pub use matcher::FALLBACK_REPLY;
