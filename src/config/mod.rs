pub mod catalog_config;
#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, LocalStorage};
