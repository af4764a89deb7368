//! Typed error variants for the tabsplit-config crate.
//!
//! Callers that only need a message can convert into `anyhow::Error`; callers
//! that want to react to a specific failure can match on [`ConfigError`].

use thiserror::Error;

/// Errors that can occur when loading, saving or validating a layout config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string names the offending field and the accepted range.
    #[error("Config validation error: {0}")]
    Validation(String),
}
