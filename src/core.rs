use std::path::Path;

use thiserror::Error;

/// Errors raised while building or configuring a player instance.
#[derive(Error, Debug)]
pub enum PlayheadError {
    /// Configuration value rejected during validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Underlying IO failure while reading a configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML document failed to parse.
    #[error("{0}")]
    TomlParse(String),
}

/// Crate-level result alias.
pub type Result<T> = std::result::Result<T, PlayheadError>;

impl PlayheadError {
    /// Build a TOML parse error, naming the offending file when known.
    pub fn toml_parse(error: impl std::fmt::Display, path: Option<&Path>) -> Self {
        match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                PlayheadError::TomlParse(format!(
                    "Failed to parse TOML at {:?}: {}",
                    clean_path, error
                ))
            }
            None => PlayheadError::TomlParse(format!("Failed to parse TOML: {}", error)),
        }
    }
}
