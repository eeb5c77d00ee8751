// File: crates/crosshair-core/src/error.rs
// Summary: Error types for configuration parsing; runtime crosshair operations do not fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid crosshair options: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unrecognized color '{0}'")]
    Color(String),
    #[error("unrecognized font '{0}'")]
    Font(String),
    #[error("unrecognized axis key '{0}'")]
    AxisKey(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
