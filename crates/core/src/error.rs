//! Error types for mc-core
//!
//! Every error is terminal for a `config host` invocation; the CLI reports it
//! and exits non-zero.

use thiserror::Error;

/// Result type alias for mc-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for mc-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Alias does not match the allowed syntax
    #[error("Invalid alias ‘{0}’.")]
    InvalidAlias(String),

    /// Host URL is not an absolute http(s) URL
    #[error("Invalid URL ‘{0}’.")]
    InvalidUrl(String),

    /// Access key has the wrong shape
    #[error("Invalid access key ‘{0}’.")]
    InvalidAccessKey(String),

    /// Secret key has the wrong shape
    #[error("Invalid secret key ‘{0}’.")]
    InvalidSecretKey(String),

    /// API signature is neither S3v4 nor S3v2
    #[error("Unrecognized API signature ‘{0}’. Valid options are ‘[S3v4, S3v2]’.")]
    InvalidApi(String),

    /// Host alias not present in the configuration
    #[error("Host not found: {0}")]
    HostNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}
