//! mc-core: Core library for the mc `config host` commands
//!
//! This crate provides:
//! - Input validators for aliases, URLs, credentials and API versions
//! - The versioned configuration document and its stores
//! - Host management (add, remove, list)
//!
//! The store is passed explicitly, so callers can swap the TOML file for an
//! in-memory document in tests.

pub mod config;
pub mod error;
pub mod host;
pub mod validate;

pub use config::{
    CONFIG_DIR_ENV, CONFIG_VERSION, ConfigDocument, ConfigStore, FileConfigStore,
    MemoryConfigStore,
};
pub use error::{Error, Result};
pub use host::{Api, HostConfig, HostManager};
