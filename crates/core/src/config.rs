//! Configuration management
//!
//! This module handles loading and saving the mc configuration document.
//! The document is stored in TOML format at `<config dir>/mc/config.toml`.
//!
//! PROTECTED FILE: Changes to CONFIG_VERSION require migration support.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::host::HostConfig;

/// Current configuration document version
pub const CONFIG_VERSION: &str = "8";

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "MC_CONFIG_DIR";

/// File name of the configuration document inside the config directory
const CONFIG_FILE: &str = "config.toml";

/// The persisted configuration document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Document version
    pub version: String,

    /// Configured hosts, keyed by alias
    #[serde(default)]
    pub hosts: BTreeMap<String, HostConfig>,
}

impl Default for ConfigDocument {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            hosts: BTreeMap::new(),
        }
    }
}

/// Load/save access to the configuration document
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStore {
    /// Read the full document
    fn load(&self) -> Result<ConfigDocument>;

    /// Replace the stored document
    fn save(&self, config: &ConfigDocument) -> Result<()>;
}

/// Configuration store backed by a TOML file
#[derive(Debug)]
pub struct FileConfigStore {
    config_path: PathBuf,
}

impl FileConfigStore {
    /// Create a store at the default config path
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".into()))?;
        Ok(Self::in_dir(config_dir.join("mc")))
    }

    /// Create a store whose document lives in `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            config_path: dir.into().join(CONFIG_FILE),
        }
    }

    /// Create a store with a custom file path (useful for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the configuration file path
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }
}

impl ConfigStore for FileConfigStore {
    /// Load configuration from disk
    ///
    /// If the configuration file doesn't exist, returns a default document.
    fn load(&self) -> Result<ConfigDocument> {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "config not found, using defaults");
            return Ok(ConfigDocument::default());
        }

        let content = std::fs::read_to_string(&self.config_path)?;
        let config: ConfigDocument = toml::from_str(&content)?;

        if config.version != CONFIG_VERSION {
            return Err(Error::Config(format!(
                "Unsupported config version ‘{}’ in ‘{}’, expected ‘{}’.",
                config.version,
                self.config_path.display(),
                CONFIG_VERSION
            )));
        }

        tracing::debug!(
            path = %self.config_path.display(),
            hosts = config.hosts.len(),
            "config loaded"
        );
        Ok(config)
    }

    /// Save configuration to disk
    ///
    /// Creates parent directories if they don't exist.
    /// Sets file permissions to 600 (owner read/write only).
    fn save(&self, config: &ConfigDocument) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(config)?;
        std::fs::write(&self.config_path, content)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&self.config_path, permissions)?;
        }

        tracing::debug!(path = %self.config_path.display(), "config saved");
        Ok(())
    }
}

/// In-memory configuration store
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    config: Mutex<ConfigDocument>,
}

impl MemoryConfigStore {
    pub fn new(config: ConfigDocument) -> Self {
        Self {
            config: Mutex::new(config),
        }
    }

    /// Copy of the currently stored document
    pub fn snapshot(&self) -> ConfigDocument {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ConfigDocument> {
        // A poisoned lock still holds a complete document.
        self.config.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Result<ConfigDocument> {
        Ok(self.snapshot())
    }

    fn save(&self, config: &ConfigDocument) -> Result<()> {
        *self.lock() = config.clone();
        Ok(())
    }
}
