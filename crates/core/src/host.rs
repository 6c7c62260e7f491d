//! Host management
//!
//! A host is a named S3-compatible storage endpoint: URL, credentials and
//! the API signature version used to sign requests against it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigStore, FileConfigStore};
use crate::error::{Error, Result};

/// API signature version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Api {
    /// AWS Signature Version 4
    #[default]
    S3v4,
    /// AWS Signature Version 2
    S3v2,
}

impl Api {
    pub const fn as_str(self) -> &'static str {
        match self {
            Api::S3v4 => "S3v4",
            Api::S3v2 => "S3v2",
        }
    }

    /// Resolve an optional command-line API argument.
    ///
    /// An empty string selects the default, S3v4.
    pub fn from_arg(arg: &str) -> Result<Self> {
        if arg.is_empty() {
            return Ok(Api::default());
        }
        arg.parse()
    }
}

impl FromStr for Api {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "S3v4" => Ok(Api::S3v4),
            "S3v2" => Ok(Api::S3v2),
            other => Err(Error::InvalidApi(other.to_string())),
        }
    }
}

impl fmt::Display for Api {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection details stored for one alias
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Endpoint URL
    pub url: String,

    /// Access key ID, empty for anonymous access
    #[serde(default)]
    pub access_key: String,

    /// Secret access key, empty for anonymous access
    #[serde(default)]
    pub secret_key: String,

    /// Signature version
    #[serde(default)]
    pub api: Api,
}

impl HostConfig {
    pub fn new(
        url: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        api: Api,
    ) -> Self {
        Self {
            url: url.into(),
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            api,
        }
    }
}

/// Add, remove and list hosts on top of a config store
pub struct HostManager<S = FileConfigStore> {
    store: S,
}

impl<S: ConfigStore> HostManager<S> {
    /// Create a HostManager over a specific store
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Add or overwrite a host.
    ///
    /// Returns the record previously stored under `alias`, if any.
    pub fn add(&self, alias: &str, host: HostConfig) -> Result<Option<HostConfig>> {
        let mut config = self.store.load()?;

        let previous = config.hosts.insert(alias.to_string(), host);
        if previous.is_some() {
            tracing::warn!(alias, "overwriting existing host");
        }

        self.store.save(&config)?;
        tracing::debug!(alias, "host added");
        Ok(previous)
    }

    /// Remove a host. Removing an unknown alias is not an error.
    pub fn remove(&self, alias: &str) -> Result<Option<HostConfig>> {
        let mut config = self.store.load()?;

        let removed = config.hosts.remove(alias);
        if removed.is_none() {
            tracing::debug!(alias, "host not present, nothing to remove");
        }

        self.store.save(&config)?;
        Ok(removed)
    }

    /// List all hosts, sorted lexically by alias
    pub fn list(&self) -> Result<Vec<(String, HostConfig)>> {
        let config = self.store.load()?;
        // BTreeMap iteration is already in alias order.
        Ok(config.hosts.into_iter().collect())
    }

    /// Get a host by alias
    pub fn get(&self, alias: &str) -> Result<HostConfig> {
        let mut config = self.store.load()?;
        config
            .hosts
            .remove(alias)
            .ok_or_else(|| Error::HostNotFound(alias.to_string()))
    }
}
