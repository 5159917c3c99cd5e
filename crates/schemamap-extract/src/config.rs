#![deny(unsafe_code)]

//! Client connection registry, loaded from a TOML file:
//!
//! ```toml
//! [clients.acme]
//! client_name = "Acme Corp"
//! host = "db.acme.internal"
//! port = 5432
//! database = "acme_erp"
//! user = "mapper"
//! password = "..."       # optional, falls back to SCHEMAMAP_PASSWORD_ACME
//! schema = "public"      # optional default schema filter
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use schemamap_model::ClientProfile;

use crate::error::{ExtractError, Result};

/// Environment variable naming the registry file when no path is given.
pub const REGISTRY_PATH_VAR: &str = "SCHEMAMAP_CLIENTS";

/// Registry file name used when neither a path nor the variable is set.
pub const DEFAULT_REGISTRY_PATH: &str = "clients.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct ClientRegistry {
    #[serde(default)]
    clients: BTreeMap<String, ClientConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub client_name: String,
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub database: String,
    pub user: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
}

fn default_port() -> u16 {
    5432
}

impl ClientRegistry {
    /// Load the registry from an explicit path, the `SCHEMAMAP_CLIENTS`
    /// variable, or `clients.toml`, in that order.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => std::env::var_os(REGISTRY_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_REGISTRY_PATH)),
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ExtractError::config_read(path, e))?;
        toml::from_str(&contents).map_err(|e| ExtractError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Configured client keys, sorted.
    pub fn client_keys(&self) -> Vec<&str> {
        self.clients.keys().map(String::as_str).collect()
    }

    /// Configured clients in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClientConfig)> {
        self.clients
            .iter()
            .map(|(key, config)| (key.as_str(), config))
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Resolve one client's connection settings.
    pub fn client(&self, key: &str) -> Result<&ClientConfig> {
        self.clients.get(key).ok_or_else(|| ExtractError::MissingClient {
            client: key.to_string(),
        })
    }

    /// The (key, name, database) triple stamped into generated documents.
    pub fn profile(&self, key: &str) -> Result<ClientProfile> {
        let config = self.client(key)?;
        Ok(ClientProfile {
            key: key.to_string(),
            name: config.client_name.clone(),
            database: config.database.clone(),
        })
    }
}

impl ClientConfig {
    /// Build PostgreSQL connection parameters. A password missing from the
    /// file is read from `SCHEMAMAP_PASSWORD_<KEY>` (key uppercased).
    pub fn pg_config(&self, key: &str) -> postgres::Config {
        let mut config = postgres::Config::new();
        config
            .host(&self.host)
            .port(self.port)
            .dbname(&self.database)
            .user(&self.user)
            .application_name("schemamap");
        if let Some(password) = self.password.clone().or_else(|| password_from_env(key)) {
            config.password(&password);
        }
        config
    }
}

fn password_from_env(key: &str) -> Option<String> {
    std::env::var(format!("SCHEMAMAP_PASSWORD_{}", key.to_uppercase())).ok()
}
