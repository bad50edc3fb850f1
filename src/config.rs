//! Shell configuration: TOML file, `.env`, then environment overrides

use anyhow::{Context, Result};
use relief_core::CostModel;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "relief.toml";

/// Environment file loaded before configuration is read.
pub const ENV_FILE: &str = ".env";

/// Load variables from an env file into the process environment.
///
/// A missing file is ignored. Any other failure is returned as a message
/// for the caller to log once logging is up.
pub fn load_env_file(path: &Path) -> Option<String> {
    match dotenvy::from_path(path) {
        Ok(()) => None,
        Err(e) if e.not_found() => None,
        Err(e) => Some(format!("Ignoring unreadable {}: {}", path.display(), e)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Shared secret for the admin role
    pub admin_secret: String,
    /// Shared secret for the user role
    pub user_secret: String,
    /// Log level for the `relief` targets
    pub log_level: String,
    /// Factors for camp-head cost assignment
    pub cost: CostModel,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            admin_secret: "0000".to_string(),
            user_secret: "user_password".to_string(),
            log_level: "info".to_string(),
            cost: CostModel::default(),
        }
    }
}

impl ShellConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist; without one, `relief.toml` in the
    /// working directory is used if present. Environment variables
    /// override file values.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default = PathBuf::from(CONFIG_FILE);
                if default.exists() {
                    Self::from_file(&default)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Apply `RELIEF_*` overrides from `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(secret) = lookup("RELIEF_ADMIN_SECRET") {
            self.admin_secret = secret;
        }
        if let Some(secret) = lookup("RELIEF_USER_SECRET") {
            self.user_secret = secret;
        }
        if let Some(level) = lookup("RELIEF_LOG") {
            self.log_level = level;
        }
    }
}
