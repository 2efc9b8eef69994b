use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{PassVaultError, Result};

/// Vault-level configuration, loaded from `passvault.toml` inside the
/// data directory.
///
/// Every field has a sensible default so PassVault works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// File name of the SQLite database inside the data directory.
    #[serde(default = "default_database_file")]
    pub database_file: String,

    /// Category assigned to new entries when none is given.
    #[serde(default = "default_category")]
    pub default_category: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_database_file() -> String {
    "passwords.db".to_string()
}

fn default_category() -> String {
    "General".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_file: default_database_file(),
            default_category: default_category(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the data directory.
    const FILE_NAME: &'static str = "passvault.toml";

    /// Load settings from `<data_dir>/passvault.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config_path = data_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PassVaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Build the full path to the database file.
    ///
    /// Example: `~/.passvault/passwords.db`
    pub fn db_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.database_file)
    }
}

/// The default data directory: `~/.passvault`.
pub fn default_data_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| PassVaultError::ConfigError("cannot determine home directory".into()))?;
    Ok(home.join(".passvault"))
}

// ── Tests ────────────────────────────────────────────────────────────
