use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, VaultError};

/// Where the vault file lives, optionally loaded from a TOML file.
///
/// Every field has a sensible default so PassVault works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory (relative to the user's home) holding the vault file.
    #[serde(default = "default_vault_dir")]
    pub vault_dir: String,

    /// File name of the vault inside `vault_dir`.
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_dir() -> String {
    ".vaultdir".to_string()
}

fn default_file_name() -> String {
    "passwords.enc".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_dir: default_vault_dir(),
            file_name: default_file_name(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            VaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Build the full path to the vault file under `home`.
    ///
    /// Example: `/home/user/.vaultdir/passwords.enc`
    pub fn vault_path(&self, home: &Path) -> PathBuf {
        home.join(&self.vault_dir).join(&self.file_name)
    }

    /// Build the vault path under the current user's home directory.
    pub fn default_vault_path(&self) -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| {
            VaultError::ConfigError("cannot determine the home directory".into())
        })?;
        Ok(self.vault_path(&home))
    }
}

// ── Tests ────────────────────────────────────────────────────────────
