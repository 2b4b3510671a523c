use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub profile: ProfileConfig,
    pub display: DisplayConfig,
}

/// Where the profile lives and how a fresh one is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Override the default save file location.
    pub path: Option<PathBuf>,
    /// Name used when no save file exists yet.
    pub default_name: String,
    /// Birth date (YYYY-MM-DD) used when no save file exists yet.
    pub default_birth_date: String,
}

/// Card and view rendering options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Total card width including borders.
    pub card_width: u16,
    /// Number of cells in an attribute bar.
    pub bar_width: u16,
    /// Log entries shown on the card.
    pub recent_entries: usize,
    /// Set to false to force plain text output.
    pub color: bool,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            path: None,
            default_name: "艾利克斯".to_string(),
            default_birth_date: "1995-08-15".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            card_width: 70,
            bar_width: 28,
            recent_entries: 4,
            color: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/lifewappen/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, with the same fallback rules.
    pub fn load_from(config_path: &Path) -> Self {
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse config at {}: {e}; using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!(
                    "No config file at {}; using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    /// Resolved data directory (XDG default).
    pub fn data_dir(&self) -> PathBuf {
        dirs::data_dir()
            .map(|d| d.join("lifewappen"))
            .unwrap_or_else(|| PathBuf::from("data"))
    }

    /// Save file location: config override or `<data_dir>/profile.json`.
    pub fn profile_path(&self) -> PathBuf {
        self.profile
            .path
            .clone()
            .unwrap_or_else(|| self.data_dir().join("profile.json"))
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("lifewappen").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
