use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::window::CutoffMode;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: Display,
    #[serde(default)]
    pub stats: StatsSettings,
    #[serde(default)]
    pub storage: Storage,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Display {
    #[serde(default = "default_weight_unit")]
    pub weight_unit: String,
    #[serde(default = "default_range")]
    pub default_range: String,
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_weight_unit() -> String {
    "lbs".to_string()
}
fn default_range() -> String {
    "W".to_string()
}
fn default_recent_limit() -> usize {
    10
}

impl Default for Display {
    fn default() -> Self {
        Self {
            weight_unit: default_weight_unit(),
            default_range: default_range(),
            recent_limit: default_recent_limit(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StatsSettings {
    #[serde(default)]
    pub cutoff: CutoffMode,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Storage {
    /// Keep the previous collection in a backup slot on every save.
    #[serde(default = "default_backup")]
    pub backup: bool,
}

fn default_backup() -> bool {
    true
}

impl Default for Storage {
    fn default() -> Self {
        Self {
            backup: default_backup(),
        }
    }
}

impl Config {
    /// Load config from the standard path, or return defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the standard path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(parent, std::fs::Permissions::from_mode(0o700))?;
            }
        }
        let contents = toml::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::fs::{self, OpenOptions};
            use std::io::Write;
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut options = OpenOptions::new();
            options.write(true).create(true).truncate(true).mode(0o600);
            let mut file = options.open(&path)?;
            file.write_all(contents.as_bytes())?;

            // Files created before this version may carry wider permissions.
            let mut perms = file.metadata()?.permissions();
            if perms.mode() & 0o777 != 0o600 {
                perms.set_mode(0o600);
                fs::set_permissions(&path, perms)?;
            }
        }
        #[cfg(not(unix))]
        {
            std::fs::write(&path, contents)?;
        }

        Ok(())
    }

    /// Apply a `section.key` assignment from the command line.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "display.weight_unit" => self.display.weight_unit = value.to_string(),
            "display.default_range" => self.display.default_range = value.to_string(),
            "display.recent_limit" => self.display.recent_limit = value.parse()?,
            "stats.cutoff" => self.stats.cutoff = value.parse()?,
            "storage.backup" => self.storage.backup = value.parse()?,
            _ => anyhow::bail!("unknown config key: {}", key),
        }
        Ok(())
    }

    pub fn data_dir() -> PathBuf {
        if let Ok(home) = std::env::var("BODYBOOK_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".bodybook")
    }

    pub fn path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    pub fn db_path() -> PathBuf {
        Self::data_dir().join("data.db")
    }
}
