//! Configuration file support for Liftday.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/liftday/config.toml`.
//! It carries profile overrides applied to the seeded default user; the
//! workout catalog, the weekly plan and the 60-second rest countdown are
//! policy, not configuration, and have no keys here.

use crate::types::User;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub user: UserConfig,
}

/// User profile overrides
///
/// Every field is optional; unset fields keep the seeded default.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct UserConfig {
    pub name: Option<String>,
    /// Body weight in pounds
    pub weight: Option<u32>,
    /// Height in total inches
    pub height: Option<u32>,
    pub age: Option<u32>,
    pub goals: Option<String>,
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("liftday").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Apply the profile overrides to a user record
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.user.name {
            user.name = name.clone();
        }
        if let Some(weight) = self.user.weight {
            user.weight = weight;
        }
        if let Some(height) = self.user.height {
            user.height = height;
        }
        if let Some(age) = self.user.age {
            user.age = age;
        }
        if let Some(goals) = &self.user.goals {
            user.goals = Some(goals.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::default_user;

    #[test]
    fn test_default_config_changes_nothing() {
        let config = Config::default();
        let mut user = default_user();
        let before = user.clone();
        config.apply_to(&mut user);
        assert_eq!(user.name, before.name);
        assert_eq!(user.weight, before.weight);
        assert_eq!(user.height, before.height);
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.user.name = Some("Alex".into());
        config.user.weight = Some(165);

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.user.name.as_deref(), Some("Alex"));
        assert_eq!(parsed.user.weight, Some(165));
        assert_eq!(parsed.user.height, None);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[user]
height = 70
"#;
        let config: Config = toml::from_str(toml_str).unwrap();

        let mut user = default_user();
        config.apply_to(&mut user);
        assert_eq!(user.height, 70);
        assert_eq!(user.name, "Peter"); // default kept
    }

    #[test]
    fn test_load_save_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.user.age = Some(41);
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.user.age, Some(41));
    }
}
