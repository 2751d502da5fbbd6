//! User settings for splitpal
//!
//! Manages user preferences: currency symbol, the avatar placeholder base
//! URL, and the roster of friends seeded into the ledger at startup.
//! Ledger state itself (balances, added friends) is deliberately never
//! persisted; only these preferences are.

use serde::{Deserialize, Serialize};

use super::paths::SplitpalPaths;
use crate::error::SplitpalError;

/// A friend entry seeded into the ledger at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedFriend {
    /// Display name
    pub name: String,

    /// Avatar image URL; the avatar base URL is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Starting balance in whole currency units
    #[serde(default)]
    pub balance: i64,
}

impl SeedFriend {
    fn new(name: &str, balance: i64) -> Self {
        Self {
            name: name.to_string(),
            image: None,
            balance,
        }
    }
}

/// User settings for splitpal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol appended to amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Base URL for avatar placeholders
    #[serde(default = "default_avatar_base_url")]
    pub avatar_base_url: String,

    /// Friends seeded into the ledger at startup
    #[serde(default = "default_seed_friends")]
    pub seed_friends: Vec<SeedFriend>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_avatar_base_url() -> String {
    "https://i.pravatar.cc/48".to_string()
}

fn default_seed_friends() -> Vec<SeedFriend> {
    vec![
        SeedFriend::new("Clark", -7),
        SeedFriend::new("Sarah", 20),
        SeedFriend::new("Anthony", 0),
    ]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            avatar_base_url: default_avatar_base_url(),
            seed_friends: default_seed_friends(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SplitpalPaths) -> Result<Self, SplitpalError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SplitpalError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SplitpalError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SplitpalPaths) -> Result<(), SplitpalError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SplitpalError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| SplitpalError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Resolve a seed friend's image URL, falling back to the avatar base URL
    pub fn seed_image(&self, seed: &SeedFriend) -> String {
        seed.image
            .clone()
            .unwrap_or_else(|| self.avatar_base_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.avatar_base_url, "https://i.pravatar.cc/48");

        let names: Vec<_> = settings
            .seed_friends
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, ["Clark", "Sarah", "Anthony"]);
        assert_eq!(settings.seed_friends[0].balance, -7);
        assert_eq!(settings.seed_friends[1].balance, 20);
        assert_eq!(settings.seed_friends[2].balance, 0);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitpalPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "$".to_string();
        settings.seed_friends = vec![SeedFriend::new("Lois", 5)];

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.seed_friends.len(), 1);
        assert_eq!(loaded.seed_friends[0].name, "Lois");
        assert_eq!(loaded.seed_friends[0].balance, 5);
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitpalPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.seed_friends.len(), 3);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitpalPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "$"}"#).unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.avatar_base_url, "https://i.pravatar.cc/48");
        assert_eq!(settings.seed_friends.len(), 3);
    }

    #[test]
    fn test_seed_image_fallback() {
        let settings = Settings::default();

        let bare = SeedFriend::new("Lois", 0);
        assert_eq!(settings.seed_image(&bare), settings.avatar_base_url);

        let mut custom = SeedFriend::new("Jimmy", 0);
        custom.image = Some("https://example.com/jimmy.png".to_string());
        assert_eq!(settings.seed_image(&custom), "https://example.com/jimmy.png");
    }
}
