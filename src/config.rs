use std::path::Path;

use crate::error::ConfigError;
use crate::game::Player;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
}

/// Terminal UI options. Board dimensions are fixed and deliberately not
/// part of the configuration surface.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Keyboard poll timeout per frame, in milliseconds
    pub poll_interval_ms: u64,
    /// Render pieces as plain ASCII letters instead of Unicode discs
    pub ascii_pieces: bool,
    /// Which side opens the first game: "red" or "yellow"
    pub first_player: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            ui: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            poll_interval_ms: 100,
            ascii_pieces: false,
            first_player: "red".to_string(),
        }
    }
}

impl UiConfig {
    /// The configured opening player. Call `validate` first; an unknown
    /// name falls back to Red.
    pub fn first_player(&self) -> Player {
        match self.first_player.as_str() {
            "yellow" => Player::Yellow,
            _ => Player::Red,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.poll_interval_ms must be > 0".into(),
            ));
        }
        match self.ui.first_player.as_str() {
            "red" | "yellow" => {}
            other => {
                return Err(ConfigError::Validation(format!(
                    "ui.first_player must be 'red' or 'yellow', got '{other}'"
                )));
            }
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[ui]
ascii_pieces = true
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert!(config.ui.ascii_pieces);
        // Other fields should be defaults
        assert_eq!(config.ui.poll_interval_ms, 100);
        assert_eq!(config.ui.first_player, "red");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui.poll_interval_ms, 100);
        assert!(!config.ui.ascii_pieces);
    }

    #[test]
    fn test_validation_rejects_zero_poll_interval() {
        let mut config = AppConfig::default();
        config.ui.poll_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unknown_first_player() {
        let mut config = AppConfig::default();
        config.ui.first_player = "green".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_first_player_mapping() {
        let mut config = AppConfig::default();
        assert_eq!(config.ui.first_player(), Player::Red);
        config.ui.first_player = "yellow".to_string();
        assert_eq!(config.ui.first_player(), Player::Yellow);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.ui.poll_interval_ms, 100);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[ui]
poll_interval_ms = 50
first_player = "yellow"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.ui.poll_interval_ms, 50);
        assert_eq!(config.ui.first_player(), Player::Yellow);
        // Others are defaults
        assert!(!config.ui.ascii_pieces);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_config.toml");
        std::fs::write(&path, "[ui]\npoll_interval_ms = 0\n").unwrap();
        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
