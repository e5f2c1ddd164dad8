//! Overlay configuration and its JSON file.
//!
//! The config lives next to the output file as `config.json`. A missing file
//! is created with defaults on first load; missing fields fall back to their
//! defaults so older files keep working.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::error::{ConfigError, Result};
use crate::key::Key;

/// File name of the overlay configuration inside the mod directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Key bindings and logging options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModConfig {
    /// Shows or hides the coordinate HUD.
    #[serde(rename = "CoordinateHUDToggle")]
    pub coordinate_hud_toggle: Key,
    /// Appends the current coordinates to the output file.
    pub log_coordinates: Key,
    /// Switches between player and cursor tracking.
    pub switch_to_cursor_coords: Key,
    /// Whether logged lines name the tracking target.
    pub log_tracking_target: bool,
}

impl Default for ModConfig {
    fn default() -> Self {
        Self {
            coordinate_hud_toggle: Key::F(8),
            log_coordinates: Key::F(9),
            switch_to_cursor_coords: Key::F(10),
            log_tracking_target: true,
        }
    }
}

impl ModConfig {
    /// Path of the config file inside `mod_dir`.
    pub fn path_in(mod_dir: impl AsRef<Path>) -> PathBuf {
        mod_dir.as_ref().join(CONFIG_FILE_NAME)
    }

    /// Reads the config from `mod_dir`, writing defaults first if the file
    /// does not exist yet.
    pub fn load_or_create(mod_dir: impl AsRef<Path>) -> Result<Self> {
        let path = Self::path_in(&mod_dir);

        if !path.exists() {
            let config = Self::default();
            config.save(&mod_dir)?;
            tracing::debug!("Created default config: {}", path.display());
            return Ok(config);
        }

        let contents = fs::read_to_string(&path)?;
        let config = serde_json::from_str(&contents)?;
        tracing::debug!("Loaded config: {}", path.display());
        Ok(config)
    }

    /// Writes the config to `mod_dir` as pretty-printed JSON.
    pub fn save(&self, mod_dir: impl AsRef<Path>) -> Result<()> {
        let path = Self::path_in(mod_dir);
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        Ok(())
    }

    pub fn get(&self, option: ConfigOption) -> OptionValue {
        match option {
            ConfigOption::LogTrackingTarget => OptionValue::Bool(self.log_tracking_target),
            ConfigOption::HudToggleKey => OptionValue::Key(self.coordinate_hud_toggle),
            ConfigOption::LogCoordinatesKey => OptionValue::Key(self.log_coordinates),
            ConfigOption::SwitchTargetKey => OptionValue::Key(self.switch_to_cursor_coords),
        }
    }

    /// Updates one option. The value kind must match the option.
    ///
    /// Keys are stored in the form they reload as; keys without a config
    /// name are rejected.
    pub fn set(&mut self, option: ConfigOption, value: OptionValue) -> Result<()> {
        let value = match value {
            OptionValue::Key(key) => OptionValue::Key(
                key.normalized()
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?,
            ),
            other => other,
        };

        match (option, value) {
            (ConfigOption::LogTrackingTarget, OptionValue::Bool(enabled)) => {
                self.log_tracking_target = enabled;
            }
            (ConfigOption::HudToggleKey, OptionValue::Key(key)) => {
                self.coordinate_hud_toggle = key;
            }
            (ConfigOption::LogCoordinatesKey, OptionValue::Key(key)) => {
                self.log_coordinates = key;
            }
            (ConfigOption::SwitchTargetKey, OptionValue::Key(key)) => {
                self.switch_to_cursor_coords = key;
            }
            (option, value) => {
                return Err(ConfigError::OptionType {
                    option,
                    found: value.kind(),
                });
            }
        }
        Ok(())
    }
}

/// Options exposed to an external settings menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ConfigOption {
    #[strum(to_string = "Log Tracking Target")]
    LogTrackingTarget,
    #[strum(to_string = "HUD Toggle")]
    HudToggleKey,
    #[strum(to_string = "Log Co-ordinates")]
    LogCoordinatesKey,
    #[strum(to_string = "Toggle Tracking Target")]
    SwitchTargetKey,
}

impl ConfigOption {
    pub fn tooltip(self) -> &'static str {
        match self {
            ConfigOption::LogTrackingTarget => {
                "Whether the log names the player or the cursor as the source of each co-ordinate."
            }
            ConfigOption::HudToggleKey => "The key used to toggle the co-ordinate HUD.",
            ConfigOption::LogCoordinatesKey => {
                "The key used to log the current co-ordinates to file."
            }
            ConfigOption::SwitchTargetKey => {
                "The key used to toggle between tracking the cursor and the player's co-ordinates."
            }
        }
    }
}

/// Value of a [`ConfigOption`] as seen by a settings menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionValue {
    Bool(bool),
    Key(Key),
}

impl OptionValue {
    pub const fn kind(self) -> &'static str {
        match self {
            OptionValue::Bool(_) => "bool",
            OptionValue::Key(_) => "key",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_creates_default_file() {
        let temp_dir = TempDir::new().unwrap();

        let config = ModConfig::load_or_create(temp_dir.path()).unwrap();

        assert_eq!(config, ModConfig::default());
        assert!(ModConfig::path_in(temp_dir.path()).exists());
    }

    #[test]
    fn save_then_load_keeps_changes() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = ModConfig::default();
        config.log_coordinates = Key::char('l');
        config.log_tracking_target = false;

        config.save(temp_dir.path()).unwrap();
        let loaded = ModConfig::load_or_create(temp_dir.path()).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            ModConfig::path_in(temp_dir.path()),
            r#"{ "LogCoordinates": "F2" }"#,
        )
        .unwrap();

        let config = ModConfig::load_or_create(temp_dir.path()).unwrap();

        assert_eq!(config.log_coordinates, Key::F(2));
        assert_eq!(config.coordinate_hud_toggle, Key::F(8));
        assert!(config.log_tracking_target);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(ModConfig::path_in(temp_dir.path()), "{ not json").unwrap();

        assert!(matches!(
            ModConfig::load_or_create(temp_dir.path()),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn set_rejects_mismatched_value() {
        let mut config = ModConfig::default();

        let result = config.set(ConfigOption::HudToggleKey, OptionValue::Bool(true));

        assert!(matches!(
            result,
            Err(ConfigError::OptionType { found: "bool", .. })
        ));
        assert_eq!(config, ModConfig::default());
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut config = ModConfig::default();

        config
            .set(ConfigOption::SwitchTargetKey, OptionValue::Key(Key::Tab))
            .unwrap();

        assert_eq!(
            config.get(ConfigOption::SwitchTargetKey),
            OptionValue::Key(Key::Tab)
        );
    }

    #[test]
    fn set_rejects_keys_that_cannot_be_reloaded() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = ModConfig::default();

        assert!(matches!(
            config.set(ConfigOption::LogCoordinatesKey, OptionValue::Key(Key::F(20))),
            Err(ConfigError::UnknownKey(_))
        ));
        config
            .set(ConfigOption::HudToggleKey, OptionValue::Key(Key::Char('q')))
            .unwrap();
        config.save(temp_dir.path()).unwrap();

        let loaded = ModConfig::load_or_create(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.coordinate_hud_toggle, Key::Char('Q'));
        assert_eq!(loaded.log_coordinates, Key::F(9));
    }
}
