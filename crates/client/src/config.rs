//! Terminal host configuration.
use std::env;
use std::path::PathBuf;

use coords_core::Platform;
use directories::ProjectDirs;

/// Settings for the simulated game the overlay runs in.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding the overlay's config and output file.
    pub mod_dir: PathBuf,
    pub platform: Platform,
    pub zoom_level: f32,
    pub map: MapConfig,
    /// Whether the host offers a settings menu to the overlay.
    pub settings_menu: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            mod_dir: default_mod_dir(),
            platform: Platform::Desktop,
            zoom_level: 1.0,
            map: MapConfig::default(),
            settings_menu: true,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `COORDS_MOD_DIR` - Overlay directory (default: platform data dir)
    /// - `COORDS_PLATFORM` - `desktop` or `android` (default: desktop)
    /// - `COORDS_ZOOM` - Zoom level applied to the tile highlight (default: 1.0)
    /// - `COORDS_MAP_WIDTH` - Farm width in tiles (default: 80)
    /// - `COORDS_MAP_HEIGHT` - Farm height in tiles (default: 65)
    /// - `COORDS_SETTINGS_MENU` - Offer a settings menu (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("COORDS_MOD_DIR") {
            config.mod_dir = PathBuf::from(dir);
        }

        if let Some(platform) = read_env::<Platform>("COORDS_PLATFORM") {
            config.platform = platform;
        }

        if let Some(zoom) = read_env::<f32>("COORDS_ZOOM")
            && zoom > 0.0
        {
            config.zoom_level = zoom;
        }

        if let Some(width) = read_env::<i32>("COORDS_MAP_WIDTH") {
            config.map.width = width.max(1);
        }
        if let Some(height) = read_env::<i32>("COORDS_MAP_HEIGHT") {
            config.map.height = height.max(1);
        }

        if let Some(enabled) = read_env_bool("COORDS_SETTINGS_MENU") {
            config.settings_menu = enabled;
        }

        config
    }
}

/// Size of the starting location.
#[derive(Clone, Copy, Debug)]
pub struct MapConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 65,
        }
    }
}

fn default_mod_dir() -> PathBuf {
    ProjectDirs::from("", "", "tile-coords")
        .map(|dirs| dirs.data_dir().join("mods").join("PlayerCoordinates"))
        .unwrap_or_else(|| PathBuf::from("./mods/PlayerCoordinates"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
