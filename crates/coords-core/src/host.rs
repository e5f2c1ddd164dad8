//! Host game surface the overlay depends on.
//!
//! The overlay never reaches into the game directly. An embedding host
//! implements [`Host`] and hands it to the [`EventBus`](crate::EventBus)
//! with every event.

use strum::{Display, EnumString};

use crate::coordinate::Vec2;
use crate::hud::Renderer;
use crate::settings::SettingsMenu;

/// Device family the host runs on; selects the HUD layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Platform {
    #[default]
    Desktop,
    Android,
}

/// Tile positions the tracker can follow.
pub trait TileSource {
    /// Tile the player stands on, in tile units.
    fn player_tile(&self) -> Vec2;
    /// Tile under the mouse cursor, in tile units.
    fn cursor_tile(&self) -> Vec2;
}

/// Everything the overlay asks of the running game.
pub trait Host: TileSource {
    /// True once a save is loaded and the player exists.
    fn is_world_ready(&self) -> bool;

    /// Name of the player's current location. May be empty.
    fn location_name(&self) -> &str;

    /// Top-left of the visible area in world pixels.
    fn viewport(&self) -> Vec2;

    fn zoom_level(&self) -> f32;

    /// Edge length of one tile in world pixels.
    fn tile_size(&self) -> i32 {
        64
    }

    fn platform(&self) -> Platform {
        Platform::Desktop
    }

    /// Shows a short message to the player.
    fn show_global_message(&mut self, message: &str);

    /// Draw target for the current HUD pass.
    fn renderer(&mut self) -> &mut dyn Renderer;

    /// Generic settings menu, when the player has one installed.
    fn settings_menu(&mut self) -> Option<&mut dyn SettingsMenu> {
        None
    }
}
