//! Registration with an optional external settings menu.
//!
//! A menu only learns which options exist. Reading, writing, resetting and
//! persisting values go back through
//! [`CoordinateOverlay`](crate::CoordinateOverlay) so the overlay stays the
//! single owner of its config.

use strum::IntoEnumIterator;

use crate::config::{ConfigOption, ModConfig, OptionValue};

/// Unique id the overlay registers itself under.
pub const MOD_ID: &str = "coords.PlayerCoordinates";

/// Generic settings menu provided by another add-on.
pub trait SettingsMenu {
    /// Announces the overlay as a configurable mod.
    fn register_mod(&mut self, mod_id: &str);

    fn register_bool_option(&mut self, mod_id: &str, option: ConfigOption, tooltip: &str);

    fn register_key_option(&mut self, mod_id: &str, option: ConfigOption, tooltip: &str);
}

/// Registers every [`ConfigOption`] with `menu`, returning how many were added.
pub fn register_options(menu: &mut dyn SettingsMenu, config: &ModConfig) -> usize {
    menu.register_mod(MOD_ID);

    let mut registered = 0;
    for option in ConfigOption::iter() {
        match config.get(option) {
            OptionValue::Bool(_) => menu.register_bool_option(MOD_ID, option, option.tooltip()),
            OptionValue::Key(_) => menu.register_key_option(MOD_ID, option, option.tooltip()),
        }
        registered += 1;
    }

    tracing::debug!(mod_id = MOD_ID, registered, "Registered settings options");
    registered
}
