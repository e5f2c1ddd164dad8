//! The overlay controller: owns the config and tracking state and reacts to
//! host events.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::config::{ConfigOption, ModConfig, OptionValue};
use crate::error::Result;
use crate::event::{EventBus, EventKind, HostEvent};
use crate::host::Host;
use crate::hud::{self, HudFrame};
use crate::key::Key;
use crate::logger::{CoordinateLogger, LogRecord};
use crate::settings;
use crate::state::TrackingState;
use crate::tracker;

/// Message shown after a successful log write.
pub const LOGGED_MESSAGE: &str = "Co-ordinates logged.\nCheck the mod folder!";

/// Message shown when the log write failed.
pub const FAILED_MESSAGE: &str = "Failed to save co-ordinates.\nCheck the log for details.";

/// Result of a log request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogOutcome {
    /// HUD hidden or world not ready; nothing was written.
    Skipped,
    Logged,
    Failed,
}

/// Coordinate overlay bound to one mod directory.
#[derive(Debug)]
pub struct CoordinateOverlay {
    mod_dir: PathBuf,
    config: ModConfig,
    state: TrackingState,
    logger: CoordinateLogger,
    settings_registered: bool,
}

impl CoordinateOverlay {
    /// Creates an overlay with default config; the config file is read on
    /// [`HostEvent::GameLaunched`].
    pub fn new(mod_dir: impl Into<PathBuf>) -> Self {
        let mod_dir = mod_dir.into();
        let logger = CoordinateLogger::in_dir(&mod_dir);

        Self {
            mod_dir,
            config: ModConfig::default(),
            state: TrackingState::new(),
            logger,
            settings_registered: false,
        }
    }

    /// Subscribes the overlay's handlers to `bus`.
    pub fn register(bus: &mut EventBus<Self>) {
        bus.subscribe(EventKind::GameLaunched, "game_launched", Self::on_game_launched);
        bus.subscribe(EventKind::RenderedWorld, "update_current_map", Self::on_rendered_world);
        bus.subscribe(EventKind::RenderedHud, "draw_coordinates", Self::on_rendered_hud);
        bus.subscribe(EventKind::ButtonPressed, "button_pressed", Self::on_button_pressed);
    }

    pub fn mod_dir(&self) -> &Path {
        &self.mod_dir
    }

    pub fn config(&self) -> &ModConfig {
        &self.config
    }

    pub fn state(&self) -> &TrackingState {
        &self.state
    }

    pub fn logger(&self) -> &CoordinateLogger {
        &self.logger
    }

    pub fn settings_registered(&self) -> bool {
        self.settings_registered
    }

    fn on_game_launched(&mut self, host: &mut dyn Host, _event: &HostEvent) {
        self.config = match ModConfig::load_or_create(&self.mod_dir) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    target: "coords::overlay",
                    error = %e,
                    "Could not read config, using defaults"
                );
                ModConfig::default()
            }
        };

        match host.settings_menu() {
            Some(menu) => {
                settings::register_options(menu, &self.config);
                self.settings_registered = true;
            }
            None => info!(
                target: "coords::overlay",
                "No settings menu installed. Not an error."
            ),
        }
    }

    fn on_rendered_world(&mut self, host: &mut dyn Host, _event: &HostEvent) {
        if !host.is_world_ready() {
            self.state.clear_world();
            return;
        }

        tracker::update_map_name(&mut self.state, host.location_name());
    }

    fn on_rendered_hud(&mut self, host: &mut dyn Host, _event: &HostEvent) {
        if !self.is_world_ready(host) || !self.state.hud_visible {
            return;
        }

        tracker::update_coordinate(&mut self.state, &*host);

        let frame = HudFrame {
            platform: host.platform(),
            viewport: host.viewport(),
            zoom_level: host.zoom_level(),
            tile_size: host.tile_size(),
        };
        hud::draw_hud(host.renderer(), &self.state, &frame);
    }

    fn on_button_pressed(&mut self, host: &mut dyn Host, event: &HostEvent) {
        let HostEvent::ButtonPressed(key) = *event else {
            return;
        };
        self.handle_key(host, key);
    }

    /// Applies every binding matching `key`: HUD toggle, target switch, log.
    pub fn handle_key(&mut self, host: &mut dyn Host, key: Key) {
        if key == self.config.coordinate_hud_toggle {
            let visible = self.state.toggle_hud();
            debug!(target: "coords::overlay", visible, "Toggled HUD");
        }

        if key == self.config.switch_to_cursor_coords {
            let target = self.state.toggle_target();
            debug!(target: "coords::overlay", tracking_target = %target, "Switched tracking target");
        }

        if key == self.config.log_coordinates {
            self.log_current_coordinates(host);
        }
    }

    /// Appends the current coordinate to the output file and tells the player.
    pub fn log_current_coordinates(&mut self, host: &mut dyn Host) -> LogOutcome {
        if !self.state.hud_visible || !self.is_world_ready(host) {
            return LogOutcome::Skipped;
        }
        // The target may have switched since the last HUD pass.
        tracker::update_coordinate(&mut self.state, &*host);

        let Some(map_name) = self.state.map_name.as_deref() else {
            return LogOutcome::Skipped;
        };
        let coordinate = self.state.coordinate;
        let record = LogRecord {
            map_name,
            coordinate,
            target: self.state.coordinate_target,
            record_target: self.config.log_tracking_target,
        };

        if self.logger.log(&record) {
            host.show_global_message(LOGGED_MESSAGE);
            info!(
                target: "coords::overlay",
                "Co-ordinates ({}: {}) logged successfully.",
                map_name,
                coordinate
            );
            LogOutcome::Logged
        } else {
            host.show_global_message(FAILED_MESSAGE);
            error!(
                target: "coords::overlay",
                path = %self.logger.path().display(),
                "Failed to log co-ordinates ({}: {}).",
                map_name,
                coordinate
            );
            LogOutcome::Failed
        }
    }

    /// The host's readiness flag alone also holds on the title screen, so a
    /// world frame must have reported a location as well.
    fn is_world_ready(&self, host: &dyn Host) -> bool {
        host.is_world_ready() && self.state.has_world_frame()
    }

    /// Current value of a settings-menu option.
    pub fn option_value(&self, option: ConfigOption) -> OptionValue {
        self.config.get(option)
    }

    /// Changes an option from the settings menu. Not persisted until
    /// [`save_settings`](Self::save_settings).
    pub fn set_option(&mut self, option: ConfigOption, value: OptionValue) -> Result<()> {
        self.config.set(option, value)
    }

    /// Restores the default config (settings-menu "reset").
    pub fn reset_settings(&mut self) {
        self.config = ModConfig::default();
    }

    /// Writes the config back to the mod directory (settings-menu "save").
    pub fn save_settings(&self) -> Result<()> {
        self.config.save(&self.mod_dir)?;
        info!(
            target: "coords::overlay",
            path = %ModConfig::path_in(&self.mod_dir).display(),
            "Saved config"
        );
        Ok(())
    }
}
