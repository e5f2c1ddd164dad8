//! Tile coordinate overlay for a host game.
//!
//! Tracks the player's (or cursor's) tile position, draws it as a HUD box
//! and appends it to `coordinate_output.txt` on demand. The host game is
//! reached only through the traits in [`host`]; everything else is plain
//! owned state driven by the [`EventBus`].
pub mod config;
pub mod coordinate;
pub mod error;
pub mod event;
pub mod host;
pub mod hud;
pub mod key;
pub mod logger;
pub mod overlay;
pub mod settings;
pub mod state;
pub mod tracker;

pub use config::{ConfigOption, ModConfig, OptionValue};
pub use coordinate::{Coordinate, Vec2};
pub use error::{ConfigError, LogError};
pub use event::{EventBus, EventKind, Handler, HostEvent};
pub use host::{Host, Platform, TileSource};
pub use hud::{Color, DrawCommand, HudFrame, HudLayout, Renderer, Sprite, SpriteBatch};
pub use key::Key;
pub use logger::{CoordinateLogger, LogRecord, OUTPUT_FILE_NAME};
pub use overlay::{CoordinateOverlay, LogOutcome};
pub use settings::SettingsMenu;
pub use state::{TrackingState, TrackingTarget};
