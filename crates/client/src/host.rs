//! [`Host`] implementation backed by the simulated world.

use std::collections::VecDeque;

use coords_core::{Host, Platform, Renderer, SettingsMenu, SpriteBatch, TileSource, Vec2};

use crate::config::ClientConfig;
use crate::settings::MenuPanel;
use crate::world::World;

/// Pixel size of one tile in world space.
pub const TILE_SIZE: i32 = 64;

const MESSAGE_CAPACITY: usize = 6;

pub struct TerminalHost {
    pub world: World,
    pub batch: SpriteBatch,
    pub menu: Option<MenuPanel>,
    messages: VecDeque<String>,
    platform: Platform,
    zoom_level: f32,
    /// Visible map size in tiles, updated from the last layout.
    view_size: (i32, i32),
}

impl TerminalHost {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            world: World::new(config.map),
            batch: SpriteBatch::new(),
            menu: config.settings_menu.then(MenuPanel::new),
            messages: VecDeque::with_capacity(MESSAGE_CAPACITY),
            platform: config.platform,
            zoom_level: config.zoom_level,
            view_size: (1, 1),
        }
    }

    pub fn set_view_size(&mut self, width: u16, height: u16) {
        self.view_size = (i32::from(width).max(1), i32::from(height).max(1));
    }

    /// Top-left visible tile.
    pub fn view_origin(&self) -> (i32, i32) {
        self.world.view_origin(self.view_size.0, self.view_size.1)
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    /// Adds a line to the on-screen message feed.
    pub fn push_message(&mut self, message: impl Into<String>) {
        if self.messages.len() == MESSAGE_CAPACITY {
            self.messages.pop_front();
        }
        self.messages.push_back(message.into());
    }
}

impl TileSource for TerminalHost {
    fn player_tile(&self) -> Vec2 {
        let (x, y) = self.world.player;
        Vec2::new(x as f32, y as f32)
    }

    /// Reports the centre of the hovered tile, as a pointer would.
    fn cursor_tile(&self) -> Vec2 {
        let (x, y) = self.world.cursor;
        Vec2::new(x as f32 + 0.5, y as f32 + 0.5)
    }
}

impl Host for TerminalHost {
    fn is_world_ready(&self) -> bool {
        self.world.in_game()
    }

    fn location_name(&self) -> &str {
        &self.world.location().name
    }

    fn viewport(&self) -> Vec2 {
        let (x, y) = self.view_origin();
        Vec2::new((x * TILE_SIZE) as f32, (y * TILE_SIZE) as f32)
    }

    fn zoom_level(&self) -> f32 {
        self.zoom_level
    }

    fn tile_size(&self) -> i32 {
        TILE_SIZE
    }

    fn platform(&self) -> Platform {
        self.platform
    }

    fn show_global_message(&mut self, message: &str) {
        // Overlay messages use two lines; the feed shows one entry per line.
        self.push_message(message.replace('\n', " "));
    }

    fn renderer(&mut self) -> &mut dyn Renderer {
        &mut self.batch
    }

    fn settings_menu(&mut self) -> Option<&mut dyn SettingsMenu> {
        self.menu.as_mut().map(|menu| menu as &mut dyn SettingsMenu)
    }
}
