//! Simulated game world the overlay is attached to.

use crate::config::MapConfig;

/// Which screen the game is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Title,
    InGame,
}

#[derive(Clone, Debug)]
pub struct Location {
    pub name: String,
    pub width: i32,
    pub height: i32,
}

impl Location {
    pub fn new(name: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    fn clamp(&self, (x, y): (i32, i32)) -> (i32, i32) {
        (x.clamp(0, self.width - 1), y.clamp(0, self.height - 1))
    }
}

/// Player, cursor and location state of the simulated game.
#[derive(Clone, Debug)]
pub struct World {
    pub screen: Screen,
    locations: Vec<Location>,
    current: usize,
    pub player: (i32, i32),
    /// Cursor tile; may lie outside the location.
    pub cursor: (i32, i32),
}

impl World {
    /// Farm from `map`, then a town and an unnamed cave.
    pub fn new(map: MapConfig) -> Self {
        let locations = vec![
            Location::new("Farm", map.width, map.height),
            Location::new("Town", 40, 30),
            Location::new("", 20, 15),
        ];

        Self {
            screen: Screen::Title,
            locations,
            current: 0,
            player: (0, 0),
            cursor: (0, 0),
        }
    }

    pub fn location(&self) -> &Location {
        &self.locations[self.current]
    }

    pub fn in_game(&self) -> bool {
        self.screen == Screen::InGame
    }

    /// Loads the save: player placed in the middle of the first location.
    pub fn start(&mut self) {
        if self.in_game() {
            return;
        }
        self.screen = Screen::InGame;
        self.current = 0;
        self.spawn_player();
        tracing::info!(location = %self.location().name, "Entered world");
    }

    pub fn return_to_title(&mut self) {
        if self.in_game() {
            self.screen = Screen::Title;
            tracing::info!("Returned to title screen");
        }
    }

    /// Warps to the next location.
    pub fn next_location(&mut self) {
        if !self.in_game() {
            return;
        }
        self.current = (self.current + 1) % self.locations.len();
        self.spawn_player();
        tracing::debug!(location = %self.location().name, "Warped");
    }

    pub fn move_player(&mut self, dx: i32, dy: i32) {
        if !self.in_game() {
            return;
        }
        let (x, y) = self.player;
        self.player = self.location().clamp((x + dx, y + dy));
    }

    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        self.cursor = (self.cursor.0 + dx, self.cursor.1 + dy);
    }

    pub fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = (x, y);
    }

    /// Top-left visible tile for a view of `view_w` x `view_h` tiles centred
    /// on the player where the location allows.
    pub fn view_origin(&self, view_w: i32, view_h: i32) -> (i32, i32) {
        let location = self.location();
        let axis = |player: i32, view: i32, size: i32| {
            if size <= view {
                0
            } else {
                (player - view / 2).clamp(0, size - view)
            }
        };

        (
            axis(self.player.0, view_w, location.width),
            axis(self.player.1, view_h, location.height),
        )
    }

    fn spawn_player(&mut self) {
        let location = self.location();
        self.player = (location.width / 2, location.height / 2);
        self.cursor = self.player;
    }
}
