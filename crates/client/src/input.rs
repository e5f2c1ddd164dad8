//! Input processing for the terminal host.
//!
//! Every key press is forwarded to the overlay as a host button press, the
//! same way a game forwards all buttons to its add-ons. Some keys also drive
//! the simulated game itself.

use coords_core::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the simulated game does with a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostCommand {
    Quit,
    StartGame,
    ReturnToTitle,
    MovePlayer(i32, i32),
    MoveCursor(i32, i32),
    NextLocation,
    /// Flip the overlay's "log tracking target" option through the settings menu.
    ToggleLogTarget,
    None,
}

/// Result of processing one key event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyInput {
    /// Button forwarded to the overlay, if the key has a host name.
    pub button: Option<Key>,
    pub command: HostCommand,
}

/// Translates `KeyEvent`s into overlay buttons and host commands.
#[derive(Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key(&self, key: KeyEvent) -> KeyInput {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyInput {
                button: None,
                command: HostCommand::Quit,
            };
        }

        KeyInput {
            button: to_button(key.code),
            command: self.command(key.code),
        }
    }

    fn command(&self, code: KeyCode) -> HostCommand {
        match code {
            KeyCode::Enter => HostCommand::StartGame,
            KeyCode::Esc => HostCommand::ReturnToTitle,
            KeyCode::Tab => HostCommand::NextLocation,
            KeyCode::Left => HostCommand::MovePlayer(-1, 0),
            KeyCode::Right => HostCommand::MovePlayer(1, 0),
            KeyCode::Up => HostCommand::MovePlayer(0, -1),
            KeyCode::Down => HostCommand::MovePlayer(0, 1),
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'q' => HostCommand::Quit,
                'j' => HostCommand::MoveCursor(-1, 0),
                'l' => HostCommand::MoveCursor(1, 0),
                'i' => HostCommand::MoveCursor(0, -1),
                'k' => HostCommand::MoveCursor(0, 1),
                'o' => HostCommand::ToggleLogTarget,
                _ => HostCommand::None,
            },
            _ => HostCommand::None,
        }
    }
}

/// Host name of a terminal key, if it has one.
pub fn to_button(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::F(n) if (1..=12).contains(&n) => Key::F(n),
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(ch) => Key::char(ch),
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Tab => Key::Tab,
        _ => return None,
    };
    Some(key)
}
