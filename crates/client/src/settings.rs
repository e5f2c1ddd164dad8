//! In-terminal settings menu offered to the overlay.

use coords_core::{ConfigOption, SettingsMenu};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionKind {
    Bool,
    Key,
}

#[derive(Clone, Debug)]
pub struct MenuEntry {
    pub option: ConfigOption,
    pub kind: OptionKind,
    pub tooltip: String,
}

/// Settings panel listing whatever the overlay registered.
#[derive(Clone, Debug, Default)]
pub struct MenuPanel {
    pub mod_id: Option<String>,
    pub entries: Vec<MenuEntry>,
}

impl MenuPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_option(&self, option: ConfigOption) -> bool {
        self.entries.iter().any(|entry| entry.option == option)
    }

    fn push(&mut self, option: ConfigOption, kind: OptionKind, tooltip: &str) {
        self.entries.push(MenuEntry {
            option,
            kind,
            tooltip: tooltip.to_string(),
        });
    }
}

impl SettingsMenu for MenuPanel {
    fn register_mod(&mut self, mod_id: &str) {
        self.mod_id = Some(mod_id.to_string());
        self.entries.clear();
    }

    fn register_bool_option(&mut self, _mod_id: &str, option: ConfigOption, tooltip: &str) {
        self.push(option, OptionKind::Bool, tooltip);
    }

    fn register_key_option(&mut self, _mod_id: &str, option: ConfigOption, tooltip: &str) {
        self.push(option, OptionKind::Key, tooltip);
    }
}
