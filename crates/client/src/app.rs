//! Frame loop driving the simulated game and the overlay.

use anyhow::Result;
use coords_core::{
    ConfigOption, CoordinateOverlay, EventBus, EventKind, HostEvent, Key, OptionValue,
};
use crossterm::event::{
    self as term_event, Event as TermEvent, KeyEventKind, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use strum::IntoEnumIterator;
use tokio::time::{self, Duration, MissedTickBehavior};

use crate::config::ClientConfig;
use crate::host::TerminalHost;
use crate::input::{HostCommand, InputHandler};
use crate::terminal::Tui;
use crate::ui;

const FRAME_INTERVAL_MS: u64 = 16;

/// Owns the host, the overlay and the bus connecting them.
pub struct App {
    bus: EventBus<CoordinateOverlay>,
    overlay: CoordinateOverlay,
    host: TerminalHost,
    input: InputHandler,
    /// Map area from the previous frame, for mouse hit-testing.
    map_area: Rect,
}

impl App {
    pub fn new(config: &ClientConfig) -> Self {
        let mut bus = EventBus::new();
        CoordinateOverlay::register(&mut bus);
        for kind in EventKind::iter() {
            tracing::debug!(
                event = %kind,
                count = bus.handler_count(kind),
                handlers = ?bus.handler_names(kind).collect::<Vec<_>>(),
                "Registered overlay handlers"
            );
        }

        Self {
            bus,
            overlay: CoordinateOverlay::new(&config.mod_dir),
            host: TerminalHost::new(config),
            input: InputHandler::new(),
            map_area: Rect::default(),
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        self.bus
            .dispatch(&mut self.overlay, &mut self.host, HostEvent::GameLaunched);
        tracing::info!(
            mod_dir = %self.overlay.mod_dir().display(),
            output = %self.overlay.logger().path().display(),
            "Overlay launched"
        );

        let mut interval = time::interval(Duration::from_millis(FRAME_INTERVAL_MS));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            interval.tick().await;

            let Some(pressed) = self.poll_input()? else {
                break;
            };

            self.host
                .set_view_size(self.map_area.width, self.map_area.height);
            self.bus
                .run_frame(&mut self.overlay, &mut self.host, pressed);

            let commands = self.host.batch.drain();
            let mut map_area = self.map_area;
            terminal.draw(|frame| {
                map_area = ui::render(frame, &self.host, &self.overlay, &commands);
            })?;
            self.map_area = map_area;
        }

        tracing::info!("Client shutdown");
        Ok(())
    }

    /// Drains pending terminal events. Returns the buttons pressed this
    /// frame, or `None` when the player asked to quit.
    fn poll_input(&mut self) -> Result<Option<Vec<Key>>> {
        let mut pressed = Vec::new();

        while term_event::poll(Duration::from_millis(0))? {
            match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    let input = self.input.handle_key(key);
                    if input.command == HostCommand::Quit {
                        return Ok(None);
                    }
                    self.apply(input.command);
                    pressed.extend(input.button);
                }
                TermEvent::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }

        Ok(Some(pressed))
    }

    fn apply(&mut self, command: HostCommand) {
        match command {
            HostCommand::StartGame => self.host.world.start(),
            HostCommand::ReturnToTitle => self.host.world.return_to_title(),
            HostCommand::NextLocation => self.host.world.next_location(),
            HostCommand::MovePlayer(dx, dy) => self.host.world.move_player(dx, dy),
            HostCommand::MoveCursor(dx, dy) => self.host.world.move_cursor(dx, dy),
            HostCommand::ToggleLogTarget => self.toggle_log_target(),
            HostCommand::Quit | HostCommand::None => {}
        }
    }

    /// Moves the cursor to the hovered map cell.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(
            mouse.kind,
            MouseEventKind::Moved | MouseEventKind::Drag(_) | MouseEventKind::Down(_)
        ) {
            return;
        }
        if !self.map_area.contains(Position::new(mouse.column, mouse.row)) {
            return;
        }

        let (origin_x, origin_y) = self.host.view_origin();
        let col = i32::from(mouse.column - self.map_area.x);
        let row = i32::from(mouse.row - self.map_area.y);
        self.host.world.set_cursor(origin_x + col, origin_y + row);
    }

    /// Flips the logged-target option the way a settings menu would: edit,
    /// then save.
    fn toggle_log_target(&mut self) {
        let registered = self
            .host
            .menu
            .as_ref()
            .is_some_and(|menu| menu.has_option(ConfigOption::LogTrackingTarget));
        if !registered {
            self.host.push_message("No settings menu available.");
            return;
        }

        let OptionValue::Bool(current) = self.overlay.option_value(ConfigOption::LogTrackingTarget)
        else {
            return;
        };

        let result = self
            .overlay
            .set_option(ConfigOption::LogTrackingTarget, OptionValue::Bool(!current))
            .and_then(|()| self.overlay.save_settings());

        match result {
            Ok(()) => self
                .host
                .push_message(format!("Log tracking target: {}", !current)),
            Err(e) => {
                tracing::error!(error = %e, "Failed to save settings");
                self.host.push_message(format!("Failed to save settings: {e}"));
            }
        }
    }
}
