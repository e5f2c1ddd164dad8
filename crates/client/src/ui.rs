//! Frame layout: map with the overlay's HUD on top, status and settings
//! panel, message feed.

use coords_core::{
    Color as HudColor, ConfigOption, CoordinateOverlay, DrawCommand, OptionValue, Sprite,
    tracker::UNNAMED_MAP,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
};

use crate::host::{TILE_SIZE, TerminalHost};
use crate::settings::OptionKind;

/// HUD pixels covered by one terminal cell.
const HUD_CELL_WIDTH: f32 = 8.0;
const HUD_CELL_HEIGHT: f32 = 16.0;

/// Size of the coordinate box sprite, in cells.
const HUD_BOX_WIDTH: u16 = 12;
const HUD_BOX_HEIGHT: u16 = 5;

const MESSAGE_PANEL_HEIGHT: u16 = 8;

/// Draws the whole frame and returns the inner map area, in cells.
pub fn render(
    frame: &mut Frame,
    host: &TerminalHost,
    overlay: &CoordinateOverlay,
    commands: &[DrawCommand],
) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(MESSAGE_PANEL_HEIGHT),
        ])
        .split(frame.area());
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(rows[0]);

    let map_block = Block::bordered().title(map_title(host));
    let map_area = map_block.inner(columns[0]);
    frame.render_widget(map_block, columns[0]);

    if host.world.in_game() {
        render_map(frame, map_area, host, commands);
        render_hud(frame, map_area, commands);
    } else {
        render_title(frame, map_area);
    }

    render_side_panel(frame, columns[1], host, overlay);
    render_messages(frame, rows[1], host);

    map_area
}

fn map_title(host: &TerminalHost) -> String {
    if !host.world.in_game() {
        return " Title ".to_string();
    }
    let name = host.world.location().name.as_str();
    if name.is_empty() {
        format!(" {UNNAMED_MAP} ")
    } else {
        format!(" {name} ")
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Tile Coordinates",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Press Enter to load the world"),
        Line::from("q to quit"),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn render_map(frame: &mut Frame, area: Rect, host: &TerminalHost, commands: &[DrawCommand]) {
    let (origin_x, origin_y) = host.view_origin();
    let location = host.world.location();
    let highlight = highlighted_cell(commands, host);

    let mut lines = Vec::with_capacity(area.height as usize);
    for row in 0..area.height as i32 {
        let mut spans = Vec::with_capacity(area.width as usize);
        for col in 0..area.width as i32 {
            let tile = (origin_x + col, origin_y + row);
            let inside = tile.0 < location.width && tile.1 < location.height;

            let (symbol, mut style) = if tile == host.world.player {
                ("@", Style::default().fg(Color::Yellow))
            } else if !inside {
                (" ", Style::default())
            } else if tile == host.world.cursor {
                ("+", Style::default().fg(Color::Cyan))
            } else {
                (".", Style::default().fg(Color::Green))
            };

            if highlight == Some((col, row)) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(symbol, style));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Map cell covered by the overlay's tile highlight, if any.
fn highlighted_cell(commands: &[DrawCommand], host: &TerminalHost) -> Option<(i32, i32)> {
    if !host.world.in_game() {
        return None;
    }

    commands.iter().find_map(|command| match command {
        DrawCommand::TileHighlight { position, scale } => {
            let cell = TILE_SIZE as f32 * scale;
            Some(((position.x / cell) as i32, (position.y / cell) as i32))
        }
        _ => None,
    })
}

/// Replays the overlay's sprite and text commands onto the map area.
fn render_hud(frame: &mut Frame, area: Rect, commands: &[DrawCommand]) {
    for command in commands {
        match command {
            DrawCommand::Sprite {
                sprite: Sprite::CoordinateBox,
                position,
            } => {
                let rect = hud_rect(area, position.x, position.y, HUD_BOX_WIDTH, HUD_BOX_HEIGHT);
                frame.render_widget(Clear, rect);
                frame.render_widget(
                    Block::bordered().style(Style::default().bg(Color::Rgb(222, 184, 135))),
                    rect,
                );
            }
            DrawCommand::ShadowedText {
                text,
                position,
                color,
            } => {
                let width = u16::try_from(text.len()).unwrap_or(u16::MAX);
                let rect = hud_rect(area, position.x, position.y, width, 1);
                let style = Style::default()
                    .fg(to_terminal_color(*color))
                    .bg(Color::Rgb(222, 184, 135))
                    .add_modifier(Modifier::BOLD);
                frame.render_widget(Paragraph::new(Span::styled(text.as_str(), style)), rect);
            }
            DrawCommand::TileHighlight { .. } => {}
        }
    }
}

fn hud_rect(area: Rect, x: f32, y: f32, width: u16, height: u16) -> Rect {
    let col = (x / HUD_CELL_WIDTH) as u16;
    let row = (y / HUD_CELL_HEIGHT) as u16;
    let rect = Rect::new(area.x.saturating_add(col), area.y.saturating_add(row), width, height);
    rect.intersection(area)
}

fn to_terminal_color(color: HudColor) -> Color {
    match color {
        HudColor::White => Color::White,
        HudColor::Black => Color::Black,
    }
}

fn render_side_panel(frame: &mut Frame, area: Rect, host: &TerminalHost, overlay: &CoordinateOverlay) {
    let state = overlay.state();
    let config = overlay.config();

    let mut lines = vec![
        Line::from(format!("Tracking: {}", state.target)),
        Line::from(format!(
            "HUD: {}",
            if state.hud_visible { "shown" } else { "hidden" }
        )),
        Line::from(format!("Last: {}", state.coordinate)),
        Line::from(""),
        Line::from(format!("{}  toggle HUD", config.coordinate_hud_toggle)),
        Line::from(format!("{}  log co-ordinates", config.log_coordinates)),
        Line::from(format!("{}  switch target", config.switch_to_cursor_coords)),
        Line::from("arrows move, ijkl/mouse cursor"),
        Line::from("Tab warp, Esc title, q quit"),
        Line::from(""),
    ];

    match &host.menu {
        Some(menu) if !menu.entries.is_empty() => {
            let title = menu.mod_id.as_deref().unwrap_or("Settings");
            lines.push(Line::from(Span::styled(
                format!("{title} (o toggles first)"),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for entry in &menu.entries {
                lines.push(Line::from(format!(
                    "{}: {}",
                    entry.option,
                    option_text(overlay, entry.option, entry.kind)
                )));
                lines.push(Line::from(Span::styled(
                    format!("  {}", entry.tooltip),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
        Some(_) => lines.push(Line::from("Settings menu: nothing registered")),
        None => lines.push(Line::from("Settings menu: not installed")),
    }

    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::bordered().title(" Overlay "))
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn option_text(overlay: &CoordinateOverlay, option: ConfigOption, kind: OptionKind) -> String {
    match (kind, overlay.option_value(option)) {
        (OptionKind::Bool, OptionValue::Bool(value)) => value.to_string(),
        (OptionKind::Key, OptionValue::Key(key)) => key.to_string(),
        (_, value) => format!("{value:?}"),
    }
}

fn render_messages(frame: &mut Frame, area: Rect, host: &TerminalHost) {
    let lines: Vec<Line> = host.messages().map(Line::from).collect();
    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().title(" Messages ")),
        area,
    );
}
