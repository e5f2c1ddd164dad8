//! HUD draw command generation.
//!
//! The overlay does not rasterise anything itself. It issues a handful of
//! primitive calls against a [`Renderer`]; [`SpriteBatch`] records them so a
//! host can replay them in its own pipeline.

use crate::coordinate::Vec2;
use crate::host::Platform;
use crate::state::TrackingState;

/// Vertical distance between the X and Y text lines, in pixels.
pub const LINE_SPACING: f32 = 36.0;

/// Textures the HUD references.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sprite {
    /// Background box behind the coordinate text.
    CoordinateBox,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

/// A single recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Sprite {
        sprite: Sprite,
        position: Vec2,
    },
    ShadowedText {
        text: String,
        position: Vec2,
        color: Color,
    },
    /// Outline around one world tile, in screen pixels.
    TileHighlight {
        position: Vec2,
        scale: f32,
    },
}

/// Host drawing primitives used by the HUD.
pub trait Renderer {
    fn draw_sprite(&mut self, sprite: Sprite, position: Vec2);
    fn draw_text_with_shadow(&mut self, text: &str, position: Vec2, color: Color);
    fn draw_tile_highlight(&mut self, position: Vec2, scale: f32);
}

/// Renderer that records commands for later replay.
#[derive(Clone, Debug, Default)]
pub struct SpriteBatch {
    commands: Vec<DrawCommand>,
}

impl SpriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Takes the recorded commands, leaving the batch empty for the next frame.
    pub fn drain(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Renderer for SpriteBatch {
    fn draw_sprite(&mut self, sprite: Sprite, position: Vec2) {
        self.commands.push(DrawCommand::Sprite { sprite, position });
    }

    fn draw_text_with_shadow(&mut self, text: &str, position: Vec2, color: Color) {
        self.commands.push(DrawCommand::ShadowedText {
            text: text.to_string(),
            position,
            color,
        });
    }

    fn draw_tile_highlight(&mut self, position: Vec2, scale: f32) {
        self.commands
            .push(DrawCommand::TileHighlight { position, scale });
    }
}

/// Screen positions of the HUD elements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HudLayout {
    pub box_position: Vec2,
    pub top_text: Vec2,
    pub bottom_text: Vec2,
}

impl HudLayout {
    pub fn for_platform(platform: Platform) -> Self {
        // Android shifts right to clear the on-screen menu button.
        let (box_position, top_text) = match platform {
            Platform::Desktop => (Vec2::new(9.0, 9.0), Vec2::new(23.0, 17.0)),
            Platform::Android => (Vec2::new(125.0, 9.0), Vec2::new(148.0, 17.0)),
        };

        Self {
            box_position,
            top_text,
            bottom_text: Vec2::new(top_text.x, top_text.y + LINE_SPACING),
        }
    }
}

/// Host view parameters captured before drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HudFrame {
    pub platform: Platform,
    pub viewport: Vec2,
    pub zoom_level: f32,
    pub tile_size: i32,
}

impl HudFrame {
    /// Zoom applied to the tile highlight. Android renders it unscaled.
    pub fn effective_zoom(&self) -> f32 {
        match self.platform {
            Platform::Desktop => self.zoom_level,
            Platform::Android => 1.0,
        }
    }
}

/// Draws the coordinate box for the current state.
pub fn draw_hud(renderer: &mut dyn Renderer, state: &TrackingState, frame: &HudFrame) {
    let layout = HudLayout::for_platform(frame.platform);
    let coordinate = state.coordinate;

    renderer.draw_sprite(Sprite::CoordinateBox, layout.box_position);
    renderer.draw_text_with_shadow(
        &format!("X: {}", coordinate.x),
        layout.top_text,
        Color::Black,
    );
    renderer.draw_text_with_shadow(
        &format!("Y: {}", coordinate.y),
        layout.bottom_text,
        Color::Black,
    );

    if !state.target.is_cursor() || !coordinate.is_non_negative() {
        return;
    }

    let zoom = frame.effective_zoom();
    let world = coordinate.to_world_pixels(frame.tile_size);
    renderer.draw_tile_highlight((world - frame.viewport) * zoom, zoom);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;
    use crate::state::TrackingTarget;

    fn frame(platform: Platform) -> HudFrame {
        HudFrame {
            platform,
            viewport: Vec2::new(64.0, 128.0),
            zoom_level: 2.0,
            tile_size: 64,
        }
    }

    fn state(target: TrackingTarget, coordinate: Coordinate) -> TrackingState {
        TrackingState {
            coordinate,
            target,
            ..TrackingState::default()
        }
    }

    #[test]
    fn player_hud_draws_box_and_two_lines() {
        let mut batch = SpriteBatch::new();
        let state = state(TrackingTarget::Player, Coordinate::new(12, 7));

        draw_hud(&mut batch, &state, &frame(Platform::Desktop));

        assert_eq!(
            batch.commands(),
            &[
                DrawCommand::Sprite {
                    sprite: Sprite::CoordinateBox,
                    position: Vec2::new(9.0, 9.0),
                },
                DrawCommand::ShadowedText {
                    text: "X: 12".to_string(),
                    position: Vec2::new(23.0, 17.0),
                    color: Color::Black,
                },
                DrawCommand::ShadowedText {
                    text: "Y: 7".to_string(),
                    position: Vec2::new(23.0, 53.0),
                    color: Color::Black,
                },
            ]
        );
    }

    #[test]
    fn cursor_hud_highlights_tile_scaled_by_zoom() {
        let mut batch = SpriteBatch::new();
        let state = state(TrackingTarget::Cursor, Coordinate::new(3, 4));

        draw_hud(&mut batch, &state, &frame(Platform::Desktop));

        // (3*64 - 64, 4*64 - 128) * 2
        assert_eq!(
            batch.commands().last(),
            Some(&DrawCommand::TileHighlight {
                position: Vec2::new(256.0, 256.0),
                scale: 2.0,
            })
        );
    }

    #[test]
    fn negative_cursor_skips_highlight() {
        let mut batch = SpriteBatch::new();
        let state = state(TrackingTarget::Cursor, Coordinate::new(-1, 4));

        draw_hud(&mut batch, &state, &frame(Platform::Desktop));

        assert_eq!(batch.commands().len(), 3);
        assert!(
            !batch
                .commands()
                .iter()
                .any(|c| matches!(c, DrawCommand::TileHighlight { .. }))
        );
    }

    #[test]
    fn android_uses_shifted_layout_and_unit_zoom() {
        let mut batch = SpriteBatch::new();
        let state = state(TrackingTarget::Cursor, Coordinate::new(1, 2));

        draw_hud(&mut batch, &state, &frame(Platform::Android));

        let commands = batch.drain();
        assert_eq!(
            commands[0],
            DrawCommand::Sprite {
                sprite: Sprite::CoordinateBox,
                position: Vec2::new(125.0, 9.0),
            }
        );
        assert_eq!(
            commands[3],
            DrawCommand::TileHighlight {
                position: Vec2::new(0.0, 0.0),
                scale: 1.0,
            }
        );
        assert!(batch.is_empty());
    }
}
