//! Mutable tracking state owned by the overlay.

use strum::Display;

use crate::coordinate::Coordinate;

/// Source of the displayed and logged coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum TrackingTarget {
    #[default]
    Player,
    Cursor,
}

impl TrackingTarget {
    pub const fn toggled(self) -> Self {
        match self {
            TrackingTarget::Player => TrackingTarget::Cursor,
            TrackingTarget::Cursor => TrackingTarget::Player,
        }
    }

    #[inline]
    pub const fn is_cursor(self) -> bool {
        matches!(self, TrackingTarget::Cursor)
    }
}

/// Everything the overlay knows about the current frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackingState {
    pub coordinate: Coordinate,
    /// Source `coordinate` was read from; lags `target` until the next read.
    pub coordinate_target: TrackingTarget,
    /// Name of the current location; `None` until a world frame is seen.
    pub map_name: Option<String>,
    pub target: TrackingTarget,
    pub hud_visible: bool,
}

impl Default for TrackingState {
    fn default() -> Self {
        Self {
            coordinate: Coordinate::ORIGIN,
            coordinate_target: TrackingTarget::Player,
            map_name: None,
            target: TrackingTarget::Player,
            hud_visible: true,
        }
    }
}

impl TrackingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips HUD visibility and returns the new value.
    pub fn toggle_hud(&mut self) -> bool {
        self.hud_visible = !self.hud_visible;
        self.hud_visible
    }

    /// Switches between player and cursor tracking and returns the new target.
    pub fn toggle_target(&mut self) -> TrackingTarget {
        self.target = self.target.toggled();
        self.target
    }

    /// Returns true once a world frame has reported a location.
    pub fn has_world_frame(&self) -> bool {
        self.map_name.is_some()
    }

    /// Forgets the current location, e.g. after returning to the title screen.
    pub fn clear_world(&mut self) {
        self.map_name = None;
    }
}
