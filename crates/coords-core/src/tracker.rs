//! Per-frame updates of the tracking state.

use crate::coordinate::Coordinate;
use crate::host::TileSource;
use crate::state::{TrackingState, TrackingTarget};

/// Name used when the host reports an empty location name.
pub const UNNAMED_MAP: &str = "Unnamed Map";

/// Records the location reported by the latest world frame.
pub fn update_map_name(state: &mut TrackingState, location_name: &str) {
    let name = if location_name.is_empty() {
        UNNAMED_MAP
    } else {
        location_name
    };

    // Same location on almost every frame.
    if state.map_name.as_deref() != Some(name) {
        state.map_name = Some(name.to_string());
    }
}

/// Refreshes the coordinate from the selected source.
///
/// Only runs while the HUD is visible. Returns true if the coordinate was
/// read this call.
pub fn update_coordinate(state: &mut TrackingState, source: &(impl TileSource + ?Sized)) -> bool {
    if !state.hud_visible {
        return false;
    }

    let position = match state.target {
        TrackingTarget::Cursor => source.cursor_tile(),
        TrackingTarget::Player => source.player_tile(),
    };
    state.coordinate = Coordinate::from_position(position);
    state.coordinate_target = state.target;
    true
}
