//! Play-field geometry, derived once per game start.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::ResourceKind;
use crate::types::{Position, Rect};

/// The fixed rectangles of one game: field bounds, the central land
/// square, the beacon footprint, and the three one-cell harvest zones.
/// Derived deterministically from the viewport dimensions and never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldGeometry {
    /// Play-field width in pixels (two thirds of the viewport; the rest
    /// belongs to the side panel).
    pub field_width: i32,
    /// Play-field height in pixels (the full viewport height).
    pub field_height: i32,
    pub land: Rect,
    pub beacon: Rect,
    pub wood_zone: Rect,
    pub stone_zone: Rect,
    pub metal_zone: Rect,
}

impl FieldGeometry {
    /// Derive the geometry for a viewport. Everything anchors on the
    /// center cell of the grid: land square and beacon footprint are
    /// centered on it, harvest zones sit at fixed cell offsets from it.
    pub fn derive(viewport_width: i32, viewport_height: i32) -> Self {
        let field_width = viewport_width * 2 / 3;
        let field_height = viewport_height;

        let cells_x = field_width / CELL_SIZE;
        let cells_y = field_height / CELL_SIZE;
        let center_x = (cells_x / 2) * CELL_SIZE;
        let center_y = (cells_y / 2) * CELL_SIZE;

        let centered_square = |size_cells: i32| {
            let half = (size_cells / 2) * CELL_SIZE;
            Rect::new(
                center_x - half,
                center_y - half,
                size_cells * CELL_SIZE,
                size_cells * CELL_SIZE,
            )
        };
        let zone_at = |dx_cells: i32, dy_cells: i32| {
            Rect::new(
                center_x + dx_cells * CELL_SIZE,
                center_y + dy_cells * CELL_SIZE,
                CELL_SIZE,
                CELL_SIZE,
            )
        };

        Self {
            field_width,
            field_height,
            land: centered_square(LAND_SIZE_CELLS),
            beacon: centered_square(BEACON_SIZE_CELLS),
            wood_zone: zone_at(0, 3),
            stone_zone: zone_at(3, 0),
            metal_zone: zone_at(2, 0),
        }
    }

    /// The point enemies steer toward and structure damage radiates from.
    pub fn beacon_center(&self) -> Position {
        self.beacon.center()
    }

    /// Grid-aligned player start position. Coincides with the beacon
    /// center cell.
    pub fn player_spawn(&self) -> Position {
        self.beacon.center()
    }

    /// Harvest zone rectangle for one resource kind.
    pub fn zone(&self, kind: ResourceKind) -> &Rect {
        match kind {
            ResourceKind::Wood => &self.wood_zone,
            ResourceKind::Stone => &self.stone_zone,
            ResourceKind::Metal => &self.metal_zone,
        }
    }
}
