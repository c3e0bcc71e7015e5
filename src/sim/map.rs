//! Map layouts
//!
//! A map is an ordered list of tile blueprints plus its dimensions and the
//! best score achieved on it. The controller instantiates a fresh live tile
//! from every blueprint each time the map is (re)generated; the player
//! blueprint only marks where the player starts.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::tile::TileKind;
use crate::consts::{TILE_SIZE, TILE_VISUAL_ROWS};
use crate::error::SimError;

/// Where a tile of a given kind starts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    pub kind: TileKind,
    /// Top-left corner
    pub pos: Vec2,
}

impl Blueprint {
    pub fn new(kind: TileKind, pos: Vec2) -> Self {
        Self { kind, pos }
    }

    /// Blueprint for grid cell (`col`, `row`), applying the kind's cell offset
    pub fn at_cell(kind: TileKind, col: u32, row: u32) -> Self {
        let cell = Vec2::new(col as f32, row as f32) * TILE_SIZE;
        Self::new(kind, cell + kind.cell_offset())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Map {
    pub name: String,
    pub number: u32,
    width: f32,
    height: f32,
    /// Best total score on this map; raised by the controller at game over
    pub high_score: u64,
    blueprints: Vec<Blueprint>,
}

impl Map {
    pub fn new(
        name: impl Into<String>,
        number: u32,
        width: f32,
        height: f32,
        blueprints: Vec<Blueprint>,
    ) -> Result<Self, SimError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(SimError::InvalidMapSize { width, height });
        }
        let starts = blueprints
            .iter()
            .filter(|b| b.kind == TileKind::Player)
            .count();
        if starts > 1 {
            return Err(SimError::MultiplePlayerStarts { count: starts });
        }
        Ok(Self {
            name: name.into(),
            number,
            width,
            height,
            high_score: 0,
            blueprints,
        })
    }

    /// Build a map from grid cells `(kind, col, row)` of a `rows` × `cols` layout.
    ///
    /// Layouts shorter than the visible area are pushed down so their last row
    /// sits on the bottom of the screen.
    pub fn from_cells(
        name: impl Into<String>,
        number: u32,
        rows: u32,
        cols: u32,
        cells: impl IntoIterator<Item = (TileKind, u32, u32)>,
    ) -> Result<Self, SimError> {
        let row_offset = TILE_VISUAL_ROWS.saturating_sub(rows);
        let blueprints = cells
            .into_iter()
            .map(|(kind, col, row)| Blueprint::at_cell(kind, col, row + row_offset))
            .collect();
        Self::new(
            name,
            number,
            cols as f32 * TILE_SIZE,
            (rows + row_offset) as f32 * TILE_SIZE,
            blueprints,
        )
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn blueprints(&self) -> &[Blueprint] {
        &self.blueprints
    }

    pub fn player_start(&self) -> Option<Vec2> {
        self.blueprints
            .iter()
            .find(|b| b.kind == TileKind::Player)
            .map(|b| b.pos)
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.blueprints.iter().filter(|b| b.kind == kind).count()
    }

    /// Raise the high score if `total` beats it. Returns whether it did.
    pub fn record_score(&mut self, total: u64) -> bool {
        if total > self.high_score {
            log::info!(
                "New high score on '{}': {} (was {})",
                self.name,
                total,
                self.high_score
            );
            self.high_score = total;
            true
        } else {
            false
        }
    }
}
