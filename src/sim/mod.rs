//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (map generation)
//! - Stable iteration order (tile insertion order)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod controller;
pub mod display;
pub mod gravity;
pub mod map;
pub mod mapgen;
pub mod player;
pub mod rect;
pub mod score;
pub mod tile;

pub use clock::FrameClock;
pub use collision::{dominant_side, is_collided, is_side_open};
pub use controller::{FrameReport, GameController, GameOutcome, RunState};
pub use display::{DisplaySurface, NullDisplay};
pub use gravity::{Gravity, position_at};
pub use map::{Blueprint, Map};
pub use player::{Player, PlayerCharacter};
pub use rect::Rect;
pub use score::{Score, ScoreField};
pub use tile::{CollisionEvent, CollisionSide, Command, Tile, TileId, TileKind};
