//! Display collaborator
//!
//! The controller never draws anything. It tells a [`DisplaySurface`] which
//! tiles appeared or disappeared, announces game over, and asks whether the
//! jump input is still held when the player lands.

use super::controller::GameOutcome;
use super::player::Player;
use super::tile::{Tile, TileId};

pub trait DisplaySurface {
    /// A tile entered the active set
    fn add_tile(&mut self, tile: &Tile);
    /// A tile left the active set (collected or scrolled off)
    fn remove_tile(&mut self, id: TileId);
    /// Drop every visual, player included
    fn clear(&mut self);
    fn add_player(&mut self, player: &Player);
    fn game_over(&mut self, outcome: &GameOutcome);
    /// Whether a landing player should immediately jump again
    fn should_jump_again(&self) -> bool;
}

/// Display that draws nothing and never requests a re-jump
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDisplay;

impl DisplaySurface for NullDisplay {
    fn add_tile(&mut self, _tile: &Tile) {}
    fn remove_tile(&mut self, _id: TileId) {}
    fn clear(&mut self) {}
    fn add_player(&mut self, _player: &Player) {}
    fn game_over(&mut self, _outcome: &GameOutcome) {}
    fn should_jump_again(&self) -> bool {
        false
    }
}
