//! The player-controlled tile
//!
//! Kept apart from the active tile set: it never scrolls, is never removed,
//! and carries the score for the current run.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::gravity::Gravity;
use super::rect::Rect;
use super::score::Score;
use super::tile::TileKind;
use crate::tuning::Tuning;

/// Cosmetic player sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerCharacter {
    #[default]
    Suit,
    Casual,
    Robot,
}

impl PlayerCharacter {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerCharacter::Suit => "Suit",
            PlayerCharacter::Casual => "Casual",
            PlayerCharacter::Robot => "Robot",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "suit" => Some(PlayerCharacter::Suit),
            "casual" => Some(PlayerCharacter::Casual),
            "robot" => Some(PlayerCharacter::Robot),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    pub gravity: Gravity,
    pub score: Score,
    pub character: PlayerCharacter,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PlayerCharacter::default())
    }
}

impl Player {
    pub fn new(character: PlayerCharacter) -> Self {
        let size = TileKind::Player.size();
        Self {
            rect: Rect::new(0.0, 0.0, size.x, size.y),
            gravity: Gravity::Grounded,
            score: Score::new(),
            character,
        }
    }

    /// Move the top-left corner to `pos`
    pub fn place(&mut self, pos: Vec2) {
        self.rect.pos = pos;
    }

    pub fn is_grounded(&self) -> bool {
        self.gravity.is_grounded()
    }

    pub fn ground(&mut self) {
        self.gravity.ground();
    }

    /// Start falling with `velocity`; keeps the current fall if already airborne
    pub fn unground(&mut self, velocity: f32) {
        self.gravity.unground(self.rect.bottom(), velocity);
    }

    /// Launch upward. No effect while already airborne.
    pub fn jump(&mut self, tuning: &Tuning) {
        self.unground(-tuning.player_velocity);
    }

    pub fn perform_gravity(&mut self, tuning: &Tuning) {
        if let Some(bottom) = self.gravity.advance(tuning) {
            self.rect.set_bottom(bottom);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_only_from_ground() {
        let tuning = Tuning::default();
        let mut player = Player::default();
        player.place(Vec2::new(64.0, 300.0));

        player.jump(&tuning);
        assert!(matches!(
            player.gravity,
            Gravity::Falling { initial_position, initial_velocity, .. }
                if initial_position == 332.0 && initial_velocity == -46.0
        ));

        player.perform_gravity(&tuning);
        let airborne = player.gravity;
        player.jump(&tuning);
        assert_eq!(player.gravity, airborne);
    }

    #[test]
    fn test_gravity_moves_bottom() {
        let tuning = Tuning::default();
        let mut player = Player::default();
        player.place(Vec2::new(0.0, 0.0));
        player.unground(0.0);
        player.perform_gravity(&tuning);
        assert!(player.rect.top() > 0.0);
        assert_eq!(player.rect.height(), 32.0);
    }

    #[test]
    fn test_character_names() {
        assert_eq!(PlayerCharacter::from_str("ROBOT"), Some(PlayerCharacter::Robot));
        assert_eq!(PlayerCharacter::from_str("pirate"), None);
        assert_eq!(PlayerCharacter::Suit.as_str(), "Suit");
    }
}
