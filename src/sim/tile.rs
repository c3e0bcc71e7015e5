//! Tiles and their collision policies
//!
//! Every obstacle and collectible is a [`Tile`] tagged with a [`TileKind`].
//! The kind decides the tile's size, whether the resolver must verify the
//! approached side is open, whether gravity applies, and what happens when
//! the player touches it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::gravity::Gravity;
use super::rect::Rect;
use crate::consts::TILE_SIZE;
use crate::tuning::Tuning;

/// Stable identifier of a live tile within one controller
pub type TileId = u32;

/// Tile variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Coin,
    MegaCoin,
    Finish,
    /// Falling platform: starts to drop once stood on
    WallBlue,
    /// Solid wall
    WallGreen,
    /// Deadly from every side
    WallRed,
    /// Solid wall that halts even when boxed in by neighbors
    WallWhite,
    /// Floor that kills on frontal contact
    WallYellow,
    /// Only valid as a map blueprint; marks the player start
    Player,
}

impl TileKind {
    /// Fixed size of this variant
    pub fn size(self) -> Vec2 {
        match self {
            TileKind::Coin => Vec2::splat(16.0),
            TileKind::Finish => Vec2::splat(64.0),
            _ => Vec2::splat(TILE_SIZE),
        }
    }

    /// Offset from the top-left of a grid cell (centers small tiles)
    pub fn cell_offset(self) -> Vec2 {
        match self {
            TileKind::Coin => Vec2::splat(8.0),
            _ => Vec2::ZERO,
        }
    }

    /// Whether the resolver must confirm the approached side is unobstructed
    pub fn checks_open_side(self) -> bool {
        !matches!(
            self,
            TileKind::Coin
                | TileKind::MegaCoin
                | TileKind::Finish
                | TileKind::WallWhite
                | TileKind::Player
        )
    }

    pub fn is_gravity_affected(self) -> bool {
        matches!(self, TileKind::WallBlue | TileKind::Player)
    }

    /// Collectibles counted into the score's "available" totals
    pub fn is_collectible(self) -> bool {
        matches!(self, TileKind::Coin | TileKind::MegaCoin)
    }
}

/// Edge through which the player touched a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionSide {
    None,
    Top,
    Bottom,
    Left,
    Right,
}

impl CollisionSide {
    /// Unit step toward the neighboring cell on this side
    pub fn direction(self) -> Vec2 {
        match self {
            CollisionSide::None => Vec2::ZERO,
            CollisionSide::Top => Vec2::new(0.0, -1.0),
            CollisionSide::Bottom => Vec2::new(0.0, 1.0),
            CollisionSide::Left => Vec2::new(-1.0, 0.0),
            CollisionSide::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// What a collision asks the controller to do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Collect a coin
    Coin,
    /// Collect a mega coin
    MegaCoin,
    /// Player dies
    Died,
    /// Shift the world right by the amount, cancelling forward motion
    Halt(f32),
    /// Halt, then win
    HaltAndWin(f32),
    /// Land with the player's bottom at the height
    Ground(f32),
    /// Knock the player back into free fall
    Unground,
}

impl Command {
    /// Halt-family commands shift the world as soon as they are produced
    pub fn halt_offset(&self) -> Option<f32> {
        match *self {
            Command::Halt(dx) | Command::HaltAndWin(dx) => Some(dx),
            _ => None,
        }
    }
}

/// A collision result, consumed within the frame that produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    pub command: Command,
    /// Tile that produced the event
    pub source: TileId,
}

/// A live tile in the controller's active set
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub id: TileId,
    pub kind: TileKind,
    pub rect: Rect,
    pub gravity: Gravity,
}

impl Tile {
    /// Instantiate a live tile at `pos` (top-left).
    ///
    /// Returns `None` for [`TileKind::Player`]: the player is never part of
    /// the active set.
    pub fn spawn(id: TileId, kind: TileKind, pos: Vec2) -> Option<Self> {
        if kind == TileKind::Player {
            return None;
        }
        let size = kind.size();
        Some(Self {
            id,
            kind,
            rect: Rect::new(pos.x, pos.y, size.x, size.y),
            gravity: Gravity::Grounded,
        })
    }

    pub fn checks_open_side(&self) -> bool {
        self.kind.checks_open_side()
    }

    /// Advance gravity one tick (no-op for grounded or non-gravity tiles)
    pub fn perform_gravity(&mut self, tuning: &Tuning) {
        if let Some(bottom) = self.gravity.advance(tuning) {
            self.rect.set_bottom(bottom);
        }
    }

    /// Begin falling from the current position
    pub fn unground(&mut self, velocity: f32) {
        if self.kind.is_gravity_affected() {
            self.gravity.unground(self.rect.bottom(), velocity);
        }
    }

    /// Apply this tile's policy to a contact with the player on `side`.
    ///
    /// # Panics
    ///
    /// If `self` is a player tile. Player tiles never enter the active set.
    pub fn collide_with(&mut self, player: &Rect, side: CollisionSide) -> Option<CollisionEvent> {
        let command = match self.kind {
            TileKind::Coin => Some(Command::Coin),
            TileKind::MegaCoin => Some(Command::MegaCoin),
            TileKind::Finish => (player.left() >= self.rect.left())
                .then(|| Command::HaltAndWin(player.left() - self.rect.left())),
            TileKind::WallBlue => {
                let command = self.solid_policy(side, Command::Died);
                if side == CollisionSide::Top {
                    self.unground(0.0);
                }
                command
            }
            TileKind::WallGreen | TileKind::WallWhite => {
                self.solid_policy(side, Command::Halt(player.right() - self.rect.left()))
            }
            TileKind::WallYellow => self.solid_policy(side, Command::Died),
            TileKind::WallRed => (side != CollisionSide::None).then_some(Command::Died),
            TileKind::Player => unreachable!("cannot collide a player tile with another player"),
        };
        command.map(|command| CollisionEvent {
            command,
            source: self.id,
        })
    }

    /// Shared wall policy: land on top, bounce off the bottom, `on_left` for
    /// frontal contact, nothing from behind.
    fn solid_policy(&self, side: CollisionSide, on_left: Command) -> Option<Command> {
        match side {
            CollisionSide::Top => Some(Command::Ground(self.rect.top() + 1.0)),
            CollisionSide::Bottom => Some(Command::Unground),
            CollisionSide::Left => Some(on_left),
            CollisionSide::Right | CollisionSide::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(kind: TileKind, left: f32, top: f32) -> Tile {
        Tile::spawn(1, kind, Vec2::new(left, top)).unwrap()
    }

    fn player_at(left: f32, top: f32) -> Rect {
        Rect::new(left, top, TILE_SIZE, TILE_SIZE)
    }

    #[test]
    fn test_sizes_fixed_per_kind() {
        assert_eq!(tile(TileKind::Coin, 0.0, 0.0).rect.size, Vec2::splat(16.0));
        assert_eq!(tile(TileKind::Finish, 0.0, 0.0).rect.size, Vec2::splat(64.0));
        assert_eq!(tile(TileKind::WallRed, 0.0, 0.0).rect.size, Vec2::splat(32.0));
    }

    #[test]
    fn test_player_never_spawns() {
        assert!(Tile::spawn(1, TileKind::Player, Vec2::ZERO).is_none());
    }

    #[test]
    fn test_coins_ignore_side() {
        let p = player_at(0.0, 0.0);
        for side in [CollisionSide::None, CollisionSide::Top, CollisionSide::Left] {
            let ev = tile(TileKind::Coin, 0.0, 0.0).collide_with(&p, side).unwrap();
            assert_eq!(ev.command, Command::Coin);
            let ev = tile(TileKind::MegaCoin, 0.0, 0.0).collide_with(&p, side).unwrap();
            assert_eq!(ev.command, Command::MegaCoin);
        }
    }

    #[test]
    fn test_finish_requires_passing_left_edge() {
        let mut finish = tile(TileKind::Finish, 100.0, 0.0);
        assert!(finish.collide_with(&player_at(99.0, 0.0), CollisionSide::None).is_none());

        let ev = finish
            .collide_with(&player_at(104.0, 500.0), CollisionSide::None)
            .unwrap();
        assert_eq!(ev.command, Command::HaltAndWin(4.0));
        assert_eq!(ev.command.halt_offset(), Some(4.0));
    }

    #[test]
    fn test_green_wall_policy() {
        let mut wall = tile(TileKind::WallGreen, 100.0, 200.0);
        let p = player_at(80.0, 200.0);
        assert_eq!(
            wall.collide_with(&p, CollisionSide::Top).unwrap().command,
            Command::Ground(201.0)
        );
        assert_eq!(
            wall.collide_with(&p, CollisionSide::Bottom).unwrap().command,
            Command::Unground
        );
        // player.right (112) - tile.left (100)
        assert_eq!(
            wall.collide_with(&p, CollisionSide::Left).unwrap().command,
            Command::Halt(12.0)
        );
        assert!(wall.collide_with(&p, CollisionSide::Right).is_none());
        assert!(wall.collide_with(&p, CollisionSide::None).is_none());
    }

    #[test]
    fn test_white_matches_green_yellow_kills() {
        let p = player_at(80.0, 200.0);
        let mut white = tile(TileKind::WallWhite, 100.0, 200.0);
        assert_eq!(
            white.collide_with(&p, CollisionSide::Left).unwrap().command,
            Command::Halt(12.0)
        );
        let mut yellow = tile(TileKind::WallYellow, 100.0, 200.0);
        assert_eq!(
            yellow.collide_with(&p, CollisionSide::Left).unwrap().command,
            Command::Died
        );
        assert_eq!(
            yellow.collide_with(&p, CollisionSide::Top).unwrap().command,
            Command::Ground(201.0)
        );
    }

    #[test]
    fn test_red_wall_kills_from_any_side() {
        let p = player_at(0.0, 0.0);
        let mut red = tile(TileKind::WallRed, 0.0, 0.0);
        for side in [
            CollisionSide::Top,
            CollisionSide::Bottom,
            CollisionSide::Left,
            CollisionSide::Right,
        ] {
            assert_eq!(red.collide_with(&p, side).unwrap().command, Command::Died);
        }
        assert!(red.collide_with(&p, CollisionSide::None).is_none());
    }

    #[test]
    fn test_blue_wall_starts_falling_when_stood_on() {
        let p = player_at(0.0, 0.0);
        let mut blue = tile(TileKind::WallBlue, 0.0, 100.0);
        assert!(blue.gravity.is_grounded());

        let ev = blue.collide_with(&p, CollisionSide::Top).unwrap();
        assert_eq!(ev.command, Command::Ground(101.0));
        assert_eq!(
            blue.gravity,
            Gravity::Falling {
                initial_position: 132.0,
                initial_velocity: 0.0,
                elapsed_ticks: 0
            }
        );

        assert_eq!(
            blue.collide_with(&p, CollisionSide::Left).unwrap().command,
            Command::Died
        );
    }

    #[test]
    fn test_blue_wall_bumped_from_below_stays_put() {
        let p = player_at(0.0, 120.0);
        let mut blue = tile(TileKind::WallBlue, 0.0, 100.0);
        assert_eq!(
            blue.collide_with(&p, CollisionSide::Bottom).unwrap().command,
            Command::Unground
        );
        assert!(blue.gravity.is_grounded());
        assert!(blue.collide_with(&p, CollisionSide::Right).is_none());
    }

    #[test]
    fn test_static_tiles_ignore_unground() {
        let mut wall = tile(TileKind::WallGreen, 0.0, 0.0);
        wall.unground(0.0);
        assert!(wall.gravity.is_grounded());
    }

    #[test]
    #[should_panic(expected = "cannot collide a player tile")]
    fn test_player_vs_player_is_fatal() {
        let mut rogue = Tile {
            id: 7,
            kind: TileKind::Player,
            rect: player_at(0.0, 0.0),
            gravity: Gravity::Grounded,
        };
        rogue.collide_with(&player_at(0.0, 0.0), CollisionSide::Top);
    }

    #[test]
    fn test_open_side_flags() {
        assert!(!TileKind::Coin.checks_open_side());
        assert!(!TileKind::MegaCoin.checks_open_side());
        assert!(!TileKind::Finish.checks_open_side());
        assert!(!TileKind::WallWhite.checks_open_side());
        assert!(TileKind::WallGreen.checks_open_side());
        assert!(TileKind::WallBlue.checks_open_side());
        assert!(TileKind::WallRed.checks_open_side());
        assert!(TileKind::WallYellow.checks_open_side());
    }
}
