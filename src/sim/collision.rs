//! Collision detection and side resolution for axis-aligned tiles
//!
//! Contact side is decided by penetration depth: the side with the deepest
//! overlap wins. Depths beyond two tile lengths cannot come from a genuine
//! contact and are classified as [`CollisionSide::None`].

use super::rect::Rect;
use super::tile::{CollisionSide, Tile};
use crate::consts::OPEN_SIDE_MARGIN;

/// Whether two rectangles overlap (touching edges count)
#[inline]
pub fn is_collided(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}

/// Edge of `tile` through which `player` made contact.
///
/// Depths are checked in priority order Top, Bottom, Left, Right; a later
/// side only wins with a strictly larger depth.
pub fn dominant_side(tile: &Rect, player: &Rect, tile_size: f32) -> CollisionSide {
    if !is_collided(tile, player) {
        return CollisionSide::None;
    }

    let depths = [
        (CollisionSide::Top, tile.bottom() - player.top()),
        (CollisionSide::Bottom, player.bottom() - tile.top()),
        (CollisionSide::Left, tile.right() - player.left()),
        (CollisionSide::Right, player.right() - tile.left()),
    ];

    let (mut side, mut deepest) = depths[0];
    for &(candidate, depth) in &depths[1..] {
        if depth > deepest {
            side = candidate;
            deepest = depth;
        }
    }

    if deepest > tile_size * 2.0 {
        CollisionSide::None
    } else {
        side
    }
}

/// Probe rectangle covering the cell next to `tile` on `side`, inset so that
/// tiles merely touching that cell do not count.
pub fn neighbor_probe(tile: &Rect, side: CollisionSide, tile_size: f32) -> Rect {
    tile.offset(side.direction() * tile_size)
        .inset(OPEN_SIDE_MARGIN)
}

/// Whether the cell next to `tiles[index]` on `side` is free of other tiles.
///
/// [`CollisionSide::None`] is always open.
pub fn is_side_open(tiles: &[Tile], index: usize, side: CollisionSide, tile_size: f32) -> bool {
    if side == CollisionSide::None {
        return true;
    }
    let probe = neighbor_probe(&tiles[index].rect, side, tile_size);
    !tiles
        .iter()
        .enumerate()
        .any(|(i, other)| i != index && is_collided(&other.rect, &probe))
}
