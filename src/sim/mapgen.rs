//! Seeded procedural map generation
//!
//! Builds a bottom-aligned layout column by column: a safe run-up, then a
//! random mix of pits, steps, coin arcs, hazards and falling bridges, then a
//! flat runway ending in the finish. The same seed always yields the same map.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::map::Map;
use super::tile::TileKind;
use crate::consts::TILE_VISUAL_ROWS;
use crate::error::SimError;

/// Shortest map the generator will build
pub const MIN_COLUMNS: u32 = 32;
/// Flat columns before the first feature
const SAFE_START_COLS: u32 = 8;
/// Flat columns before and under the finish
const FINISH_RUNWAY: u32 = 8;
/// Lowest floor (bottom row of the screen)
const BASE_GROUND_ROW: u32 = TILE_VISUAL_ROWS - 1;
/// Highest floor the steps may climb to
const MIN_GROUND_ROW: u32 = TILE_VISUAL_ROWS - 4;

struct Layout {
    cells: Vec<(TileKind, u32, u32)>,
}

impl Layout {
    fn push(&mut self, kind: TileKind, col: u32, row: u32) {
        self.cells.push((kind, col, row));
    }

    /// Solid column: a green cap at `ground` with white fill below
    fn floor(&mut self, col: u32, ground: u32) {
        self.push(TileKind::WallGreen, col, ground);
        for row in ground + 1..=BASE_GROUND_ROW {
            self.push(TileKind::WallWhite, col, row);
        }
    }
}

/// Generate map `number` of `columns` width from `seed`
pub fn generate(seed: u64, number: u32, columns: u32) -> Result<Map, SimError> {
    let columns = columns.max(MIN_COLUMNS);
    let mut rng = Pcg32::seed_from_u64(seed ^ ((number as u64) << 32));
    let mut layout = Layout { cells: Vec::new() };

    let finish_col = columns - FINISH_RUNWAY / 2;
    let runway_start = columns - FINISH_RUNWAY;
    let mut ground = BASE_GROUND_ROW;

    layout.push(TileKind::Player, 2, ground - 1);

    let mut col = 0;
    while col < runway_start {
        if col < SAFE_START_COLS {
            layout.floor(col, ground);
            col += 1;
            continue;
        }

        let remaining = runway_start - col;
        let roll = rng.random_range(0..100u32);
        match roll {
            // pit
            0..=14 if remaining > 4 => {
                let width = rng.random_range(2..=3u32);
                col += width;
                layout.floor(col, ground);
                col += 1;
            }
            // step up or down
            15..=29 => {
                if ground > MIN_GROUND_ROW && rng.random_bool(0.5) {
                    ground -= 1;
                } else if ground < BASE_GROUND_ROW {
                    ground += 1;
                }
                layout.floor(col, ground);
                col += 1;
            }
            // coin arc over flat ground
            30..=44 if remaining > 3 => {
                for (i, lift) in [2u32, 3, 2].into_iter().enumerate() {
                    let c = col + i as u32;
                    layout.floor(c, ground);
                    layout.push(TileKind::Coin, c, ground - lift);
                }
                col += 3;
            }
            // single deadly block to hop over
            45..=54 if remaining > 2 => {
                layout.floor(col, ground);
                layout.push(TileKind::WallRed, col, ground - 1);
                layout.floor(col + 1, ground);
                col += 2;
            }
            // yellow floor: safe on top, deadly head-on
            55..=62 if remaining > 2 => {
                layout.push(TileKind::WallYellow, col, ground);
                layout.push(TileKind::WallYellow, col + 1, ground);
                col += 2;
            }
            // falling bridge over a pit
            63..=70 if remaining > 4 => {
                for c in col..col + 3 {
                    layout.push(TileKind::WallBlue, c, ground);
                }
                layout.floor(col + 3, ground);
                col += 4;
            }
            // mega coin on a ledge
            71..=76 if remaining > 2 && ground > MIN_GROUND_ROW => {
                layout.floor(col, ground);
                layout.push(TileKind::WallGreen, col + 1, ground - 1);
                layout.floor(col + 1, ground);
                layout.push(TileKind::MegaCoin, col + 1, ground - 2);
                col += 2;
            }
            _ => {
                layout.floor(col, ground);
                col += 1;
            }
        }
    }

    for c in runway_start..columns {
        layout.floor(c, ground);
    }
    // 2x2 cells, resting on the runway
    layout.push(TileKind::Finish, finish_col, ground - 2);

    let map = Map::from_cells(
        format!("Generated {}", number),
        number,
        TILE_VISUAL_ROWS,
        columns,
        layout.cells,
    )?;
    log::info!(
        "Generated map #{} from seed {}: {} columns, {} coins, {} mega coins",
        number,
        seed,
        columns,
        map.count(TileKind::Coin),
        map.count(TileKind::MegaCoin)
    );
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TILE_SIZE;
    use crate::sim::controller::GameController;
    use crate::sim::display::NullDisplay;
    use crate::sim::player::PlayerCharacter;
    use crate::tuning::Tuning;

    #[test]
    fn test_deterministic() {
        let a = generate(42, 1, 120).unwrap();
        let b = generate(42, 1, 120).unwrap();
        assert_eq!(a.blueprints(), b.blueprints());

        let c = generate(43, 1, 120).unwrap();
        assert_ne!(a.blueprints(), c.blueprints());
    }

    #[test]
    fn test_one_player_one_finish() {
        for seed in 0..20 {
            let map = generate(seed, 1, 80).unwrap();
            assert_eq!(map.count(TileKind::Player), 1);
            assert_eq!(map.count(TileKind::Finish), 1);
            assert_eq!(map.height(), TILE_VISUAL_ROWS as f32 * TILE_SIZE);
            assert_eq!(map.width(), 80.0 * TILE_SIZE);
        }
    }

    #[test]
    fn test_short_request_is_widened() {
        let map = generate(7, 2, 4).unwrap();
        assert_eq!(map.width(), MIN_COLUMNS as f32 * TILE_SIZE);
    }

    #[test]
    fn test_player_starts_on_solid_ground() {
        let map = generate(9, 1, 64).unwrap();
        let start = map.player_start().unwrap();
        let below = start.y + TILE_SIZE;
        assert!(
            map.blueprints()
                .iter()
                .any(|b| b.kind == TileKind::WallGreen && b.pos.y == below && b.pos.x == start.x)
        );
    }

    #[test]
    fn test_generated_map_plays_to_an_end() {
        let map = generate(5, 1, 48).unwrap();
        let mut c = GameController::new(NullDisplay, Tuning::default(), PlayerCharacter::Suit);
        c.generate_map(map);
        c.start();
        // no generated obstacle is taller than one jump, so hopping
        // constantly either finishes or dies
        for _ in 0..10_000 {
            c.jump();
            c.tick();
            if !c.is_started() {
                break;
            }
        }
        assert!(c.outcome().is_some());
    }
}
