//! Coin Collector headless runner
//!
//! Generates a map from a seed and plays it with a simple scripted jumper,
//! feeding the controller fixed frame times instead of a real clock.
//!
//! Usage: `coin-collector [seed] [columns]`

#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use coin_collector::consts::TILE_SIZE;
    use coin_collector::sim::{
        DisplaySurface, GameController, GameOutcome, Player, Rect, Tile, TileId, TileKind,
    };

    /// Display that only logs what it is told
    #[derive(Debug, Default)]
    pub struct LogDisplay {
        pub tiles_added: usize,
        pub tiles_removed: usize,
    }

    impl DisplaySurface for LogDisplay {
        fn add_tile(&mut self, tile: &Tile) {
            self.tiles_added += 1;
            log::trace!("+ {:?} #{} at {:?}", tile.kind, tile.id, tile.rect.pos);
        }

        fn remove_tile(&mut self, id: TileId) {
            self.tiles_removed += 1;
            log::trace!("- #{}", id);
        }

        fn clear(&mut self) {
            log::debug!("Display cleared");
        }

        fn add_player(&mut self, player: &Player) {
            log::debug!("Player ({}) at {:?}", player.character.as_str(), player.rect.pos);
        }

        fn game_over(&mut self, outcome: &GameOutcome) {
            log::info!(
                "Game over: {} with {} points",
                if outcome.died { "died" } else { "finished" },
                outcome.total
            );
        }

        fn should_jump_again(&self) -> bool {
            false
        }
    }

    /// Jump when something solid is just ahead or the floor ahead is missing
    pub fn wants_jump<D: DisplaySurface>(game: &GameController<D>) -> bool {
        let player = game.player();
        if !player.is_grounded() {
            return false;
        }
        let rect = player.rect;

        let ahead = Rect::new(rect.right() + 1.0, rect.top(), TILE_SIZE, rect.height() - 1.0);
        let blocked = game.tiles().iter().any(|t| {
            !t.kind.is_collectible() && t.kind != TileKind::Finish && t.rect.intersects(&ahead)
        });

        let below_ahead = Rect::new(rect.right() + TILE_SIZE * 0.5, rect.bottom() + 1.0, 1.0, 1.0);
        let gap = !game.tiles().iter().any(|t| t.rect.intersects(&below_ahead));

        blocked || gap
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use coin_collector::Settings;
    use coin_collector::sim::{GameController, mapgen};

    use autopilot::{LogDisplay, wants_jump};

    /// Give up after this many simulated seconds
    const MAX_SECONDS: u32 = 600;

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(1u64);
    let columns = args.next().and_then(|s| s.parse().ok()).unwrap_or(120u32);

    let settings = Settings::default();
    log::info!("Coin Collector (headless) seed={} columns={}", seed, columns);

    let map = match mapgen::generate(seed, 1, columns) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("Failed to generate map: {}", e);
            std::process::exit(1);
        }
    };

    let dt = settings.tuning.sim_dt();
    let mut game = GameController::new(LogDisplay::default(), settings.tuning, settings.character);
    game.generate_map(map);
    game.start();

    let max_frames = MAX_SECONDS * game.tuning().frames_per_second;
    for _ in 0..max_frames {
        if wants_jump(&game) {
            game.jump();
        }
        game.update(dt);
        if !game.is_started() {
            break;
        }
    }

    let display = game.display();
    log::info!(
        "Ran {} ticks; {} tiles shown, {} removed",
        game.time_ticks(),
        display.tiles_added,
        display.tiles_removed
    );

    match game.outcome() {
        Some(outcome) => {
            let score = &outcome.score;
            println!(
                "{} after {} ticks: coins {}/{}, mega coins {}/{}, total {}{}",
                if outcome.died { "Died" } else { "Finished" },
                game.time_ticks(),
                score.coins_collected,
                score.coins_available,
                score.mega_coins_collected,
                score.mega_coins_available,
                outcome.total,
                if outcome.is_high_score { " (high score)" } else { "" }
            );
        }
        None => println!("No result after {} seconds", MAX_SECONDS),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless runner on the web; hosts drive the library directly
}
