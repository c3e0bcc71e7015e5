//! Frame controller: run state and the per-tick simulation pipeline
//!
//! One tick scrolls the world, applies gravity, drops tiles that left the
//! screen, resolves collisions into events, and folds those events into
//! score, grounding and the win/lose decision.

use glam::Vec2;

use super::clock::FrameClock;
use super::collision::{dominant_side, is_collided, is_side_open};
use super::display::DisplaySurface;
use super::map::Map;
use super::player::{Player, PlayerCharacter};
use super::score::{Score, ScoreField};
use super::tile::{Command, CollisionEvent, Tile, TileId, TileKind};
use crate::consts::TILE_SIZE;
use crate::tuning::Tuning;

/// Whether the simulation timer is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
    /// Suspended mid-game; only reachable from `Running`
    Paused,
}

/// How a run ended
#[derive(Debug, Clone, PartialEq)]
pub struct GameOutcome {
    pub died: bool,
    /// Final score including any completion bonus
    pub score: Score,
    pub total: u64,
    pub is_high_score: bool,
}

/// Everything a tick changed, for renderers and HUDs that poll
#[derive(Debug, Clone, Default)]
pub struct FrameReport {
    /// Events aggregated this tick, in production order (plain halts excluded)
    pub events: Vec<CollisionEvent>,
    pub score_changes: Vec<ScoreField>,
    /// Tiles that left the active set
    pub removed: Vec<TileId>,
    /// Set when the game ended this tick
    pub outcome: Option<GameOutcome>,
}

/// Owns the player, the active tiles and the map being played
pub struct GameController<D: DisplaySurface> {
    display: D,
    tuning: Tuning,
    state: RunState,
    clock: FrameClock,
    map: Option<Map>,
    player: Player,
    /// Active tiles, player excluded
    tiles: Vec<Tile>,
    outcome: Option<GameOutcome>,
    time_ticks: u64,
    next_id: TileId,
}

impl<D: DisplaySurface> GameController<D> {
    pub fn new(display: D, tuning: Tuning, character: PlayerCharacter) -> Self {
        let clock = FrameClock::new(tuning.sim_dt());
        Self {
            display,
            tuning,
            state: RunState::Stopped,
            clock,
            map: None,
            player: Player::new(character),
            tiles: Vec::new(),
            outcome: None,
            time_ticks: 0,
            next_id: 1,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Running or paused
    pub fn is_started(&self) -> bool {
        self.state != RunState::Stopped
    }

    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn set_character(&mut self, character: PlayerCharacter) {
        self.player.character = character;
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn map(&self) -> Option<&Map> {
        self.map.as_ref()
    }

    /// Result of the last finished run, cleared when a map is generated
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    fn next_tile_id(&mut self) -> TileId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // === Map generation ===

    /// Add a tile to the active set and the display
    pub fn place_tile(&mut self, tile: Tile) {
        self.display.add_tile(&tile);
        self.tiles.push(tile);
    }

    /// Remove a tile from the active set and the display
    pub fn remove_tile(&mut self, id: TileId) -> bool {
        let before = self.tiles.len();
        self.tiles.retain(|t| t.id != id);
        let removed = self.tiles.len() != before;
        if removed {
            self.display.remove_tile(id);
        }
        removed
    }

    /// Reset the run and lay out `map`.
    ///
    /// A paused game ends up stopped; a running game keeps running on the new map.
    pub fn generate_map(&mut self, map: Map) {
        self.display.clear();
        self.tiles.clear();
        self.outcome = None;
        if self.state == RunState::Paused {
            self.clock.disarm();
            self.state = RunState::Stopped;
        }

        self.player.score = Score::new();
        self.player.ground();

        for blueprint in map.blueprints() {
            if blueprint.kind == TileKind::Player {
                self.player.place(blueprint.pos);
                continue;
            }
            let id = self.next_tile_id();
            if let Some(tile) = Tile::spawn(id, blueprint.kind, blueprint.pos) {
                self.place_tile(tile);
            }
        }
        self.display.add_player(&self.player);

        let coins = self.count_tiles(TileKind::Coin);
        let mega_coins = self.count_tiles(TileKind::MegaCoin);
        self.player.score.set_available(coins, mega_coins);

        log::info!(
            "Generated map '{}' #{}: {} tiles, {} coins, {} mega coins",
            map.name,
            map.number,
            self.tiles.len(),
            coins,
            mega_coins
        );
        self.map = Some(map);
    }

    /// Lay out the current map again (restart). Returns false without a map.
    pub fn regenerate(&mut self) -> bool {
        match self.map.take() {
            Some(map) => {
                self.generate_map(map);
                true
            }
            None => false,
        }
    }

    fn count_tiles(&self, kind: TileKind) -> u32 {
        self.tiles.iter().filter(|t| t.kind == kind).count() as u32
    }

    // === Start / stop / pause ===

    pub fn start(&mut self) {
        if self.state != RunState::Running {
            self.clock.arm();
            self.state = RunState::Running;
            log::info!("Game started");
        }
    }

    /// Stop the timer. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if self.state != RunState::Stopped {
            self.clock.disarm();
            self.state = RunState::Stopped;
            log::info!("Game stopped");
        }
    }

    /// Toggle between running and paused; ignored while stopped
    pub fn pause(&mut self) {
        match self.state {
            RunState::Running => {
                self.clock.disarm();
                self.state = RunState::Paused;
                log::info!("Game paused");
            }
            RunState::Paused => {
                self.clock.arm();
                self.state = RunState::Running;
                log::info!("Game resumed");
            }
            RunState::Stopped => {}
        }
    }

    /// Launch the player upward on the next tick (only once started)
    pub fn jump(&mut self) {
        if self.is_started() {
            self.player.jump(&self.tuning);
        }
    }

    // === Simulation ===

    /// Feed real elapsed seconds; runs every tick that is due
    pub fn update(&mut self, dt: f32) -> Vec<FrameReport> {
        let due = self.clock.advance(dt);
        let mut reports = Vec::with_capacity(due as usize);
        for _ in 0..due {
            if self.state != RunState::Running {
                break;
            }
            reports.push(self.tick());
        }
        reports
    }

    /// Advance the simulation by one frame. Does nothing unless running.
    pub fn tick(&mut self) -> FrameReport {
        let mut report = FrameReport::default();
        if self.state != RunState::Running {
            return report;
        }
        self.time_ticks += 1;

        // World scroll
        let scroll = Vec2::new(-self.tuning.tile_velocity, 0.0);
        for tile in &mut self.tiles {
            tile.rect.translate(scroll);
        }

        self.player.perform_gravity(&self.tuning);
        for tile in &mut self.tiles {
            tile.perform_gravity(&self.tuning);
        }

        // Tiles that scrolled past the left edge
        let display = &mut self.display;
        self.tiles.retain(|tile| {
            let visible = tile.rect.right() >= 0.0;
            if !visible {
                display.remove_tile(tile.id);
                report.removed.push(tile.id);
            }
            visible
        });

        let events = self.detect_collisions();
        self.resolve_events(events, &mut report);
        report
    }

    /// Run every candidate tile's collision policy against the player.
    ///
    /// Halts shift the whole world as soon as they are produced, so tiles
    /// checked later in the same pass see the corrected positions.
    fn detect_collisions(&mut self) -> Vec<CollisionEvent> {
        let mut events = Vec::new();
        let player = self.player.rect;

        for i in 0..self.tiles.len() {
            let tile = &self.tiles[i];
            // the finish fires on horizontal progress, overlap or not
            if !(is_collided(&tile.rect, &player) || tile.kind == TileKind::Finish) {
                continue;
            }
            let side = dominant_side(&tile.rect, &player, TILE_SIZE);
            if tile.checks_open_side() && !is_side_open(&self.tiles, i, side, TILE_SIZE) {
                continue;
            }
            let Some(event) = self.tiles[i].collide_with(&player, side) else {
                continue;
            };
            log::trace!("Collision {:?} on {:?}", event, side);

            if let Some(dx) = event.command.halt_offset() {
                let shift = Vec2::new(dx, 0.0);
                for tile in &mut self.tiles {
                    tile.rect.translate(shift);
                }
            }
            if !matches!(event.command, Command::Halt(_)) {
                events.push(event);
            }
        }
        events
    }

    /// Fold the frame's events into score, grounding and game over
    fn resolve_events(&mut self, events: Vec<CollisionEvent>, report: &mut FrameReport) {
        let mut died = false;
        let mut won = false;
        let mut unground = false;
        let mut ground: Option<f32> = None;

        for event in &events {
            match event.command {
                Command::Coin => {
                    report.score_changes.extend(self.player.score.collect_coin());
                    self.collect(event.source, report);
                }
                Command::MegaCoin => {
                    report
                        .score_changes
                        .extend(self.player.score.collect_mega_coin());
                    self.collect(event.source, report);
                }
                Command::Died => died = true,
                Command::HaltAndWin(_) => won = true,
                Command::Ground(height) => ground = Some(height),
                Command::Unground => unground = true,
                Command::Halt(_) => {}
            }
        }

        if unground {
            // bumped from below: restart the fall with a downward kick
            self.player.ground();
            self.player.unground(self.tuning.gravity);
        } else if let Some(height) = ground {
            let was_grounded = self.player.is_grounded();
            self.player.ground();
            self.player.rect.set_bottom(height);
            if !was_grounded && self.display.should_jump_again() {
                self.player.jump(&self.tuning);
            }
        } else {
            self.player.unground(0.0);
        }

        let map_height = self.map.as_ref().map_or(f32::INFINITY, Map::height);
        if self.player.rect.top() >= map_height {
            died = true;
        }

        report.events = events;
        if died || won {
            report.outcome = Some(self.game_over(died, &mut report.score_changes));
        }
    }

    fn collect(&mut self, id: TileId, report: &mut FrameReport) {
        if self.remove_tile(id) {
            report.removed.push(id);
        }
    }

    fn game_over(&mut self, died: bool, changes: &mut Vec<ScoreField>) -> GameOutcome {
        if !died {
            changes.extend(self.player.score.award_completion());
        }

        let total = self.player.score.total();
        let is_high_score = self
            .map
            .as_mut()
            .is_some_and(|map| map.record_score(total));
        if is_high_score {
            changes.extend(self.player.score.mark_high_score());
        }

        self.stop();
        let outcome = GameOutcome {
            died,
            score: self.player.score.clone(),
            total,
            is_high_score,
        };
        log::info!(
            "Game over after {} ticks: {} with {} points{}",
            self.time_ticks,
            if died { "died" } else { "finished" },
            total,
            if is_high_score { " (new high score)" } else { "" }
        );
        self.display.game_over(&outcome);
        self.outcome = Some(outcome.clone());
        outcome
    }
}
