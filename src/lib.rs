//! Coin Collector - A side-scrolling coin collecting platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gravity, collisions, scoring, game loop)
//! - `tuning`: Data-driven physics constants
//! - `settings`: Player preferences (character, tuning)
//! - `error`: Error type for fallible construction paths

pub mod error;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::SimError;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Frames (ticks) per second of the simulation timer
    pub const FRAMES_PER_SECOND: u32 = 62;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / FRAMES_PER_SECOND as f32;
    /// Maximum ticks run per `update` call to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Edge length of a standard tile
    pub const TILE_SIZE: f32 = 32.0;
    /// Visible rows; shorter layouts are bottom-aligned to this
    pub const TILE_VISUAL_ROWS: u32 = 16;

    /// Gravity (downward is positive)
    pub const GRAVITY: f32 = 9.8;
    /// World scroll per tick
    pub const TILE_VELOCITY: f32 = 10.0;
    /// Jump launch speed (applied upward)
    pub const PLAYER_VELOCITY: f32 = 46.0;

    /// Jump calibration: horizontal span of a full jump and the time divisor it was tuned at
    pub const CALIBRATED_JUMP_SPAN: f32 = 55.0;
    pub const CALIBRATED_TIME_PART: f32 = 7.0;

    /// Ticks per unit of integrator time
    pub const TIME_PART: f32 = (CALIBRATED_JUMP_SPAN * CALIBRATED_TIME_PART * GRAVITY)
        / (TILE_VELOCITY * PLAYER_VELOCITY * 2.0);

    /// Inset applied to the probe rectangle of the open-side check
    pub const OPEN_SIDE_MARGIN: f32 = 2.0;

    /// Point values
    pub const COIN_VALUE: u64 = 100;
    pub const MEGA_COIN_VALUE: u64 = 500;
    pub const COMPLETED_BONUS: u64 = 1000;
    pub const MEGA_COINS_BONUS: u64 = 1000;
}
