//! Data-driven physics tuning
//!
//! Defaults reproduce the calibrated constants in [`crate::consts`]. A tuning
//! can be loaded from JSON; missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;

/// Physics constants the simulation reads every tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Timer rate (ticks per second)
    pub frames_per_second: u32,
    /// Downward acceleration
    pub gravity: f32,
    /// World scroll per tick
    pub tile_velocity: f32,
    /// Upward launch speed of a jump
    pub player_velocity: f32,
    /// Ticks per unit of integrator time
    pub time_part: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            frames_per_second: FRAMES_PER_SECOND,
            gravity: GRAVITY,
            tile_velocity: TILE_VELOCITY,
            player_velocity: PLAYER_VELOCITY,
            time_part: TIME_PART,
        }
    }
}

impl Tuning {
    /// Seconds per tick
    pub fn sim_dt(&self) -> f32 {
        1.0 / self.frames_per_second as f32
    }

    /// Integrator time elapsed after `ticks` ticks
    #[inline]
    pub fn elapsed_time(&self, ticks: u32) -> f32 {
        ticks as f32 / self.time_part
    }

    /// Reject values that would make the integrator or clock meaningless
    pub fn validate(&self) -> Result<(), SimError> {
        if self.frames_per_second == 0 {
            return Err(SimError::InvalidTuning {
                field: "frames_per_second",
                value: 0.0,
            });
        }
        let positive = [
            ("gravity", self.gravity),
            ("time_part", self.time_part),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::InvalidTuning { field, value });
            }
        }
        let finite = [
            ("tile_velocity", self.tile_velocity),
            ("player_velocity", self.player_velocity),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(SimError::InvalidTuning { field, value });
            }
        }
        Ok(())
    }

    /// Parse and validate a tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::debug!("Loaded tuning: {:?}", tuning);
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let t = Tuning::default();
        assert_eq!(t.frames_per_second, 62);
        assert_eq!(t.gravity, GRAVITY);
        assert!((t.time_part - 3773.0 / 920.0).abs() < 1e-4);
        assert!((t.sim_dt() - SIM_DT).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let t = Tuning::from_json(r#"{ "gravity": 12.5 }"#).unwrap();
        assert_eq!(t.gravity, 12.5);
        assert_eq!(t.tile_velocity, TILE_VELOCITY);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Tuning::from_json(r#"{ "time_part": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidTuning {
                field: "time_part",
                ..
            }
        ));

        let err = Tuning::from_json(r#"{ "frames_per_second": 0 }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidTuning { .. }));

        assert!(matches!(
            Tuning::from_json("[1, 2]").unwrap_err(),
            SimError::Config(_)
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let t = Tuning {
            player_velocity: 50.0,
            ..Default::default()
        };
        let back = Tuning::from_json(&t.to_json().unwrap()).unwrap();
        assert_eq!(t, back);
    }
}
