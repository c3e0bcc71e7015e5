//! Closed-form gravity integration
//!
//! A falling body does not carry a velocity that is stepped every tick.
//! Instead it remembers where and how fast the fall started and evaluates
//! `p0 + v0*t + g*t^2/2` for the number of ticks elapsed since then. The
//! integrated coordinate is the body's bottom edge.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Vertical motion state of a gravity-affected body
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Gravity {
    /// Position is fixed
    #[default]
    Grounded,
    /// Position follows the kinematic curve from the start of the fall
    Falling {
        initial_position: f32,
        initial_velocity: f32,
        elapsed_ticks: u32,
    },
}

impl Gravity {
    pub fn is_grounded(&self) -> bool {
        matches!(self, Gravity::Grounded)
    }

    pub fn is_falling(&self) -> bool {
        !self.is_grounded()
    }

    /// Stop falling, discarding the fall state
    pub fn ground(&mut self) {
        *self = Gravity::Grounded;
    }

    /// Begin a fall from `position` with `velocity` (negative = upward).
    ///
    /// Does nothing while already falling, so the current trajectory is kept.
    pub fn unground(&mut self, position: f32, velocity: f32) {
        if self.is_grounded() {
            *self = Gravity::Falling {
                initial_position: position,
                initial_velocity: velocity,
                elapsed_ticks: 0,
            };
        }
    }

    /// Advance one tick and return the new position, or `None` when grounded
    pub fn advance(&mut self, tuning: &Tuning) -> Option<f32> {
        match self {
            Gravity::Grounded => None,
            Gravity::Falling {
                initial_position,
                initial_velocity,
                elapsed_ticks,
            } => {
                *elapsed_ticks += 1;
                Some(position_at(
                    *initial_position,
                    *initial_velocity,
                    *elapsed_ticks,
                    tuning,
                ))
            }
        }
    }
}

/// Position after `ticks` ticks of free fall
#[inline]
pub fn position_at(initial_position: f32, initial_velocity: f32, ticks: u32, tuning: &Tuning) -> f32 {
    let t = tuning.elapsed_time(ticks);
    initial_position + initial_velocity * t + 0.5 * tuning.gravity * t * t
}
