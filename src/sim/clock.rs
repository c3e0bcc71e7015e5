//! Fixed-timestep frame clock
//!
//! Plays the part of the periodic game timer: while armed it turns real
//! elapsed time into whole simulation ticks, carrying the remainder over.

use crate::consts::MAX_SUBSTEPS;

/// Longest real frame accepted in one step; longer gaps (tab switch,
/// debugger) are clamped instead of replayed
const MAX_FRAME_SECS: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct FrameClock {
    step: f32,
    accumulator: f32,
    armed: bool,
}

impl FrameClock {
    pub fn new(step: f32) -> Self {
        Self {
            step,
            accumulator: 0.0,
            armed: false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Returns false if the clock was already armed
    pub fn arm(&mut self) -> bool {
        if self.armed {
            return false;
        }
        self.armed = true;
        self.accumulator = 0.0;
        true
    }

    /// Returns false if the clock was already disarmed
    pub fn disarm(&mut self) -> bool {
        if !self.armed {
            return false;
        }
        self.armed = false;
        self.accumulator = 0.0;
        true
    }

    /// Feed `dt` seconds and return how many ticks are due (at most `MAX_SUBSTEPS`)
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !self.armed {
            return 0;
        }
        // a NaN would stick in the accumulator until the next arm
        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_SECS) } else { 0.0 };
        self.accumulator += dt;

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < MAX_SUBSTEPS {
            self.accumulator -= self.step;
            ticks += 1;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disarmed_clock_never_ticks() {
        let mut clock = FrameClock::new(0.01);
        assert_eq!(clock.advance(1.0), 0);
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut clock = FrameClock::new(0.01);
        clock.arm();
        assert_eq!(clock.advance(0.025), 2);
        assert_eq!(clock.advance(0.006), 1);
    }

    #[test]
    fn test_substeps_are_capped() {
        let mut clock = FrameClock::new(0.001);
        clock.arm();
        assert_eq!(clock.advance(0.05), MAX_SUBSTEPS);
    }

    #[test]
    fn test_arm_and_disarm_report_transitions() {
        let mut clock = FrameClock::new(0.01);
        assert!(clock.arm());
        assert!(clock.is_armed());
        assert!(!clock.arm());
        assert!(clock.disarm());
        assert!(!clock.is_armed());
        assert!(!clock.disarm());
    }

    #[test]
    fn test_non_finite_frame_time_is_ignored() {
        let mut clock = FrameClock::new(0.01);
        clock.arm();
        assert_eq!(clock.advance(f32::NAN), 0);
        assert_eq!(clock.advance(f32::INFINITY), 0);
        assert_eq!(clock.advance(0.025), 2);
    }
}
