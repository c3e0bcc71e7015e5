//! Error types for Coin Collector
//!
//! The simulation itself never fails: every tick either succeeds or the
//! caller broke an invariant. Errors only surface while building the inputs
//! the simulation runs on (maps, tuning, settings).

use thiserror::Error;

/// Errors raised while constructing maps or loading configuration.
#[derive(Error, Debug)]
pub enum SimError {
    /// Map dimensions are not positive and finite
    #[error("invalid map size {width}x{height}")]
    InvalidMapSize {
        /// Requested width
        width: f32,
        /// Requested height
        height: f32,
    },
    /// More than one player start in a map's blueprints
    #[error("map has {count} player starts, expected at most one")]
    MultiplePlayerStarts {
        /// Number of player blueprints found
        count: usize,
    },
    /// A tuning value is out of range
    #[error("tuning value {field} = {value} is out of range")]
    InvalidTuning {
        /// Offending field
        field: &'static str,
        /// Value that was rejected
        value: f32,
    },
    /// JSON (de)serialization failed
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = SimError::InvalidMapSize {
            width: 0.0,
            height: 512.0,
        };
        assert_eq!(e.to_string(), "invalid map size 0x512");

        let e = SimError::MultiplePlayerStarts { count: 2 };
        assert!(e.to_string().contains("2 player starts"));
    }

    #[test]
    fn test_json_error_converts() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let e: SimError = err.into();
        assert!(matches!(e, SimError::Config(_)));
        assert!(std::error::Error::source(&e).is_some());
    }
}
