//! Player preferences
//!
//! Storing them is up to the host; this module only round-trips JSON.

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::sim::player::PlayerCharacter;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sprite used for the player
    pub character: PlayerCharacter,
    /// Physics constants
    pub tuning: Tuning,
}

impl Settings {
    pub fn with_character(character: PlayerCharacter) -> Self {
        Self {
            character,
            ..Self::default()
        }
    }

    /// Parse settings, validating the embedded tuning
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.tuning.validate()?;
        log::info!("Loaded settings (character: {})", settings.character.as_str());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_roundtrip() {
        let mut settings = Settings::with_character(PlayerCharacter::Robot);
        settings.tuning.gravity = 11.0;
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_invalid_tuning_rejected() {
        let err = Settings::from_json(r#"{ "tuning": { "frames_per_second": 0 } }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidTuning { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json(r#"{ "character": "Pirate" }"#).unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }
}
