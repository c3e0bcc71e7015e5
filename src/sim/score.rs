//! Score counters and derived point totals
//!
//! Only counters and flags are stored. Every point value is computed on
//! demand, so totals can never drift out of sync with the counters.
//! Mutators report which fields they changed so a HUD can refresh just those.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Score fields a HUD may display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreField {
    CoinsCollected,
    CoinsAvailable,
    CoinsScore,
    MegaCoinsCollected,
    MegaCoinsAvailable,
    MegaCoinsScore,
    MegaCoinsBonus,
    IsCompletedBonus,
    CompletedBonus,
    IsHighScore,
    TotalScore,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub coins_collected: u32,
    pub coins_available: u32,
    pub mega_coins_collected: u32,
    pub mega_coins_available: u32,
    pub is_completed_bonus: bool,
    pub is_high_score: bool,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn coins_score(&self) -> u64 {
        self.coins_collected as u64 * COIN_VALUE
    }

    pub fn mega_coins_score(&self) -> u64 {
        self.mega_coins_collected as u64 * MEGA_COIN_VALUE
    }

    pub fn completed_bonus(&self) -> u64 {
        if self.is_completed_bonus { COMPLETED_BONUS } else { 0 }
    }

    /// All available mega coins collected (vacuously true on maps without any)
    pub fn is_mega_coins_bonus(&self) -> bool {
        self.mega_coins_collected >= self.mega_coins_available
    }

    pub fn mega_coins_bonus(&self) -> u64 {
        if self.is_mega_coins_bonus() { MEGA_COINS_BONUS } else { 0 }
    }

    pub fn total(&self) -> u64 {
        self.coins_score() + self.mega_coins_score() + self.completed_bonus() + self.mega_coins_bonus()
    }

    pub fn collect_coin(&mut self) -> &'static [ScoreField] {
        self.coins_collected += 1;
        &[
            ScoreField::CoinsCollected,
            ScoreField::CoinsScore,
            ScoreField::TotalScore,
        ]
    }

    pub fn collect_mega_coin(&mut self) -> &'static [ScoreField] {
        self.mega_coins_collected += 1;
        &[
            ScoreField::MegaCoinsCollected,
            ScoreField::MegaCoinsScore,
            ScoreField::MegaCoinsBonus,
            ScoreField::TotalScore,
        ]
    }

    pub fn set_available(&mut self, coins: u32, mega_coins: u32) -> &'static [ScoreField] {
        self.coins_available = coins;
        self.mega_coins_available = mega_coins;
        &[
            ScoreField::CoinsAvailable,
            ScoreField::MegaCoinsAvailable,
            ScoreField::MegaCoinsBonus,
            ScoreField::TotalScore,
        ]
    }

    pub fn award_completion(&mut self) -> &'static [ScoreField] {
        self.is_completed_bonus = true;
        &[
            ScoreField::IsCompletedBonus,
            ScoreField::CompletedBonus,
            ScoreField::TotalScore,
        ]
    }

    pub fn mark_high_score(&mut self) -> &'static [ScoreField] {
        self.is_high_score = true;
        &[ScoreField::IsHighScore]
    }
}
