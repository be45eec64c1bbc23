//! EncounterResult - Outcome of an enemy encounter

use super::damage::DamageRoll;
use serde::{Deserialize, Serialize};

/// What one encounter did to the hero and the score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EncounterResult {
    pub damage: DamageRoll,
    /// Experience added to the hero
    pub exp_gained: u64,
    /// Levels gained (always 0 when the hero died)
    pub levels_gained: u32,
    /// Amount added to the engine score
    pub score_gained: f64,
    pub hero_died: bool,
}

impl EncounterResult {
    /// Whether the enemy should be removed from the map
    pub fn enemy_defeated(&self) -> bool {
        !self.hero_died
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("{} damage taken", self.damage.damage)];

        if self.exp_gained > 0 {
            parts.push(format!("+{} exp", self.exp_gained));
        }

        if self.levels_gained > 0 {
            parts.push(format!("+{} level(s)", self.levels_gained));
        }

        parts.push(format!("+{:.2} score", self.score_gained));

        if self.hero_died {
            parts.push("FATAL".to_string());
        }

        parts.join(", ")
    }
}
