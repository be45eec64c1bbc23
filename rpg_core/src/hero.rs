//! Hero - The player's creature with level, experience and gold

use crate::constants::{HERO_START, LEVEL_ENDURANCE_GAIN, LEVEL_EXP_BASE, LEVEL_STRENGTH_GAIN};
use crate::creature::Creature;
use crate::effect::EffectKind;
use crate::stat_block::StatBlock;
use crate::types::{Position, SpriteId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub creature: Creature,
    pub level: u32,
    pub exp: u64,
    pub gold: u64,
    /// Effects applied so far, oldest first
    #[serde(default)]
    effects: Vec<EffectKind>,
}

impl Hero {
    /// Create a level 1 hero at the start position
    pub fn new(stats: StatBlock, sprite: SpriteId) -> Self {
        let (x, y) = HERO_START;
        Hero {
            creature: Creature::new(sprite, stats, Position::new(x, y)),
            level: 1,
            exp: 0,
            gold: 0,
            effects: Vec::new(),
        }
    }

    /// Experience required to advance from `level`: `100 * 2^(level - 1)`
    ///
    /// `None` once the threshold no longer fits in a `u64`; that level is
    /// the cap and no amount of experience advances past it.
    pub fn exp_to_next_level(level: u32) -> Option<u64> {
        let shift = level.saturating_sub(1);
        LEVEL_EXP_BASE
            .checked_shl(shift)
            .filter(|v| v >> shift == LEVEL_EXP_BASE)
    }

    /// Whether current experience is enough for at least one level
    pub fn can_level_up(&self) -> bool {
        Self::exp_to_next_level(self.level).is_some_and(|needed| self.exp >= needed)
    }

    /// Apply every level-up the current experience has earned
    ///
    /// Each level grants +2 strength, +2 endurance, recomputes max HP and
    /// fully heals. Returns the number of levels gained.
    pub fn level_up(&mut self) -> u32 {
        let mut gained = 0;
        while self.can_level_up() {
            self.level += 1;
            self.creature.stats.strength += LEVEL_STRENGTH_GAIN;
            self.creature.stats.endurance += LEVEL_ENDURANCE_GAIN;
            self.creature.calc_max_hp();
            self.creature.full_heal();
            gained += 1;
        }

        if gained > 0 {
            debug!(level = self.level, gained, exp = self.exp, "hero leveled up");
        }
        gained
    }

    pub fn stats(&self) -> &StatBlock {
        &self.creature.stats
    }

    pub fn stats_mut(&mut self) -> &mut StatBlock {
        &mut self.creature.stats
    }

    pub fn hp(&self) -> i32 {
        self.creature.hp
    }

    pub fn max_hp(&self) -> i32 {
        self.creature.max_hp
    }

    pub fn position(&self) -> Position {
        self.creature.position
    }

    pub fn is_alive(&self) -> bool {
        self.creature.is_alive()
    }

    pub fn add_gold(&mut self, amount: u64) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Pay `amount` if affordable; returns whether the gold was spent
    pub fn spend_gold(&mut self, amount: u64) -> bool {
        match self.gold.checked_sub(amount) {
            Some(rest) => {
                self.gold = rest;
                true
            }
            None => false,
        }
    }

    /// Effects applied to this hero, oldest first
    pub fn active_effects(&self) -> &[EffectKind] {
        &self.effects
    }

    pub(crate) fn record_effect(&mut self, kind: EffectKind) {
        self.effects.push(kind);
    }
}
