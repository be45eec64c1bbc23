//! Creature - Shared body of heroes and enemies

use crate::constants::{BASE_HP, HP_PER_ENDURANCE};
use crate::stat_block::StatBlock;
use crate::types::{Position, SpriteId};
use serde::{Deserialize, Serialize};

/// Stats, position and hit points of anything that can fight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub sprite: SpriteId,
    pub stats: StatBlock,
    pub position: Position,
    /// Current hit points; may dip below zero until death is checked
    pub hp: i32,
    /// Derived from endurance, see [`Creature::calc_max_hp`]
    pub max_hp: i32,
}

impl Creature {
    /// Create a creature at full health
    pub fn new(sprite: SpriteId, stats: StatBlock, position: Position) -> Self {
        let mut creature = Creature {
            sprite,
            stats,
            position,
            hp: 0,
            max_hp: 0,
        };
        creature.calc_max_hp();
        creature.hp = creature.max_hp;
        creature
    }

    /// Max HP for a given endurance: `5 + 2 * endurance`
    pub fn max_hp_for(endurance: i32) -> i32 {
        BASE_HP + HP_PER_ENDURANCE * endurance
    }

    /// Recompute `max_hp` from current endurance
    ///
    /// Does not touch `hp`; callers that want a full heal follow up with
    /// [`Creature::full_heal`].
    pub fn calc_max_hp(&mut self) {
        self.max_hp = Self::max_hp_for(self.stats.endurance);
    }

    pub fn full_heal(&mut self) {
        self.hp = self.max_hp;
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}
