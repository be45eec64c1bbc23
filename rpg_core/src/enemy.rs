//! Enemy - A creature guarding an experience reward

use crate::combat::{resolve_encounter, Interactive};
use crate::creature::Creature;
use crate::engine::EngineSink;
use crate::hero::Hero;
use crate::stat_block::StatBlock;
use crate::types::{Position, SpriteId};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Hostile map entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub creature: Creature,
    /// Reward pool; the hero receives half of it on contact
    pub exp: u64,
}

impl Enemy {
    pub fn new(sprite: SpriteId, stats: StatBlock, exp: u64, position: Position) -> Self {
        Enemy {
            creature: Creature::new(sprite, stats, position),
            exp,
        }
    }

    pub fn stats(&self) -> &StatBlock {
        &self.creature.stats
    }
}

impl Interactive for Enemy {
    fn interact(&mut self, engine: &mut dyn EngineSink, hero: &mut Hero, rng: &mut dyn RngCore) {
        resolve_encounter(engine, hero, self, rng);
    }

    fn position(&self) -> Position {
        self.creature.position
    }

    fn sprite(&self) -> &SpriteId {
        &self.creature.sprite
    }
}
