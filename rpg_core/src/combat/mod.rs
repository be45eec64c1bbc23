//! Combat - Damage rolls, encounter resolution and the interaction contract

mod damage;
mod resolution;
mod result;

pub use damage::{roll_damage, roll_damage_with_rng, DamageRoll};
pub use resolution::{apply_encounter, encounter_score, exp_reward, resolve_encounter};
pub use result::EncounterResult;

use crate::engine::EngineSink;
use crate::hero::Hero;
use crate::types::{Position, SpriteId};
use rand::RngCore;

/// Anything on the map that responds when the hero steps onto it
pub trait Interactive {
    /// React to the hero, reporting into `engine`
    ///
    /// `rng` is the only source of randomness an interaction may use.
    fn interact(&mut self, engine: &mut dyn EngineSink, hero: &mut Hero, rng: &mut dyn RngCore);

    fn position(&self) -> Position;

    fn sprite(&self) -> &SpriteId;
}
