//! Damage roll - How hard an enemy hits a hero

use crate::constants::MIN_DAMAGE;
use crate::stat_block::StatBlock;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Every factor of one damage calculation
///
/// `raw_damage = crit_factor * intelligence_factor * base_factor / armor_factor`,
/// and `damage` is `raw_damage` floored at 1 and truncated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageRoll {
    /// Uniform draw in [0, 1) that drove the crit factor
    pub roll: f64,
    pub crit_factor: f64,
    pub intelligence_factor: f64,
    pub base_factor: f64,
    pub armor_factor: f64,
    pub raw_damage: f64,
    /// Hit points actually removed
    pub damage: i32,
}

/// Calculate damage for a known roll
///
/// 1. `crit = 1 + roll * sqrt(enemy.luck)`
/// 2. `intelligence = ln(1 + enemy.int / max(1, hero.int))`
/// 3. `base = enemy.str * enemy.end`
/// 4. `armor = max(1, hero.str * hero.end)`
///
/// Degenerate inputs (negative luck, negative stats) can make the raw value
/// NaN or negative; the floor still yields 1.
pub fn roll_damage(enemy: &StatBlock, hero: &StatBlock, roll: f64) -> DamageRoll {
    let crit_factor = 1.0 + roll * f64::from(enemy.luck).sqrt();
    let intelligence_factor =
        (1.0 + f64::from(enemy.intelligence) / f64::from(hero.intelligence.max(1))).ln();
    let base_factor = f64::from(enemy.strength) * f64::from(enemy.endurance);
    let armor_factor = (f64::from(hero.strength) * f64::from(hero.endurance)).max(1.0);

    let raw_damage = crit_factor * intelligence_factor * base_factor / armor_factor;
    // f64::max ignores NaN, so a NaN raw value also lands on the floor
    let damage = raw_damage.max(MIN_DAMAGE).floor() as i32;

    DamageRoll {
        roll,
        crit_factor,
        intelligence_factor,
        base_factor,
        armor_factor,
        raw_damage,
        damage,
    }
}

/// Calculate damage drawing the roll from `rng`
pub fn roll_damage_with_rng<R: Rng + ?Sized>(
    enemy: &StatBlock,
    hero: &StatBlock,
    rng: &mut R,
) -> DamageRoll {
    let roll: f64 = rng.gen();
    roll_damage(enemy, hero, roll)
}
