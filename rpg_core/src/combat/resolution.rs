//! Encounter resolution - Apply an enemy hit, reward and score to a hero

use super::damage::{roll_damage_with_rng, DamageRoll};
use super::result::EncounterResult;
use crate::constants::{messages, SCORE_MULTIPLIER};
use crate::enemy::Enemy;
use crate::engine::EngineSink;
use crate::hero::Hero;
use rand::Rng;
use tracing::{debug, info};

/// Experience a hero earns from an enemy: half its reward pool, rounded down
pub fn exp_reward(enemy_exp: u64) -> u64 {
    enemy_exp / 2
}

/// Score for an encounter, rounded to two decimals
///
/// `10 * level * enemy_exp / max(1, hero_exp)` using the hero's level and
/// experience after the encounter. Exact halves round to even, so 0.125
/// scores 0.12 and 0.625 scores 0.62.
pub fn encounter_score(hero_level: u32, enemy_exp: u64, hero_exp: u64) -> f64 {
    let raw = SCORE_MULTIPLIER * f64::from(hero_level) * enemy_exp as f64
        / hero_exp.max(1) as f64;
    (raw * 100.0).round_ties_even() / 100.0
}

/// Resolve an encounter, drawing the damage roll from `rng`
pub fn resolve_encounter<E, R>(
    engine: &mut E,
    hero: &mut Hero,
    enemy: &Enemy,
    rng: &mut R,
) -> EncounterResult
where
    E: EngineSink + ?Sized,
    R: Rng + ?Sized,
{
    let damage = roll_damage_with_rng(enemy.stats(), hero.stats(), rng);
    apply_encounter(engine, hero, enemy, damage)
}

/// Resolve an encounter with an already rolled hit
///
/// Order matters:
/// 1. the hero gains half the enemy's exp,
/// 2. loses `damage` hit points,
/// 3. on death the engine gets "Game Over" and stops working, with no
///    level-up attempt and no kill messages,
/// 4. otherwise level-ups are applied and "Enemy killed!" is followed by
///    either "Level Up!" or "Damage received {n}",
/// 5. the score is added in both cases.
pub fn apply_encounter<E>(
    engine: &mut E,
    hero: &mut Hero,
    enemy: &Enemy,
    damage: DamageRoll,
) -> EncounterResult
where
    E: EngineSink + ?Sized,
{
    let exp_gained = exp_reward(enemy.exp);
    hero.exp = hero.exp.saturating_add(exp_gained);
    hero.creature.hp = hero.creature.hp.saturating_sub(damage.damage);

    let hero_died = !hero.is_alive();
    let mut levels_gained = 0;

    if hero_died {
        info!(hp = hero.hp(), damage = damage.damage, "hero died");
        engine.notify(messages::GAME_OVER);
        engine.set_working(false);
    } else {
        levels_gained = hero.level_up();
        engine.notify(messages::ENEMY_KILLED);
        if levels_gained > 0 {
            engine.notify(messages::LEVEL_UP);
        } else {
            engine.notify(&format!("{} {}", messages::DAMAGE_RECEIVED, damage.damage));
        }
    }

    let score_gained = encounter_score(hero.level, enemy.exp, hero.exp);
    engine.add_score(score_gained);

    debug!(
        damage = damage.damage,
        raw_damage = damage.raw_damage,
        exp_gained,
        levels_gained,
        score_gained,
        hero_hp = hero.hp(),
        "encounter resolved"
    );

    EncounterResult {
        damage,
        exp_gained,
        levels_gained,
        score_gained,
        hero_died,
    }
}
