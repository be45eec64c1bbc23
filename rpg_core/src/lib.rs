//! rpg_core - Combat and progression core for a tile-based RPG
//!
//! This library provides:
//! - StatBlock: The four-attribute profile driving every formula
//! - Creature / Hero / Enemy / Ally: Map entities and their interaction protocol
//! - Effects: Buffs and debuffs applied to a hero's stats
//! - Combat: Damage rolls, experience rewards, leveling and scoring
//! - EngineSink: The notification/score/working-flag boundary the driving loop supplies

pub mod ally;
pub mod combat;
pub mod config;
pub mod constants;
pub mod creature;
pub mod effect;
pub mod enemy;
pub mod engine;
pub mod hero;
pub mod prelude;
pub mod stat_block;
pub mod types;

// Re-export core types for convenience
pub use ally::{Ally, AllyAction};
pub use combat::{resolve_encounter, roll_damage, roll_damage_with_rng, DamageRoll, EncounterResult, Interactive};
pub use config::{default_bestiary, Bestiary, ConfigError, EnemyTemplate, HeroTemplate};
pub use creature::Creature;
pub use effect::{Effect, EffectKind};
pub use enemy::Enemy;
pub use engine::{EngineSink, MessageLog};
pub use hero::Hero;
pub use stat_block::{Attribute, StatBlock, StatError};
pub use types::{Position, SpriteId};
