//! Prelude module for convenient imports
//!
//! ```rust
//! use rpg_core::prelude::*;
//! ```

// Entities
pub use crate::ally::Ally;
pub use crate::creature::Creature;
pub use crate::enemy::Enemy;
pub use crate::hero::Hero;

// Stats and effects
pub use crate::effect::{Effect, EffectKind};
pub use crate::stat_block::{Attribute, StatBlock};
pub use crate::types::{Position, SpriteId};

// Combat
pub use crate::combat::{resolve_encounter, EncounterResult, Interactive};
pub use crate::engine::{EngineSink, MessageLog};

// Config
pub use crate::config::default_bestiary;
