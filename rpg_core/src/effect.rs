//! Effects - Buffs and debuffs applied to a hero
//!
//! Applying an effect permanently changes the hero it is applied to: the
//! delta is added to the hero's own stats and, for effects touching
//! endurance, max HP is recomputed and the hero is fully healed. The
//! returned [`Effect`] carries a snapshot of the resulting stats and a label
//! for display. Effects are not idempotent; applying one twice stacks.

use crate::hero::Hero;
use crate::stat_block::StatBlock;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// The available effect variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    Berserk,
    Blessing,
    Fortunate,
    Weakness,
    Luckless,
}

impl EffectKind {
    /// Get all effect kinds
    pub fn all() -> &'static [EffectKind] {
        &[
            EffectKind::Berserk,
            EffectKind::Blessing,
            EffectKind::Fortunate,
            EffectKind::Weakness,
            EffectKind::Luckless,
        ]
    }

    /// Stat change applied by this effect (strength, endurance, luck, intelligence)
    pub fn delta(&self) -> StatBlock {
        match self {
            EffectKind::Berserk => StatBlock::new(3, 3, 3, -3),
            EffectKind::Blessing => StatBlock::new(1, 1, 1, 1),
            EffectKind::Fortunate => StatBlock::new(0, 0, 5, 0),
            EffectKind::Weakness => StatBlock::new(-1, -1, -1, -1),
            EffectKind::Luckless => StatBlock::new(0, 0, -2, 0),
        }
    }

    /// Whether applying this effect recomputes max HP and fully heals
    pub fn refreshes_vitality(&self) -> bool {
        match self {
            EffectKind::Berserk | EffectKind::Blessing | EffectKind::Weakness => true,
            EffectKind::Fortunate | EffectKind::Luckless => false,
        }
    }

    /// Buffs are positive; Weakness and Luckless are curses
    pub fn is_positive(&self) -> bool {
        matches!(
            self,
            EffectKind::Berserk | EffectKind::Blessing | EffectKind::Fortunate
        )
    }

    /// Fixed display label
    pub fn label(&self) -> &'static str {
        match self {
            EffectKind::Berserk => "Berserk",
            EffectKind::Blessing => "Blessing",
            EffectKind::Fortunate => "Fortunate",
            EffectKind::Weakness => "Weakness",
            EffectKind::Luckless => "Luckless",
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Record of one effect application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    /// Effective stats after the effect, equal to the hero's stats at that moment
    pub stats: StatBlock,
}

impl Effect {
    /// Apply `kind` to `hero`, mutating the hero's stats (and HP for
    /// vitality-refreshing kinds)
    pub fn apply(kind: EffectKind, hero: &mut Hero) -> Effect {
        let mut stats = *hero.stats();
        stats += kind.delta();

        // The hero's own block receives the same change as the snapshot.
        *hero.stats_mut() = stats;
        if kind.refreshes_vitality() {
            hero.creature.calc_max_hp();
            hero.creature.full_heal();
        }
        hero.record_effect(kind);

        debug!(
            effect = kind.label(),
            positive = kind.is_positive(),
            strength = stats.strength,
            endurance = stats.endurance,
            luck = stats.luck,
            intelligence = stats.intelligence,
            hp = hero.hp(),
            "effect applied"
        );

        Effect { kind, stats }
    }

    /// Label for the presentation layer
    pub fn notify_effect(&self) -> &'static str {
        self.kind.label()
    }
}
