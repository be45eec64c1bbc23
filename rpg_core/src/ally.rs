//! Ally - Friendly map entity running a callback on contact

use crate::combat::Interactive;
use crate::engine::EngineSink;
use crate::hero::Hero;
use crate::types::{Position, SpriteId};
use rand::RngCore;
use std::fmt;

/// Callback run when the hero meets an ally
pub type AllyAction = Box<dyn FnMut(&mut dyn EngineSink, &mut Hero)>;

/// Non-combat map entity
pub struct Ally {
    pub sprite: SpriteId,
    pub position: Position,
    action: AllyAction,
}

impl Ally {
    pub fn new(sprite: SpriteId, action: AllyAction, position: Position) -> Self {
        Ally {
            sprite,
            position,
            action,
        }
    }
}

impl fmt::Debug for Ally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ally")
            .field("sprite", &self.sprite)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

impl Interactive for Ally {
    fn interact(&mut self, engine: &mut dyn EngineSink, hero: &mut Hero, _rng: &mut dyn RngCore) {
        (self.action)(engine, hero);
    }

    fn position(&self) -> Position {
        self.position
    }

    fn sprite(&self) -> &SpriteId {
        &self.sprite
    }
}

/// Stock ally actions
pub mod actions {
    use super::AllyAction;
    use crate::effect::{Effect, EffectKind};
    use crate::engine::EngineSink;
    use crate::hero::Hero;

    /// Fully heal the hero
    pub fn restore_hp() -> AllyAction {
        Box::new(|engine: &mut dyn EngineSink, hero: &mut Hero| {
            engine.add_score(0.1);
            hero.creature.full_heal();
            engine.notify("HP restored");
        })
    }

    /// Give the hero a fixed amount of gold
    pub fn add_gold(amount: u64) -> AllyAction {
        Box::new(move |engine: &mut dyn EngineSink, hero: &mut Hero| {
            engine.add_score(0.1);
            hero.add_gold(amount);
            engine.notify(&format!("{} gold added", amount));
        })
    }

    /// Sell an effect for gold; a hero who cannot pay loses a little score
    pub fn shrine(cost: u64, kind: EffectKind) -> AllyAction {
        Box::new(move |engine: &mut dyn EngineSink, hero: &mut Hero| {
            if hero.spend_gold(cost) {
                engine.add_score(0.2);
                let effect = Effect::apply(kind, hero);
                engine.notify(&format!("{} applied", effect.notify_effect()));
            } else {
                engine.add_score(-0.1);
                engine.notify("Not enough gold");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::EffectKind;
    use crate::engine::MessageLog;
    use crate::stat_block::StatBlock;
    use rand::rngs::mock::StepRng;
    use std::cell::Cell;
    use std::rc::Rc;

    fn hero() -> Hero {
        Hero::new(StatBlock::new(5, 5, 5, 5), SpriteId::from("knight"))
    }

    #[test]
    fn test_interact_invokes_callback() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut ally = Ally::new(
            SpriteId::from("fairy"),
            Box::new(move |engine: &mut dyn EngineSink, hero: &mut Hero| {
                counter.set(counter.get() + 1);
                hero.gold += 1;
                engine.notify("hello");
            }),
            Position::new(2, 2),
        );

        let mut engine = MessageLog::new();
        let mut hero = hero();
        let mut rng = StepRng::new(0, 1);
        ally.interact(&mut engine, &mut hero, &mut rng);
        ally.interact(&mut engine, &mut hero, &mut rng);

        assert_eq!(calls.get(), 2);
        assert_eq!(hero.gold, 2);
        assert_eq!(engine.messages, vec!["hello", "hello"]);
        assert_eq!(ally.position(), Position::new(2, 2));
    }

    #[test]
    fn test_restore_hp() {
        let mut engine = MessageLog::new();
        let mut hero = hero();
        hero.creature.hp = 1;

        let mut action = actions::restore_hp();
        action(&mut engine, &mut hero);

        assert_eq!(hero.hp(), hero.max_hp());
        assert_eq!(engine.messages, vec!["HP restored"]);
        assert!((engine.score - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_add_gold() {
        let mut engine = MessageLog::new();
        let mut hero = hero();

        let mut action = actions::add_gold(120);
        action(&mut engine, &mut hero);

        assert_eq!(hero.gold, 120);
        assert_eq!(engine.messages, vec!["120 gold added"]);
    }

    #[test]
    fn test_shrine_paid() {
        let mut engine = MessageLog::new();
        let mut hero = hero();
        hero.gold = 50;

        let mut action = actions::shrine(20, EffectKind::Blessing);
        action(&mut engine, &mut hero);

        assert_eq!(hero.gold, 30);
        assert_eq!(*hero.stats(), StatBlock::new(6, 6, 6, 6));
        assert_eq!(hero.active_effects(), &[EffectKind::Blessing]);
        assert_eq!(engine.messages, vec!["Blessing applied"]);
        assert!((engine.score - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_shrine_unpaid() {
        let mut engine = MessageLog::new();
        let mut hero = hero();
        hero.gold = 5;

        let mut action = actions::shrine(20, EffectKind::Berserk);
        action(&mut engine, &mut hero);

        assert_eq!(hero.gold, 5);
        assert_eq!(*hero.stats(), StatBlock::new(5, 5, 5, 5));
        assert_eq!(engine.messages, vec!["Not enough gold"]);
        assert!((engine.score + 0.1).abs() < 1e-12);
    }
}
