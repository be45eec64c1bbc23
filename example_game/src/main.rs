//! Example Game - A headless dungeon walk demonstrating rpg_core
//!
//! This game shows:
//! - Spawning a hero and enemies from the bundled bestiary
//! - Allies built from stock actions and from a custom callback
//! - The driving loop: move, interact with whatever shares the tile, remove it
//! - Reading score, messages and the working flag back from the engine sink
//!
//! Usage: `cargo run -p example_game -- [seed]`

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rpg_core::{
    ally::actions, default_bestiary, Ally, Bestiary, Effect, EffectKind, EngineSink, Hero,
    Interactive, Position, SpriteId,
};
use tracing::{debug, info};

/// Side length of the square map
const MAP_SIZE: i32 = 8;

/// Sink that prints messages as they arrive
struct ConsoleEngine {
    score: f64,
    working: bool,
    messages: Vec<String>,
}

impl ConsoleEngine {
    fn new() -> Self {
        ConsoleEngine {
            score: 0.0,
            working: true,
            messages: Vec::new(),
        }
    }
}

impl EngineSink for ConsoleEngine {
    fn notify(&mut self, message: &str) {
        info!(text = message, "notify");
        println!("  > {}", message);
        self.messages.push(message.to_string());
    }

    fn score(&self) -> f64 {
        self.score
    }

    fn set_score(&mut self, score: f64) {
        self.score = score;
    }

    fn is_working(&self) -> bool {
        self.working
    }

    fn set_working(&mut self, working: bool) {
        self.working = working;
    }
}

/// Main game state
struct GameState {
    hero: Hero,
    entities: Vec<Box<dyn Interactive>>,
    engine: ConsoleEngine,
    rng: ChaCha8Rng,
    turn: u32,
}

impl GameState {
    fn new(seed: u64) -> Self {
        let bestiary = default_bestiary();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let hero = bestiary.hero.spawn();
        let entities = Self::populate(&bestiary, hero.position(), &mut rng);

        GameState {
            hero,
            entities,
            engine: ConsoleEngine::new(),
            rng,
            turn: 0,
        }
    }

    /// Scatter enemies and allies over free tiles
    fn populate(
        bestiary: &Bestiary,
        start: Position,
        rng: &mut ChaCha8Rng,
    ) -> Vec<Box<dyn Interactive>> {
        let mut free: Vec<Position> = (0..MAP_SIZE)
            .flat_map(|y| (0..MAP_SIZE).map(move |x| Position::new(x, y)))
            .filter(|p| *p != start)
            .collect();
        free.shuffle(rng);
        let mut tiles = free.into_iter();

        let mut entities: Vec<Box<dyn Interactive>> = Vec::new();

        // Dragons are left out; nothing at level 1 survives one
        let roster: Vec<_> = bestiary.enemies.iter().filter(|e| e.id != "dragon").collect();
        for position in tiles.by_ref().take(10) {
            if let Some(template) = roster.choose(rng) {
                entities.push(Box::new(template.spawn(position)));
            }
        }

        let allies: Vec<(&str, rpg_core::AllyAction)> = vec![
            ("chest", actions::add_gold(rng.gen_range(10..=100))),
            ("chest", actions::add_gold(rng.gen_range(10..=100))),
            ("healer", actions::restore_hp()),
            ("shrine", actions::shrine(30, EffectKind::Blessing)),
            ("altar", actions::shrine(60, EffectKind::Berserk)),
            ("clover", actions::shrine(0, EffectKind::Fortunate)),
            ("curse", Box::new(cursed_tile) as rpg_core::AllyAction),
        ];
        for ((sprite, action), position) in allies.into_iter().zip(tiles) {
            entities.push(Box::new(Ally::new(SpriteId::from(sprite), action, position)));
        }

        entities
    }

    /// Walk row by row, turning at each edge
    fn path(&self) -> Vec<Position> {
        let mut path = Vec::new();
        for y in 0..MAP_SIZE {
            let row: Vec<i32> = if y % 2 == 0 {
                (0..MAP_SIZE).collect()
            } else {
                (0..MAP_SIZE).rev().collect()
            };
            path.extend(row.into_iter().map(|x| Position::new(x, y)));
        }
        path
    }

    /// Move the hero and resolve whatever is on the new tile
    fn step(&mut self, to: Position) {
        self.turn += 1;
        self.hero.creature.position = to;

        let Some(index) = self.entities.iter().position(|e| e.position() == to) else {
            return;
        };

        let mut entity = self.entities.remove(index);
        println!(
            "Turn {:>3} {}: {}",
            self.turn,
            to,
            entity.sprite().as_str()
        );
        entity.interact(&mut self.engine, &mut self.hero, &mut self.rng);
        debug!(
            hp = self.hero.hp(),
            level = self.hero.level,
            exp = self.hero.exp,
            gold = self.hero.gold,
            "hero after interaction"
        );
    }

    fn run(&mut self) {
        for to in self.path() {
            if !self.engine.is_working() {
                break;
            }
            self.step(to);
        }
    }

    fn report(&self) {
        let stats = self.hero.stats();
        println!();
        println!("{}", "=".repeat(40));
        println!(
            "  {} after {} turns",
            if self.engine.is_working() { "Survived" } else { "Fell" },
            self.turn
        );
        println!("{}", "=".repeat(40));
        println!("  Level {}  Exp {}  Gold {}", self.hero.level, self.hero.exp, self.hero.gold);
        println!("  HP {}/{}", self.hero.hp(), self.hero.max_hp());
        println!(
            "  STR {}  END {}  LCK {}  INT {}",
            stats.strength, stats.endurance, stats.luck, stats.intelligence
        );
        let (boons, curses): (Vec<EffectKind>, Vec<EffectKind>) = self
            .hero
            .active_effects()
            .iter()
            .partition(|e| e.is_positive());
        for (title, kinds) in [("Boons", boons), ("Curses", curses)] {
            if !kinds.is_empty() {
                let labels: Vec<&str> = kinds.iter().map(|e| e.label()).collect();
                println!("  {}: {}", title, labels.join(", "));
            }
        }
        println!("  Messages: {}", self.engine.messages.len());
        println!("  Score: {:.2}", self.engine.score());
        println!("  Left on map: {}", self.entities.len());
    }
}

/// Custom ally callback: a curse that weakens the hero
fn cursed_tile(engine: &mut dyn EngineSink, hero: &mut Hero) {
    let effect = Effect::apply(EffectKind::Weakness, hero);
    engine.add_score(-0.05);
    engine.notify(&format!("You were cursed: {}", effect.notify_effect()));
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<u64>() {
            Ok(seed) => seed,
            Err(e) => {
                eprintln!("Error: seed must be an unsigned integer ({})", e);
                std::process::exit(2);
            }
        },
        None => 42,
    };

    info!(seed, "starting dungeon walk");
    let mut state = GameState::new(seed);
    state.run();
    state.report();
}
