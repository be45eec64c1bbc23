//! Bestiary configuration - Hero and enemy templates

use super::ConfigError;
use crate::enemy::Enemy;
use crate::hero::Hero;
use crate::stat_block::StatBlock;
use crate::types::{Position, SpriteId};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Stats as written in TOML: attribute names are case-insensitive
type StatsTable = BTreeMap<String, i32>;

#[derive(Debug, Deserialize)]
struct BestiaryFile {
    hero: HeroEntry,
    #[serde(default)]
    enemies: Vec<EnemyEntry>,
}

#[derive(Debug, Deserialize)]
struct HeroEntry {
    sprite: String,
    stats: StatsTable,
}

#[derive(Debug, Deserialize)]
struct EnemyEntry {
    id: String,
    name: String,
    sprite: String,
    exp: u64,
    stats: StatsTable,
}

fn to_stats(table: &StatsTable) -> Result<StatBlock, ConfigError> {
    let stats = StatBlock::from_named(table.iter().map(|(name, value)| (name.as_str(), *value)))?;
    Ok(stats)
}

/// Starting hero
#[derive(Debug, Clone, PartialEq)]
pub struct HeroTemplate {
    pub sprite: SpriteId,
    pub stats: StatBlock,
}

impl HeroTemplate {
    pub fn spawn(&self) -> Hero {
        Hero::new(self.stats, self.sprite.clone())
    }
}

/// One enemy type
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyTemplate {
    pub id: String,
    pub name: String,
    pub sprite: SpriteId,
    pub stats: StatBlock,
    /// Reward pool of spawned enemies
    pub exp: u64,
}

impl EnemyTemplate {
    pub fn spawn(&self, position: Position) -> Enemy {
        Enemy::new(self.sprite.clone(), self.stats, self.exp, position)
    }
}

/// Hero template plus the enemy roster
#[derive(Debug, Clone, PartialEq)]
pub struct Bestiary {
    pub hero: HeroTemplate,
    pub enemies: Vec<EnemyTemplate>,
}

impl Bestiary {
    /// Load a bestiary from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file: BestiaryFile = super::load_toml(path)?;
        Self::from_file(file)
    }

    /// Load a bestiary from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: BestiaryFile = super::parse_toml(content)?;
        Self::from_file(file)
    }

    fn from_file(file: BestiaryFile) -> Result<Self, ConfigError> {
        if file.enemies.is_empty() {
            return Err(ConfigError::ValidationError(
                "bestiary has no enemies".to_string(),
            ));
        }

        let hero = HeroTemplate {
            sprite: SpriteId::from(file.hero.sprite),
            stats: to_stats(&file.hero.stats)?,
        };

        let mut seen = HashSet::new();
        let mut enemies = Vec::with_capacity(file.enemies.len());
        for entry in file.enemies {
            if !seen.insert(entry.id.clone()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate enemy id: {}",
                    entry.id
                )));
            }
            let stats = to_stats(&entry.stats)?;
            enemies.push(EnemyTemplate {
                id: entry.id,
                name: entry.name,
                sprite: SpriteId::from(entry.sprite),
                stats,
                exp: entry.exp,
            });
        }

        Ok(Bestiary { hero, enemies })
    }

    /// Look up an enemy template by id
    pub fn enemy(&self, id: &str) -> Option<&EnemyTemplate> {
        self.enemies.iter().find(|e| e.id == id)
    }

    /// Minimal roster used when the bundled file cannot be read
    fn fallback() -> Self {
        Bestiary {
            hero: HeroTemplate {
                sprite: SpriteId::from("hero"),
                stats: StatBlock::new(20, 20, 5, 5),
            },
            enemies: vec![EnemyTemplate {
                id: "rat".to_string(),
                name: "Rat".to_string(),
                sprite: SpriteId::from("rat"),
                stats: StatBlock::new(1, 1, 1, 1),
                exp: 20,
            }],
        }
    }
}

/// Get the bundled bestiary
pub fn default_bestiary() -> Bestiary {
    let toml = include_str!("../../config/bestiary.toml");
    Bestiary::parse(toml).unwrap_or_else(|_| Bestiary::fallback())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat_block::{Attribute, StatError};

    #[test]
    fn test_parse_bestiary() {
        let toml = r#"
[hero]
sprite = "knight"

[hero.stats]
Strength = 20
Endurance = 20
Intelligence = 5
Luck = 5

[[enemies]]
id = "naga"
name = "Naga"
sprite = "naga"
exp = 120

[enemies.stats]
strength = 12
endurance = 8
intelligence = 6
luck = 4
"#;

        let bestiary = Bestiary::parse(toml).unwrap();
        assert_eq!(bestiary.hero.stats, StatBlock::new(20, 20, 5, 5));

        let naga = bestiary.enemy("naga").unwrap();
        assert_eq!(naga.stats, StatBlock::new(12, 8, 4, 6));

        let enemy = naga.spawn(Position::new(3, 4));
        assert_eq!(enemy.exp, 120);
        assert_eq!(enemy.creature.max_hp, 21);

        let hero = bestiary.hero.spawn();
        assert_eq!(hero.max_hp(), 45);
        assert_eq!(hero.position(), Position::new(1, 1));
    }

    #[test]
    fn test_missing_stat_is_rejected() {
        let toml = r#"
[hero]
sprite = "knight"
stats = { strength = 1, endurance = 1, luck = 1 }

[[enemies]]
id = "rat"
name = "Rat"
sprite = "rat"
exp = 10
stats = { strength = 1, endurance = 1, luck = 1, intelligence = 1 }
"#;

        let err = Bestiary::parse(toml).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Stat(StatError::MissingAttribute(Attribute::Intelligence))
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let toml = r#"
[hero]
sprite = "knight"
stats = { strength = 1, endurance = 1, luck = 1, intelligence = 1 }

[[enemies]]
id = "rat"
name = "Rat"
sprite = "rat"
exp = 10
stats = { strength = 1, endurance = 1, luck = 1, intelligence = 1 }

[[enemies]]
id = "rat"
name = "Big Rat"
sprite = "rat"
exp = 30
stats = { strength = 2, endurance = 2, luck = 1, intelligence = 1 }
"#;

        let err = Bestiary::parse(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(ref msg) if msg.contains("rat")));
    }

    #[test]
    fn test_empty_roster_rejected() {
        let toml = r#"
[hero]
sprite = "knight"
stats = { strength = 1, endurance = 1, luck = 1, intelligence = 1 }
"#;

        assert!(matches!(
            Bestiary::parse(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            Bestiary::parse("[hero"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Bestiary::load(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_default_bestiary_loads_bundled_file() {
        let bestiary = default_bestiary();
        assert_ne!(bestiary, Bestiary::fallback());

        let expected = ["rat", "skeleton", "goblin", "naga", "troll", "dragon"];
        assert_eq!(bestiary.enemies.len(), expected.len());
        for id in expected {
            assert!(bestiary.enemy(id).is_some(), "Missing enemy: {}", id);
        }
    }
}
