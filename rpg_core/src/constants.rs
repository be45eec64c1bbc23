//! Formula constants shared by creatures, leveling and combat

/// Flat hit points every creature has before endurance
pub const BASE_HP: i32 = 5;

/// Hit points granted per point of endurance
pub const HP_PER_ENDURANCE: i32 = 2;

/// Experience needed to leave level 1; doubles every level
pub const LEVEL_EXP_BASE: u64 = 100;

/// Strength gained per level
pub const LEVEL_STRENGTH_GAIN: i32 = 2;

/// Endurance gained per level
pub const LEVEL_ENDURANCE_GAIN: i32 = 2;

/// Where every hero starts on the map
pub const HERO_START: (i32, i32) = (1, 1);

/// Score formula multiplier: `SCORE_MULTIPLIER * level * enemy_exp / hero_exp`
pub const SCORE_MULTIPLIER: f64 = 10.0;

/// Smallest damage a hit can deal
pub const MIN_DAMAGE: f64 = 1.0;

/// Notification texts posted by the combat protocol
pub mod messages {
    pub const GAME_OVER: &str = "Game Over";
    pub const ENEMY_KILLED: &str = "Enemy killed!";
    pub const LEVEL_UP: &str = "Level Up!";
    pub const DAMAGE_RECEIVED: &str = "Damage received";
}
