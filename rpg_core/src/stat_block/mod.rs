//! StatBlock - Strength, endurance, luck and intelligence
//!
//! A creature owns its block and mutates it in place (leveling, effects).
//! The block is `Copy`, so snapshots handed to effects or combat results are
//! plain value copies of the four scalars.

mod attribute;

pub use attribute::Attribute;

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub, SubAssign};
use thiserror::Error;

/// Errors building a stat block from loosely typed input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatError {
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),
    #[error("Missing attribute: {0}")]
    MissingAttribute(Attribute),
}

/// The four-attribute numeric profile of a creature
///
/// Values are not floored: stacking debuffs can push an attribute below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatBlock {
    pub strength: i32,
    pub endurance: i32,
    pub luck: i32,
    pub intelligence: i32,
}

impl StatBlock {
    pub const fn new(strength: i32, endurance: i32, luck: i32, intelligence: i32) -> Self {
        StatBlock {
            strength,
            endurance,
            luck,
            intelligence,
        }
    }

    /// Build a block from name/value pairs, e.g. parsed from a map
    ///
    /// Every attribute must appear. Later duplicates overwrite earlier ones.
    pub fn from_named<'a, I>(pairs: I) -> Result<Self, StatError>
    where
        I: IntoIterator<Item = (&'a str, i32)>,
    {
        let mut seen = [None; 4];
        for (name, value) in pairs {
            let attr: Attribute = name.parse()?;
            seen[Self::slot(attr)] = Some(value);
        }

        let mut block = StatBlock::default();
        for attr in Attribute::all() {
            let value = seen[Self::slot(*attr)].ok_or(StatError::MissingAttribute(*attr))?;
            block.set(*attr, value);
        }
        Ok(block)
    }

    fn slot(attr: Attribute) -> usize {
        match attr {
            Attribute::Strength => 0,
            Attribute::Endurance => 1,
            Attribute::Luck => 2,
            Attribute::Intelligence => 3,
        }
    }

    pub fn get(&self, attr: Attribute) -> i32 {
        match attr {
            Attribute::Strength => self.strength,
            Attribute::Endurance => self.endurance,
            Attribute::Luck => self.luck,
            Attribute::Intelligence => self.intelligence,
        }
    }

    pub fn get_mut(&mut self, attr: Attribute) -> &mut i32 {
        match attr {
            Attribute::Strength => &mut self.strength,
            Attribute::Endurance => &mut self.endurance,
            Attribute::Luck => &mut self.luck,
            Attribute::Intelligence => &mut self.intelligence,
        }
    }

    pub fn set(&mut self, attr: Attribute, value: i32) {
        *self.get_mut(attr) = value;
    }

    /// Add a (possibly negative) delta to one attribute
    pub fn modify(&mut self, attr: Attribute, delta: i32) {
        *self.get_mut(attr) += delta;
    }

    /// Iterate attributes in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::all().iter().map(move |attr| (*attr, self.get(*attr)))
    }
}

impl Add for StatBlock {
    type Output = StatBlock;

    fn add(mut self, rhs: StatBlock) -> StatBlock {
        self += rhs;
        self
    }
}

impl AddAssign for StatBlock {
    fn add_assign(&mut self, rhs: StatBlock) {
        self.strength += rhs.strength;
        self.endurance += rhs.endurance;
        self.luck += rhs.luck;
        self.intelligence += rhs.intelligence;
    }
}

impl Sub for StatBlock {
    type Output = StatBlock;

    fn sub(mut self, rhs: StatBlock) -> StatBlock {
        self -= rhs;
        self
    }
}

impl SubAssign for StatBlock {
    fn sub_assign(&mut self, rhs: StatBlock) {
        self.strength -= rhs.strength;
        self.endurance -= rhs.endurance;
        self.luck -= rhs.luck;
        self.intelligence -= rhs.intelligence;
    }
}
