//! Animal taxonomy.
//!
//! The set of kinds is closed: two temperament kinds (`Rabbit`, `Monkey`)
//! that carry a `kindness` score and two carnivores (`Tiger`, `Wolf`) that
//! carry nothing beyond the common fields. [`Species`] holds the per-kind
//! data, [`AnimalKind`] is its field-less discriminant.

use crate::identifier::Identifier;
use crate::inventory::{Alive, Inventory};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalKind {
    Rabbit,
    Monkey,
    Tiger,
    Wolf,
}

impl AnimalKind {
    pub const ALL: [Self; 4] = [Self::Rabbit, Self::Monkey, Self::Tiger, Self::Wolf];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rabbit => "Rabbit",
            Self::Monkey => "Monkey",
            Self::Tiger => "Tiger",
            Self::Wolf => "Wolf",
        }
    }

    /// Whether animals of this kind carry a `kindness` score.
    #[must_use]
    pub const fn has_temperament(self) -> bool {
        matches!(self, Self::Rabbit | Self::Monkey)
    }
}

impl fmt::Display for AnimalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when text does not name a known [`AnimalKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError(String);

impl ParseKindError {
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown animal kind '{}'", self.0)
    }
}

impl std::error::Error for ParseKindError {}

impl FromStr for AnimalKind {
    type Err = ParseKindError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseKindError(wanted.to_owned()))
    }
}

/// Kind-specific state of an animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Species {
    Rabbit { kindness: i32 },
    Monkey { kindness: i32 },
    Tiger,
    Wolf,
}

impl Species {
    /// Builds the species for `kind`.
    ///
    /// Temperament kinds require a kindness score and yield `None` without one;
    /// carnivores ignore it.
    #[must_use]
    pub const fn new(kind: AnimalKind, kindness: Option<i32>) -> Option<Self> {
        match (kind, kindness) {
            (AnimalKind::Rabbit, Some(kindness)) => Some(Self::Rabbit { kindness }),
            (AnimalKind::Monkey, Some(kindness)) => Some(Self::Monkey { kindness }),
            (AnimalKind::Rabbit | AnimalKind::Monkey, None) => None,
            (AnimalKind::Tiger, _) => Some(Self::Tiger),
            (AnimalKind::Wolf, _) => Some(Self::Wolf),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> AnimalKind {
        match self {
            Self::Rabbit { .. } => AnimalKind::Rabbit,
            Self::Monkey { .. } => AnimalKind::Monkey,
            Self::Tiger => AnimalKind::Tiger,
            Self::Wolf => AnimalKind::Wolf,
        }
    }

    #[must_use]
    pub const fn kindness(&self) -> Option<i32> {
        match self {
            Self::Rabbit { kindness } | Self::Monkey { kindness } => Some(*kindness),
            Self::Tiger | Self::Wolf => None,
        }
    }
}

/// An animal, either a candidate for admission or an admitted resident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    name: String,
    food_consumption: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    identifier: Option<Identifier>,
    #[serde(flatten)]
    species: Species,
}

impl Animal {
    pub fn new(name: impl Into<String>, food_consumption: u32, species: Species) -> Self {
        Self { name: name.into(), food_consumption, identifier: None, species }
    }

    pub fn rabbit(name: impl Into<String>, food_consumption: u32, kindness: i32) -> Self {
        Self::new(name, food_consumption, Species::Rabbit { kindness })
    }

    pub fn monkey(name: impl Into<String>, food_consumption: u32, kindness: i32) -> Self {
        Self::new(name, food_consumption, Species::Monkey { kindness })
    }

    pub fn tiger(name: impl Into<String>, food_consumption: u32) -> Self {
        Self::new(name, food_consumption, Species::Tiger)
    }

    pub fn wolf(name: impl Into<String>, food_consumption: u32) -> Self {
        Self::new(name, food_consumption, Species::Wolf)
    }

    #[must_use]
    pub const fn species(&self) -> &Species {
        &self.species
    }

    #[must_use]
    pub const fn kind(&self) -> AnimalKind {
        self.species.kind()
    }

    /// `Some` only for temperament kinds.
    #[must_use]
    pub const fn kindness(&self) -> Option<i32> {
        self.species.kindness()
    }
}

impl Inventory for Animal {
    fn name(&self) -> &str {
        &self.name
    }

    fn identifier(&self) -> Option<Identifier> {
        self.identifier
    }

    fn set_identifier(&mut self, identifier: Identifier) {
        self.identifier = Some(identifier);
    }

    fn clear_identifier(&mut self) {
        self.identifier = None;
    }
}

impl Alive for Animal {
    fn food_consumption(&self) -> u32 {
        self.food_consumption
    }
}
