use crate::animal::AnimalKind;
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// A set of animal kinds, used to filter registry queries.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct KindSet: u8 {
        const RABBIT = 1 << 0;
        const MONKEY = 1 << 1;
        const TIGER = 1 << 2;
        const WOLF = 1 << 3;

        const TEMPERAMENT = Self::RABBIT.bits() | Self::MONKEY.bits();
        const CARNIVORE = Self::TIGER.bits() | Self::WOLF.bits();
        const ALL = Self::TEMPERAMENT.bits() | Self::CARNIVORE.bits();
    }
}

impl KindSet {
    #[must_use]
    pub fn includes(self, kind: AnimalKind) -> bool {
        self.contains(kind.into())
    }
}

impl From<AnimalKind> for KindSet {
    fn from(kind: AnimalKind) -> Self {
        match kind {
            AnimalKind::Rabbit => Self::RABBIT,
            AnimalKind::Monkey => Self::MONKEY,
            AnimalKind::Tiger => Self::TIGER,
            AnimalKind::Wolf => Self::WOLF,
        }
    }
}

impl From<&str> for KindSet {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "herbivore" | "temperament" => Self::TEMPERAMENT,
            "carnivore" => Self::CARNIVORE,
            "all" | "*" => Self::ALL,
            other => other.parse::<AnimalKind>().map_or_else(|_| Self::empty(), Self::from),
        }
    }
}

impl From<u8> for KindSet {
    fn from(bits: u8) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for KindSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for KindSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}
