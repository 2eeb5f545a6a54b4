//! # Domain Models
//!
//! Pure zoo domain types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, no registry bookkeeping, just data and simple helpers.
//!
//! ```rust
//! use zoo_domain::prelude::*;
//!
//! let bugs = Animal::rabbit("Bugs", 8, 12);
//! assert_eq!(bugs.kind(), AnimalKind::Rabbit);
//! assert_eq!(bugs.kindness(), Some(12));
//! assert_eq!(bugs.identifier(), None);
//! ```

pub mod animal;
pub mod config;
pub mod identifier;
pub mod inventory;
pub mod item;
pub mod kinds;

pub mod prelude {
    pub use crate::animal::{Animal, AnimalKind, Species};
    pub use crate::identifier::Identifier;
    pub use crate::inventory::{Alive, Inventory};
    pub use crate::item::{Item, ItemKind};
    pub use crate::kinds::KindSet;
}
