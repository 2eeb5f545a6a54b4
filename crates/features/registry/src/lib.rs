//! The zoo registry.
//!
//! [`Zoo`] owns the admitted animals and the inventory items, hands out
//! identifiers from one counter shared by both collections, and answers the
//! aggregate queries. Animals pass an [`AdmissionPolicy`] first; items are
//! always accepted.
//!
//! ```rust
//! use zoo_clinic::Verdict;
//! use zoo_kernel::domain::prelude::*;
//! use zoo_registry::Zoo;
//!
//! let mut zoo = Zoo::new(Verdict::Approve);
//! zoo.register_item(Item::table("Table")).unwrap();
//! let admission = zoo.register_animal(Animal::rabbit("Bugs", 8, 12)).unwrap();
//!
//! assert_eq!(admission.identifier(), Some(Identifier::new(1)));
//! assert_eq!(zoo.total_food(), 8);
//! assert_eq!(zoo.contact_eligible().len(), 1);
//! ```

pub mod eligibility;
mod error;
mod report;

pub use crate::error::{RegistryError, RegistryErrorExt};
pub use crate::report::Report;

use crate::eligibility::is_contact_eligible;
use zoo_clinic::AdmissionPolicy;
use zoo_kernel::domain::prelude::*;

/// Outcome of submitting an animal.
#[must_use = "A denied admission hands the candidate back to the caller."]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    Admitted(Identifier),
    /// The policy refused; nothing was stored and no identifier was used.
    Denied(Animal),
}

impl Admission {
    #[must_use]
    pub const fn is_admitted(&self) -> bool {
        matches!(self, Self::Admitted(_))
    }

    #[must_use]
    pub const fn identifier(&self) -> Option<Identifier> {
        match self {
            Self::Admitted(id) => Some(*id),
            Self::Denied(_) => None,
        }
    }
}

/// Animal and item registry with an injected admission policy.
#[derive(Debug)]
pub struct Zoo<P: AdmissionPolicy = Box<dyn AdmissionPolicy>> {
    clinic: P,
    animals: Vec<Animal>,
    items: Vec<Item>,
    next_id: u64,
}

impl<P: AdmissionPolicy> Zoo<P> {
    pub const fn new(clinic: P) -> Self {
        Self { clinic, animals: Vec::new(), items: Vec::new(), next_id: 0 }
    }

    /// Submits a candidate animal to the admission policy.
    ///
    /// Any identifier the candidate already carries is discarded first. On
    /// approval the animal receives the next identifier and is stored; on
    /// refusal it comes back unregistered in [`Admission::Denied`].
    ///
    /// # Errors
    /// Returns [`RegistryError::InvalidArgument`] when no candidate is given;
    /// the registry is left unchanged.
    pub fn register_animal(&mut self, candidate: impl Into<Option<Animal>>) -> Result<Admission, RegistryError> {
        let Some(mut animal) = candidate.into() else {
            tracing::warn!("Rejected animal registration without a candidate");
            return Err(RegistryError::InvalidArgument {
                message: "animal candidate is required".into(),
                context: None,
            });
        };

        animal.clear_identifier();
        if !self.clinic.assess(&animal) {
            tracing::info!(kind = %animal.kind(), name = animal.name(), "Animal refused by the clinic");
            return Ok(Admission::Denied(animal));
        }

        let id = self.stamp(&mut animal)?;
        tracing::info!(%id, kind = %animal.kind(), name = animal.name(), "Animal admitted");
        self.animals.push(animal);
        Ok(Admission::Admitted(id))
    }

    /// Registers an inventory item. Items skip the admission policy.
    ///
    /// # Errors
    /// Returns [`RegistryError::InvalidArgument`] when no candidate is given.
    pub fn register_item(&mut self, candidate: impl Into<Option<Item>>) -> Result<Identifier, RegistryError> {
        let Some(mut item) = candidate.into() else {
            tracing::warn!("Rejected item registration without a candidate");
            return Err(RegistryError::InvalidArgument { message: "item candidate is required".into(), context: None });
        };

        let id = self.stamp(&mut item)?;
        tracing::info!(%id, kind = %item.kind(), name = item.name(), "Item registered");
        self.items.push(item);
        Ok(id)
    }

    /// Total daily food for all admitted animals, in kilograms.
    #[must_use]
    pub fn total_food(&self) -> u64 {
        self.animals.iter().map(|a| u64::from(a.food_consumption())).sum()
    }

    #[must_use]
    pub const fn animal_count(&self) -> usize {
        self.animals.len()
    }

    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Animals visitors may handle, in admission order.
    #[must_use]
    pub fn contact_eligible(&self) -> Vec<&Animal> {
        self.animals.iter().filter(|a| is_contact_eligible(a)).collect()
    }

    #[must_use]
    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Admitted animals whose kind is in `kinds`, in admission order.
    pub fn animals_of(&self, kinds: impl Into<KindSet>) -> impl Iterator<Item = &Animal> {
        let kinds = kinds.into();
        self.animals.iter().filter(move |a| kinds.includes(a.kind()))
    }

    #[must_use]
    pub fn report(&self) -> Report {
        Report { animals: self.animal_count(), items: self.item_count(), food: self.total_food() }
    }

    pub const fn policy(&self) -> &P {
        &self.clinic
    }

    pub const fn policy_mut(&mut self) -> &mut P {
        &mut self.clinic
    }

    /// Assigns the next identifier. Both collections go through here.
    fn stamp<E: Inventory>(&mut self, entity: &mut E) -> Result<Identifier, RegistryError> {
        let id = Identifier::new(self.next_id);
        self.next_id = self.next_id.checked_add(1).ok_or("identifier space exhausted")?;
        entity.set_identifier(id);
        Ok(id)
    }
}

impl Zoo {
    /// A registry with a boxed policy, for choosing the policy at runtime.
    pub fn boxed(clinic: impl AdmissionPolicy + 'static) -> Self {
        Self::new(Box::new(clinic))
    }
}
