use zoo_kernel::domain::animal::Animal;
use zoo_kernel::domain::inventory::Inventory;

/// Decides whether a candidate animal is admitted.
///
/// `assess` takes `&mut self` because a policy may consume state (a scripted
/// answer queue, a terminal session). It inspects the candidate and never
/// modifies it.
pub trait AdmissionPolicy {
    fn assess(&mut self, animal: &Animal) -> bool;
}

impl<P: AdmissionPolicy + ?Sized> AdmissionPolicy for Box<P> {
    fn assess(&mut self, animal: &Animal) -> bool {
        (**self).assess(animal)
    }
}

impl<P: AdmissionPolicy + ?Sized> AdmissionPolicy for &mut P {
    fn assess(&mut self, animal: &Animal) -> bool {
        (**self).assess(animal)
    }
}

/// A fixed answer for every candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Approve,
    Reject,
}

impl AdmissionPolicy for Verdict {
    fn assess(&mut self, animal: &Animal) -> bool {
        let admitted = matches!(self, Self::Approve);
        tracing::debug!(animal = animal.name(), admitted, "Fixed verdict");
        admitted
    }
}

/// Rule-based policy wrapping a predicate.
///
/// ```rust
/// use zoo_clinic::{AdmissionPolicy, RuleClinic};
/// use zoo_kernel::domain::prelude::*;
///
/// let mut light_eaters = RuleClinic::new(|a: &Animal| a.food_consumption() <= 10);
/// assert!(light_eaters.assess(&Animal::rabbit("Bugs", 8, 12)));
/// assert!(!light_eaters.assess(&Animal::tiger("Shere Khan", 20)));
/// ```
pub struct RuleClinic<F> {
    rule: F,
}

impl<F> RuleClinic<F>
where
    F: FnMut(&Animal) -> bool,
{
    pub const fn new(rule: F) -> Self {
        Self { rule }
    }
}

impl<F> std::fmt::Debug for RuleClinic<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleClinic").finish_non_exhaustive()
    }
}

impl<F> AdmissionPolicy for RuleClinic<F>
where
    F: FnMut(&Animal) -> bool,
{
    fn assess(&mut self, animal: &Animal) -> bool {
        let admitted = (self.rule)(animal);
        tracing::debug!(animal = animal.name(), admitted, "Rule evaluated");
        admitted
    }
}
