//! Petting-zoo eligibility.

use zoo_kernel::domain::animal::Animal;

/// Animals need a kindness strictly above this to be handled by visitors.
pub const KINDNESS_THRESHOLD: i32 = 5;

/// Temperament animals kinder than [`KINDNESS_THRESHOLD`]; carnivores never.
#[must_use]
pub fn is_contact_eligible(animal: &Animal) -> bool {
    animal.kindness().is_some_and(|kindness| kindness > KINDNESS_THRESHOLD)
}
