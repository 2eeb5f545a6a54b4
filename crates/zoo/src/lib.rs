//! Facade crate for the zoo slices and shared modules.
//! Re-exports domain/kernel primitives and wires a registry from configuration.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! ```rust
//! use zoo::clinic::Verdict;
//! use zoo::domain::config::ZooConfig;
//!
//! let zoo = zoo::init(&ZooConfig::default(), Verdict::Approve).unwrap();
//! assert_eq!(zoo.item_count(), 2);
//! ```

pub use zoo_clinic as clinic;
pub use zoo_domain as domain;
pub use zoo_kernel as kernel;
pub use zoo_registry as registry;

use zoo_clinic::{AdmissionPolicy, Verdict, VetClinic};
use zoo_domain::config::{AdmissionMode, ZooConfig};
use zoo_registry::{RegistryError, RegistryErrorExt, Zoo};

/// Builds a registry around `policy` and registers the configured seed items.
///
/// # Errors
/// Returns an error if a seed item cannot be registered.
pub fn init<P: AdmissionPolicy>(config: &ZooConfig, policy: P) -> Result<Zoo<P>, RegistryError> {
    let mut zoo = Zoo::new(policy);

    for seed in &config.inventory.seed {
        zoo.register_item(seed.to_item()).context("Failed to seed inventory")?;
    }

    tracing::info!(items = zoo.item_count(), "Zoo initialized");
    Ok(zoo)
}

/// The admission policy selected by `mode`; interactive mode asks on stdio.
#[must_use]
pub fn policy_for(mode: AdmissionMode) -> Box<dyn AdmissionPolicy> {
    match mode {
        AdmissionMode::Interactive => Box::new(VetClinic::stdio()),
        AdmissionMode::Approve => Box::new(Verdict::Approve),
        AdmissionMode::Reject => Box::new(Verdict::Reject),
    }
}
