//! Admission policies.
//!
//! The registry consults an [`AdmissionPolicy`] before it accepts an animal.
//! The default policy is the interactive [`VetClinic`], which asks a person on
//! a [`Terminal`]; the other policies answer without I/O.
//!
//! ```rust
//! use zoo_clinic::{AdmissionPolicy, ScriptedClinic, Verdict};
//! use zoo_kernel::domain::prelude::Animal;
//!
//! let bugs = Animal::rabbit("Bugs", 8, 12);
//! assert!(Verdict::Approve.assess(&bugs));
//!
//! let mut script = ScriptedClinic::new([false]);
//! assert!(!script.assess(&bugs));
//! assert!(!script.assess(&bugs)); // exhausted scripts reject
//! ```

mod policy;
mod scripted;
mod vet;

pub use crate::policy::{AdmissionPolicy, RuleClinic, Verdict};
pub use crate::scripted::ScriptedClinic;
pub use crate::vet::VetClinic;
pub use zoo_kernel::terminal::Terminal;
