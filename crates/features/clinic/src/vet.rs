use crate::policy::AdmissionPolicy;
use zoo_kernel::domain::animal::Animal;
use zoo_kernel::domain::inventory::Inventory;
use zoo_kernel::terminal::{StdTerminal, Terminal};

/// Interactive health check: a person answers `y` or `n` for each candidate.
///
/// Only a `y` (any case, surrounding whitespace ignored) admits. End of input
/// and I/O failures reject the candidate.
#[derive(Debug)]
pub struct VetClinic<T> {
    terminal: T,
}

impl VetClinic<StdTerminal> {
    /// A clinic talking to the process stdin/stdout.
    #[must_use]
    pub const fn stdio() -> Self {
        Self { terminal: StdTerminal }
    }
}

impl<T: Terminal> VetClinic<T> {
    pub const fn new(terminal: T) -> Self {
        Self { terminal }
    }

    pub const fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }
}

impl<T: Terminal> AdmissionPolicy for VetClinic<T> {
    fn assess(&mut self, animal: &Animal) -> bool {
        let question = format!("Examining {}. Healthy? (y/n): ", animal.name());
        match self.terminal.prompt(&question) {
            Ok(Some(answer)) => {
                let healthy = answer.trim().eq_ignore_ascii_case("y");
                tracing::debug!(animal = animal.name(), answer = answer.trim(), healthy, "Vet answered");
                healthy
            },
            Ok(None) => {
                tracing::warn!(animal = animal.name(), "No answer from the vet, rejecting");
                false
            },
            Err(e) => {
                tracing::warn!(animal = animal.name(), error = %e, "Vet terminal failed, rejecting");
                false
            },
        }
    }
}
