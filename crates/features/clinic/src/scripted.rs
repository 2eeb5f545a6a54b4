use crate::policy::AdmissionPolicy;
use std::collections::VecDeque;
use zoo_kernel::domain::animal::Animal;
use zoo_kernel::domain::inventory::Inventory;

/// Replays a queue of verdicts, one per assessment.
///
/// Once the script runs out every further candidate is rejected.
#[derive(Debug, Default, Clone)]
pub struct ScriptedClinic {
    answers: VecDeque<bool>,
    assessed: usize,
}

impl ScriptedClinic {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self { answers: answers.into_iter().collect(), assessed: 0 }
    }

    /// Queues another answer after the existing ones.
    pub fn push(&mut self, answer: bool) {
        self.answers.push_back(answer);
    }

    /// Number of assessments performed so far.
    #[must_use]
    pub const fn assessed(&self) -> usize {
        self.assessed
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl AdmissionPolicy for ScriptedClinic {
    fn assess(&mut self, animal: &Animal) -> bool {
        self.assessed += 1;
        self.answers.pop_front().unwrap_or_else(|| {
            tracing::warn!(animal = animal.name(), "Admission script exhausted, rejecting");
            false
        })
    }
}
