use std::fmt;

/// Snapshot of the registry totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Report {
    pub animals: usize,
    pub items: usize,
    /// Kilograms per day across all admitted animals.
    pub food: u64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Animals: {}", self.animals)?;
        writeln!(f, "Items: {}", self.items)?;
        write!(f, "Food consumption: {} kg/day", self.food)
    }
}
