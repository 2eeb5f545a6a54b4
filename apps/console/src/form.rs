//! The "add animal" questionnaire.

use std::io;
use zoo::domain::animal::{Animal, AnimalKind, Species};
use zoo::kernel::terminal::Terminal;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum FormError {
    #[error("Unknown animal kind.")]
    UnknownKind,
    #[error("Name cannot be empty.")]
    BlankName,
    #[error("Invalid food amount, expected a non-negative whole number.")]
    InvalidFood,
    #[error("Invalid kindness, expected a whole number.")]
    InvalidKindness,
}

#[derive(Debug)]
pub(crate) enum Outcome {
    Filled(Animal),
    Invalid(FormError),
    /// Input ended mid-form.
    Closed,
}

/// Asks for kind, name and food, then kindness for temperament kinds.
///
/// Each answer is checked as soon as it is read; the first bad one ends the form.
pub(crate) fn ask_animal<T: Terminal>(terminal: &mut T) -> io::Result<Outcome> {
    let kinds = AnimalKind::ALL.map(AnimalKind::as_str).join(", ");

    let Some(kind) = terminal.prompt(&format!("Animal kind ({kinds}): "))? else {
        return Ok(Outcome::Closed);
    };
    let Ok(kind) = kind.parse::<AnimalKind>() else {
        return Ok(Outcome::Invalid(FormError::UnknownKind));
    };

    let Some(name) = terminal.prompt("Name: ")? else {
        return Ok(Outcome::Closed);
    };
    let name = name.trim();
    if name.is_empty() {
        return Ok(Outcome::Invalid(FormError::BlankName));
    }

    let Some(food) = terminal.prompt("Food consumption (kg/day): ")? else {
        return Ok(Outcome::Closed);
    };
    let Ok(food) = food.trim().parse::<u32>() else {
        return Ok(Outcome::Invalid(FormError::InvalidFood));
    };

    let kindness = if kind.has_temperament() {
        let Some(kindness) = terminal.prompt("Kindness: ")? else {
            return Ok(Outcome::Closed);
        };
        let Ok(kindness) = kindness.trim().parse::<i32>() else {
            return Ok(Outcome::Invalid(FormError::InvalidKindness));
        };
        Some(kindness)
    } else {
        None
    };

    Ok(Species::new(kind, kindness).map_or(Outcome::Invalid(FormError::InvalidKindness), |species| {
        Outcome::Filled(Animal::new(name, food, species))
    }))
}
