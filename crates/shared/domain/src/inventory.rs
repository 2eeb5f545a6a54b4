use crate::identifier::Identifier;

/// Anything the registry can number: animals and inventory items alike.
pub trait Inventory {
    fn name(&self) -> &str;

    /// `None` until the registry has accepted the entity.
    fn identifier(&self) -> Option<Identifier>;

    /// Stamps the registry-assigned identifier.
    ///
    /// Only the registry's value counts: a candidate's identifier is cleared
    /// on submission and overwritten on acceptance, so setting one beforehand
    /// has no effect.
    fn set_identifier(&mut self, identifier: Identifier);

    /// Returns the entity to the unregistered state.
    fn clear_identifier(&mut self);
}

/// Living entities that eat.
pub trait Alive {
    /// Daily food consumption in kilograms.
    fn food_consumption(&self) -> u32;
}
