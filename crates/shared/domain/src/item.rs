use crate::identifier::Identifier;
use crate::inventory::Inventory;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an inanimate inventory item.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Table,
    Computer,
    #[default]
    Other,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Table => "Table",
            Self::Computer => "Computer",
            Self::Other => "Item",
        })
    }
}

/// Inventory object. Items are never refused by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    #[serde(default)]
    kind: ItemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    identifier: Option<Identifier>,
}

impl Item {
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self { name: name.into(), kind, identifier: None }
    }

    pub fn table(name: impl Into<String>) -> Self {
        Self::new(name, ItemKind::Table)
    }

    pub fn computer(name: impl Into<String>) -> Self {
        Self::new(name, ItemKind::Computer)
    }

    #[must_use]
    pub const fn kind(&self) -> ItemKind {
        self.kind
    }
}

impl Inventory for Item {
    fn name(&self) -> &str {
        &self.name
    }

    fn identifier(&self) -> Option<Identifier> {
        self.identifier
    }

    fn set_identifier(&mut self, identifier: Identifier) {
        self.identifier = Some(identifier);
    }

    fn clear_identifier(&mut self) {
        self.identifier = None;
    }
}
