use crate::item::{Item, ItemKind};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration for the zoo application.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ZooConfigInner {
    pub logging: LoggingConfig,
    pub admission: AdmissionConfig,
    pub inventory: InventoryConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(from = "ZooConfigInner")]
pub struct ZooConfig {
    inner: Arc<ZooConfigInner>,
}

impl From<ZooConfigInner> for ZooConfig {
    fn from(inner: ZooConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for ZooConfig {
    type Target = ZooConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ZooConfig {
    fn deref_mut(&mut self) -> &mut ZooConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Logging output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Per-target directives (`zoo_registry=debug`); when set, `RUST_LOG` is ignored.
    pub filter: Option<String>,
    pub console: bool,
    pub directory: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
}

/// How candidate animals are assessed before admission.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdmissionConfig {
    pub mode: AdmissionMode,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdmissionMode {
    /// Ask the vet on the terminal for every candidate.
    #[default]
    Interactive,
    /// Admit every candidate.
    Approve,
    /// Refuse every candidate.
    Reject,
}

/// Items registered when the registry starts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub seed: Vec<ItemSeed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemSeed {
    #[serde(default)]
    pub kind: ItemKind,
    pub name: String,
}

impl ItemSeed {
    #[must_use]
    pub fn to_item(&self) -> Item {
        Item::new(self.name.clone(), self.kind)
    }
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            filter: None,
            console: true,
            directory: None,
            json: false,
            max_files: 10,
        }
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            seed: vec![
                ItemSeed { kind: ItemKind::Table, name: "Table".to_owned() },
                ItemSeed { kind: ItemKind::Computer, name: "Computer".to_owned() },
            ],
        }
    }
}
