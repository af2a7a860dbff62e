//! Trigger catalog: maps each trigger character to its ordered candidate
//! list. Loaded from TOML with validation at parse time; defaults are
//! embedded via `include_str!("default_catalog.toml")`.
//!
//! The catalog is immutable once built and shared via `Arc` with the
//! session engine.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_CATALOG_TOML: &str = include_str!("default_catalog.toml");

/// Returns the embedded default catalog TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_CATALOG_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("trigger key {key:?} must be a single character")]
    InvalidTrigger { key: String },
    #[error("trigger {trigger:?} has an empty candidate list")]
    EmptyCandidates { trigger: char },
    #[error("catalog defines no triggers")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct CatalogDoc {
    triggers: BTreeMap<String, Vec<String>>,
}

/// Mapping from trigger character to ordered candidates.
#[derive(Debug, Clone, Default)]
pub struct TriggerCatalog {
    triggers: BTreeMap<char, Vec<String>>,
}

impl TriggerCatalog {
    /// Build a catalog from in-memory entries. Later entries replace
    /// earlier ones with the same trigger character.
    pub fn from_entries(entries: impl IntoIterator<Item = (char, Vec<String>)>) -> Self {
        Self {
            triggers: entries.into_iter().collect(),
        }
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDoc =
            toml::from_str(toml_str).map_err(|e| CatalogError::Parse(e.to_string()))?;
        if doc.triggers.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut triggers = BTreeMap::new();
        for (key, candidates) in doc.triggers {
            let mut chars = key.chars();
            let trigger = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return Err(CatalogError::InvalidTrigger { key }),
            };
            if candidates.is_empty() {
                return Err(CatalogError::EmptyCandidates { trigger });
            }
            triggers.insert(trigger, candidates);
        }
        Ok(Self { triggers })
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), triggers = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Candidate list for `trigger`, in catalog order.
    pub fn candidates(&self, trigger: char) -> Option<&[String]> {
        self.triggers.get(&trigger).map(|v| v.as_slice())
    }

    pub fn is_trigger(&self, c: char) -> bool {
        self.triggers.contains_key(&c)
    }

    pub fn trigger_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.triggers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}
