use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use super::section::{SectionId, SectionRecord};
use crate::config::PageConfig;

/// The manifest compiled into the binary.
const BUILTIN_MANIFEST: &str = include_str!("../../assets/showcase.json");

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("section at position {index} has an empty id")]
    EmptyId { index: usize },
    #[error("section '{id}' has an empty title")]
    EmptyTitle { id: SectionId },
    #[error("duplicate section id '{id}'")]
    DuplicateId { id: SectionId },
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("invalid manifest: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Fixed, ordered list of sections.
///
/// Built once and never mutated; ids are validated unique at construction.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    sections: Vec<SectionRecord>,
}

impl Registry {
    pub fn new(sections: Vec<SectionRecord>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::with_capacity(sections.len());
        let sections = sections
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                if record.id().is_blank() {
                    return Err(RegistryError::EmptyId { index });
                }
                if record.title().is_blank() {
                    return Err(RegistryError::EmptyTitle {
                        id: record.id().clone(),
                    });
                }
                if !seen.insert(record.id().clone()) {
                    return Err(RegistryError::DuplicateId {
                        id: record.id().clone(),
                    });
                }
                Ok(record.normalized())
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { sections })
    }

    /// Parse a bare JSON array of section records.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let sections: Vec<SectionRecord> = serde_json::from_str(json)?;
        Ok(Self::new(sections)?)
    }

    /// The registry shipped with the page.
    pub fn builtin() -> Result<Self, ManifestError> {
        Manifest::builtin().map(|manifest| manifest.registry)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionRecord> {
        self.sections.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &SectionId> {
        self.sections.iter().map(SectionRecord::id)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Linear scan; the registry holds a handful of entries.
    pub fn find(&self, id: &str) -> Option<&SectionRecord> {
        self.sections.iter().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }
}

#[derive(Deserialize)]
struct RawManifest {
    #[serde(default)]
    page: PageConfig,
    sections: Vec<SectionRecord>,
}

/// Page configuration plus the section registry.
#[derive(Debug, Clone)]
pub struct Manifest {
    pub page: PageConfig,
    pub registry: Registry,
}

impl Manifest {
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let raw: RawManifest = serde_json::from_str(json)?;
        Ok(Self {
            page: raw.page.normalized(),
            registry: Registry::new(raw.sections)?,
        })
    }

    pub fn builtin() -> Result<Self, ManifestError> {
        Self::from_json(BUILTIN_MANIFEST)
    }
}
