//! Serde model for component catalogue documents.

use crate::catalog::{CatalogKey, ComponentId};
use crate::forms::FormKind;
use crate::framework::Framework;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ComponentCatalog {
    pub schema_version: String,
    pub catalog: CatalogMetadata,
    pub components: Vec<ComponentDefinition>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogMetadata {
    pub key: CatalogKey,
    pub title: String,
}

/// One insertable component and its per-framework markup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDefinition {
    pub id: ComponentId,
    pub label: String,
    #[serde(default)]
    pub icon: String,
    /// Missing frameworks are unsupported.
    #[serde(default)]
    pub support: BTreeMap<Framework, bool>,
    #[serde(default)]
    pub snippets: BTreeMap<Framework, String>,
    /// Present for components inserted through a form instead of verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<FormKind>,
}

impl ComponentDefinition {
    pub fn supports(&self, framework: Framework) -> bool {
        self.support.get(&framework).copied().unwrap_or(false)
    }

    /// Stored snippet for `framework`, or `None` when the framework is
    /// unsupported or the stored string is empty.
    pub fn snippet(&self, framework: Framework) -> Option<&str> {
        if !self.supports(framework) {
            return None;
        }
        self.snippets
            .get(&framework)
            .map(String::as_str)
            .filter(|snippet| !snippet.is_empty())
    }

    pub fn is_structured(&self) -> bool {
        self.form.is_some()
    }
}

pub fn load_catalog_from_path(path: &Path) -> Result<ComponentCatalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading component catalog {}", path.display()))?;
    parse_catalog(&raw).with_context(|| format!("parsing component catalog {}", path.display()))
}

pub fn parse_catalog(raw: &str) -> Result<ComponentCatalog> {
    let catalog: ComponentCatalog =
        serde_json::from_str(raw).context("deserializing component catalog")?;
    Ok(catalog)
}
