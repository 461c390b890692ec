//! Indexed view of a component catalogue.
//!
//! The index enforces the expected catalogue schema version, validates the
//! document against the catalogue JSON Schema, and rejects data defects
//! (duplicate ids, supported-but-empty snippets) at load time so lookups can
//! stay infallible afterwards.

use crate::catalog::{
    BUNDLED_CATALOG, CatalogKey, CatalogMetadata, ComponentCatalog, ComponentDefinition,
    ComponentId,
};
use crate::forms::FormKind;
use crate::framework::Framework;
use crate::schema_loader::validate_catalog_document;
use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tracing::debug;

// Only one catalogue layout exists today; callers may widen the accepted set
// via env when experimenting with a new layout.
const DEFAULT_SCHEMA_VERSION: &str = "flatwrite_components_v1";
const ENV_ALLOWED_SCHEMA_VERSIONS: &str = "FLATWRITE_ALLOWED_CATALOG_SCHEMAS";

#[derive(Debug)]
/// Component catalogue plus a derived index keyed by component id.
pub struct ComponentIndex {
    catalog_key: CatalogKey,
    catalog: ComponentCatalog,
    by_id: BTreeMap<ComponentId, usize>,
}

/// Display state of one component under a framework.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComponentAvailability {
    pub id: ComponentId,
    pub label: String,
    pub icon: String,
    pub enabled: bool,
    pub structured: bool,
    /// Tooltip text; names the framework when the component is disabled.
    pub title: String,
}

impl ComponentIndex {
    /// Load and validate a catalogue from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading component catalog {}", path.display()))?;
        Self::from_json_str(&raw).with_context(|| format!("loading {}", path.display()))
    }

    /// The catalogue compiled into the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_CATALOG).context("loading bundled component catalog")
    }

    /// Validate a raw JSON document and build the index.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw).context("parsing component catalog JSON")?;
        let schema_version = value
            .get("schema_version")
            .and_then(Value::as_str)
            .unwrap_or_default();
        validate_schema_version(schema_version)?;
        validate_catalog_document(&value)?;
        let catalog: ComponentCatalog =
            serde_json::from_value(value).context("deserializing component catalog")?;
        Self::from_catalog(catalog)
    }

    /// Build the index from an already-deserialized catalogue.
    ///
    /// Skips the JSON Schema pass but still runs every semantic check, which
    /// is what tests use to assemble small synthetic catalogues.
    pub fn from_catalog(catalog: ComponentCatalog) -> Result<Self> {
        validate_schema_version(&catalog.schema_version)?;
        validate_catalog_metadata(&catalog.catalog)?;
        let by_id = build_index(&catalog.components)?;
        debug!(
            catalog = %catalog.catalog.key,
            components = by_id.len(),
            "component catalog indexed"
        );
        Ok(Self {
            catalog_key: catalog.catalog.key.clone(),
            catalog,
            by_id,
        })
    }

    /// The catalogue key declared in the loaded document.
    pub fn key(&self) -> &CatalogKey {
        &self.catalog_key
    }

    /// Resolve a component by id.
    ///
    /// Returns `None` instead of erroring; unknown ids are an ordinary
    /// outcome for callers driven by user input.
    pub fn component(&self, id: &str) -> Option<&ComponentDefinition> {
        self.by_id
            .get(id)
            .and_then(|&position| self.catalog.components.get(position))
    }

    /// Iterates component ids in stable sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &ComponentId> {
        self.by_id.keys()
    }

    /// Iterates components in catalogue (display) order.
    pub fn components(&self) -> impl Iterator<Item = &ComponentDefinition> {
        self.catalog.components.iter()
    }

    pub fn len(&self) -> usize {
        self.catalog.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.components.is_empty()
    }

    /// Component grid state for `framework`, in display order.
    pub fn availability(&self, framework: Framework) -> Vec<ComponentAvailability> {
        self.components()
            .map(|component| {
                let enabled = component.supports(framework);
                let title = if enabled {
                    component.label.clone()
                } else {
                    format!(
                        "{} (not supported by {})",
                        component.label,
                        framework.label()
                    )
                };
                ComponentAvailability {
                    id: component.id.clone(),
                    label: component.label.clone(),
                    icon: component.icon.clone(),
                    enabled,
                    structured: component.is_structured(),
                    title,
                }
            })
            .collect()
    }

    /// Access the underlying catalogue.
    pub fn catalog(&self) -> &ComponentCatalog {
        &self.catalog
    }
}

fn validate_schema_version(schema_version: &str) -> Result<()> {
    if schema_version.is_empty() {
        bail!("schema_version must not be empty");
    }

    let allowed = allowed_schema_versions();
    if !allowed.contains(schema_version) {
        bail!(
            "schema_version '{}' not in allowed set {:?}",
            schema_version,
            allowed
        );
    }

    Ok(())
}

pub fn allowed_schema_versions() -> BTreeSet<String> {
    let mut versions: BTreeSet<String> = BTreeSet::new();
    versions.insert(DEFAULT_SCHEMA_VERSION.to_string());
    if let Ok(raw) = std::env::var(ENV_ALLOWED_SCHEMA_VERSIONS) {
        for v in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            versions.insert(v.to_string());
        }
    }
    versions
}

fn validate_catalog_metadata(meta: &CatalogMetadata) -> Result<()> {
    if !is_identifier(&meta.key.0) {
        bail!("catalog.key must match ^[a-z0-9_-]+$, got '{}'", meta.key.0);
    }
    if meta.title.trim().is_empty() {
        bail!("catalog.title must not be empty");
    }
    Ok(())
}

fn build_index(components: &[ComponentDefinition]) -> Result<BTreeMap<ComponentId, usize>> {
    if components.is_empty() {
        bail!("catalog contains no components");
    }

    let mut forms: BTreeMap<FormKind, &ComponentId> = BTreeMap::new();
    let mut map = BTreeMap::new();
    for (position, component) in components.iter().enumerate() {
        if !is_identifier(component.id.as_str()) {
            bail!(
                "component id must match ^[a-z0-9_-]+$, got '{}'",
                component.id
            );
        }
        if map.contains_key(&component.id) {
            bail!("duplicate component id {}", component.id);
        }
        if component.label.trim().is_empty() {
            bail!("component {} has an empty label", component.id);
        }
        for (framework, supported) in &component.support {
            let has_snippet = component
                .snippets
                .get(framework)
                .is_some_and(|snippet| !snippet.is_empty());
            if *supported && !has_snippet {
                bail!(
                    "component {} is marked supported by {} but has no snippet",
                    component.id,
                    framework
                );
            }
        }
        if let Some(kind) = component.form {
            if let Some(previous) = forms.insert(kind, &component.id) {
                bail!(
                    "form '{}' is attached to both {} and {}",
                    kind.as_str(),
                    previous,
                    component.id
                );
            }
        }
        map.insert(component.id.clone(), position);
    }
    Ok(map)
}

fn is_identifier(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-'))
}
