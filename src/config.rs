//! Runtime configuration from flags and environment.
//!
//! Precedence is always: explicit flag, then environment variable, then the
//! built-in default.

use crate::catalog::ComponentIndex;
use crate::framework::Framework;
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Path to an external catalogue, overriding the bundled one.
pub const ENV_CATALOG: &str = "FLATWRITE_CATALOG";
/// Framework key selected at startup.
pub const ENV_FRAMEWORK: &str = "FLATWRITE_FRAMEWORK";

/// Where the component catalogue comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSource {
    Bundled,
    File(PathBuf),
}

impl CatalogSource {
    pub fn load(&self) -> Result<ComponentIndex> {
        match self {
            CatalogSource::Bundled => ComponentIndex::bundled(),
            CatalogSource::File(path) => ComponentIndex::load(path),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Bundled => "bundled catalog".to_string(),
            CatalogSource::File(path) => path.display().to_string(),
        }
    }
}

pub fn resolve_catalog_source(cli_path: Option<&Path>) -> CatalogSource {
    if let Some(path) = cli_path {
        return CatalogSource::File(path.to_path_buf());
    }
    match env::var_os(ENV_CATALOG) {
        Some(raw) if !raw.is_empty() => CatalogSource::File(PathBuf::from(raw)),
        _ => CatalogSource::Bundled,
    }
}

/// The framework to start with.
///
/// A flag value must name a known framework. The environment value is treated
/// like a stored preference: unknown keys fall back to the default.
pub fn resolve_framework(cli_value: Option<&str>) -> Result<Framework> {
    if let Some(raw) = cli_value {
        return Framework::try_from(raw).context("resolving --framework");
    }
    Ok(Framework::from_stored(env::var(ENV_FRAMEWORK).ok().as_deref()))
}
