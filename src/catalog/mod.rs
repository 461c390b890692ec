//! Component catalogue wiring.
//!
//! The catalogue is declarative JSON (`catalogs/components_v1.json` is
//! compiled into the crate) describing every insertable component, which
//! frameworks support it, and the markup to insert for each. Callers load it
//! once into a [`ComponentIndex`], which validates the document and is
//! immutable afterwards.

pub mod identity;
pub mod index;
pub mod model;

pub use identity::{CatalogKey, ComponentId};
pub use index::{ComponentAvailability, ComponentIndex};
pub use model::{CatalogMetadata, ComponentCatalog, ComponentDefinition};

pub use model::{load_catalog_from_path, parse_catalog};

/// Relative path of the bundled catalogue inside the source tree.
pub const DEFAULT_CATALOG_PATH: &str = "catalogs/components_v1.json";

/// Contents of the bundled catalogue.
pub const BUNDLED_CATALOG: &str = include_str!("../../catalogs/components_v1.json");
