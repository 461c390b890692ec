//! Component insertion engine for the FlatWrite markdown editor.
//!
//! FlatWrite offers a catalogue of UI snippets (alerts, cards, tabs, ...)
//! that can be dropped into a markdown document and previewed under one of
//! several CSS frameworks. This crate holds the parts of that feature with
//! real rules:
//!
//! - [`catalog`]: the declarative component catalogue and its validated index;
//! - [`resolver`]: which components a framework supports, and their snippets;
//! - [`forms`]: field schemas and fragment generators for table, card, list
//!   and image components;
//! - [`coordinator`]: the request/confirm/cancel flow that feeds fragments to
//!   the editor.
//!
//! The editing surface, preview rendering and export live outside the crate
//! and are reached through the traits in [`editor`].

pub mod catalog;
pub mod config;
pub mod coordinator;
pub mod editor;
pub mod error;
pub mod forms;
pub mod framework;
pub mod resolver;
mod schema_loader;

pub use catalog::{
    BUNDLED_CATALOG, CatalogKey, ComponentAvailability, ComponentCatalog, ComponentDefinition,
    ComponentId, ComponentIndex, DEFAULT_CATALOG_PATH, load_catalog_from_path,
};
pub use config::{CatalogSource, resolve_catalog_source, resolve_framework};
pub use coordinator::{InsertionCoordinator, InsertionOutcome, PendingForm};
pub use editor::{ActiveFramework, DocumentBuffer, EditorInsert};
pub use error::InsertionError;
pub use forms::{
    CardInput, FieldDescriptor, FieldKind, FormKind, FormSchema, FormValues, ImageInput,
    ListInput, ListStyle, TableInput,
};
pub use framework::{Framework, allowed_framework_names};
pub use resolver::SupportResolver;
pub use schema_loader::CATALOG_SCHEMA_PATH;

/// Split a `name=value` pair as accepted by `--field`.
///
/// Only the first `=` separates; values may contain `=` themselves.
pub fn split_field_assignment(raw: &str) -> Option<(&str, &str)> {
    let (name, value) = raw.split_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name, value))
}
