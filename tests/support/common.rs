#![allow(dead_code)]

use anyhow::{Context, Result};
use flatwrite::{ComponentIndex, EditorInsert};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::io::Write;
use tempfile::NamedTempFile;

pub const SCHEMA_VERSION: &str = "flatwrite_components_v1";

/// Fixture component: id, supporting framework keys, optional form kind.
pub type ComponentEntry<'a> = (&'a str, &'a [&'a str], Option<&'a str>);

pub fn component_json(id: &str, supported: &[&str], form: Option<&str>) -> Value {
    let mut support = BTreeMap::new();
    let mut snippets = BTreeMap::new();
    for framework in ["poshui", "oat", "spectre"] {
        let on = supported.contains(&framework);
        support.insert(framework, json!(on));
        let snippet = if on {
            format!("<div class=\"{id}\">{id} for {framework}</div>")
        } else {
            String::new()
        };
        snippets.insert(framework, json!(snippet));
    }

    let mut component = json!({
        "id": id,
        "label": fixture_label(id),
        "icon": "*",
        "support": support,
        "snippets": snippets,
    });
    if let Some(form) = form {
        component["form"] = json!(form);
    }
    component
}

pub fn catalog_json(entries: &[ComponentEntry<'_>]) -> Value {
    let components: Vec<Value> = entries
        .iter()
        .map(|(id, supported, form)| component_json(id, supported, *form))
        .collect();
    json!({
        "schema_version": SCHEMA_VERSION,
        "catalog": {"key": "sample_components_v1", "title": "sample catalog"},
        "components": components
    })
}

/// Small synthetic catalogue independent of the bundled data.
pub fn sample_component_index(entries: &[ComponentEntry<'_>]) -> Result<ComponentIndex> {
    let file = write_catalog(&catalog_json(entries))?;
    ComponentIndex::load(file.path())
        .with_context(|| "failed to load sample component index".to_string())
}

/// A catalogue with two direct and all four structured components.
pub fn standard_sample_index() -> ComponentIndex {
    const ALL: &[&str] = &["poshui", "oat", "spectre"];
    let entries: [ComponentEntry<'_>; 6] = [
        ("alert", ALL, None),
        ("chip", &["spectre"], None),
        ("card", ALL, Some("card")),
        ("table", ALL, Some("table")),
        ("list", &["poshui", "oat"], Some("list")),
        ("image", ALL, Some("image")),
    ];
    sample_component_index(&entries).expect("standard sample catalog loads")
}

pub fn write_catalog(value: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    serde_json::to_writer(&mut file, value)?;
    file.flush()?;
    Ok(file)
}

fn fixture_label(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Editor double that records every fragment it receives.
#[derive(Debug, Default)]
pub struct RecordingEditor {
    pub inserted: Vec<String>,
}

impl RecordingEditor {
    pub fn calls(&self) -> usize {
        self.inserted.len()
    }
}

impl EditorInsert for RecordingEditor {
    fn insert_block(&mut self, text: &str) {
        self.inserted.push(text.to_string());
    }
}
