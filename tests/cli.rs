// Binary smoke tests for the flatwrite CLI.
mod support;
#[path = "support/common.rs"]
mod common;

use anyhow::Result;
use serde_json::Value;
use std::fs;
use support::{flatwrite_command, run_command, run_command_expect_failure};
use tempfile::TempDir;

use common::{ComponentEntry, catalog_json, write_catalog};

fn stdout_of(args: &[&str]) -> Result<String> {
    let mut cmd = flatwrite_command();
    cmd.args(args);
    let output = run_command(cmd)?;
    Ok(String::from_utf8(output.stdout)?)
}

fn stderr_of_failure(args: &[&str]) -> Result<String> {
    let mut cmd = flatwrite_command();
    cmd.args(args);
    let output = run_command_expect_failure(cmd)?;
    Ok(String::from_utf8_lossy(&output.stderr).into_owned())
}

#[test]
fn list_marks_unsupported_components() -> Result<()> {
    let stdout = stdout_of(&["list", "--framework", "poshui"])?;
    assert!(stdout.starts_with("Components under PoshUI:"));
    let accordion = stdout
        .lines()
        .find(|line| line.contains("accordion"))
        .expect("accordion listed");
    assert!(accordion.trim_start().starts_with("--"));
    assert!(accordion.contains("(not supported by PoshUI)"));
    let table = stdout
        .lines()
        .find(|line| line.contains(" table "))
        .expect("table listed");
    assert!(table.trim_start().starts_with("ok"));
    assert!(table.ends_with("[form]"));
    Ok(())
}

#[test]
fn list_json_reports_every_component() -> Result<()> {
    let stdout = stdout_of(&["list", "--framework", "spectre", "--json"])?;
    let grid: Value = serde_json::from_str(&stdout)?;
    let entries = grid.as_array().expect("array");
    assert_eq!(entries.len(), 30);
    assert!(entries.iter().all(|entry| entry["enabled"] == Value::Bool(true)));
    Ok(())
}

#[test]
fn framework_env_var_selects_default() -> Result<()> {
    let mut cmd = flatwrite_command();
    cmd.env("FLATWRITE_FRAMEWORK", "oat").args(["snippet", "divider"]);
    let output = run_command(cmd)?;
    assert_eq!(String::from_utf8(output.stdout)?, "<hr />\n");

    let mut cmd = flatwrite_command();
    cmd.env("FLATWRITE_FRAMEWORK", "bootstrap").args(["list"]);
    let output = run_command(cmd)?;
    assert!(String::from_utf8(output.stdout)?.starts_with("Components under PoshUI:"));
    Ok(())
}

#[test]
fn snippet_for_unsupported_component_fails() -> Result<()> {
    let stderr = stderr_of_failure(&["snippet", "accordion", "--framework", "poshui"])?;
    assert!(stderr.contains("component 'accordion' is not supported by PoshUI"));

    let stderr = stderr_of_failure(&["snippet", "carousel"])?;
    assert!(stderr.contains("unknown component 'carousel'"));

    let stderr = stderr_of_failure(&["snippet", "alert", "--framework", "bulma"])?;
    assert!(stderr.contains("resolving --framework"));
    Ok(())
}

#[test]
fn form_prints_field_schema() -> Result<()> {
    let stdout = stdout_of(&["form", "table"])?;
    let schema: Value = serde_json::from_str(&stdout)?;
    assert_eq!(schema["kind"], "table");
    let names: Vec<&str> = schema["fields"]
        .as_array()
        .expect("fields")
        .iter()
        .filter_map(|field| field["name"].as_str())
        .collect();
    assert_eq!(names, vec!["columns", "rows", "headers"]);
    assert_eq!(schema["fields"][0]["kind"]["type"], "number");
    assert_eq!(schema["fields"][0]["kind"]["max"], 10);

    let stderr = stderr_of_failure(&["form", "alert"])?;
    assert!(stderr.contains("has no form"));
    Ok(())
}

#[test]
fn insert_table_prints_markdown() -> Result<()> {
    let stdout = stdout_of(&[
        "insert",
        "table",
        "--field",
        "columns=2",
        "--field",
        "rows=1",
        "--field",
        "headers=Name,Age",
    ])?;
    assert_eq!(stdout, "| Name | Age |\n| --- | --- |\n|   |   |\n");
    Ok(())
}

#[test]
fn insert_rejects_bad_fields() -> Result<()> {
    let stderr = stderr_of_failure(&["insert", "table", "--field", "colour=red"])?;
    assert!(stderr.contains("has no field 'colour'"));

    let stderr = stderr_of_failure(&["insert", "table", "--field", "columns"])?;
    assert!(stderr.contains("NAME=VALUE"));

    let stderr = stderr_of_failure(&["insert", "divider", "--field", "rows=2"])?;
    assert!(stderr.contains("takes no --field values"));
    Ok(())
}

#[test]
fn insert_appends_to_document() -> Result<()> {
    let dir = TempDir::new()?;
    let doc = dir.path().join("notes.md");
    fs::write(&doc, "# Notes")?;
    let doc_arg = doc.to_string_lossy().into_owned();

    stdout_of(&["insert", "divider", "--framework", "oat", "--doc", &doc_arg])?;
    stdout_of(&[
        "insert",
        "card",
        "--framework",
        "oat",
        "--field",
        "title=Hi",
        "--doc",
        &doc_arg,
    ])?;

    let text = fs::read_to_string(&doc)?;
    assert_eq!(
        text,
        "# Notes\n<hr />\n<article class=\"card\">\n  <header>\n    <h3>Hi</h3>\n  </header>\n  <p>Card content goes here.</p>\n</article>\n"
    );
    Ok(())
}

#[test]
fn insert_into_missing_document_creates_it() -> Result<()> {
    let dir = TempDir::new()?;
    let doc = dir.path().join("fresh.md");
    let doc_arg = doc.to_string_lossy().into_owned();
    stdout_of(&["insert", "image", "--doc", &doc_arg])?;
    assert_eq!(
        fs::read_to_string(&doc)?,
        "![Image](https://picsum.photos/600/300)\n"
    );
    Ok(())
}

#[test]
fn validate_summarises_catalog() -> Result<()> {
    let stdout = stdout_of(&["validate"])?;
    let first = stdout.lines().next().unwrap_or_default();
    assert_eq!(
        first,
        "bundled catalog: catalog flatwrite_components_v1 ok (30 components, 4 with forms)"
    );
    assert!(stdout.contains("spectre  30 supported"));
    Ok(())
}

#[test]
fn external_catalog_is_used_when_given() -> Result<()> {
    let entries: [ComponentEntry<'_>; 2] = [("alert", &["oat"], None), ("table", &["oat"], Some("table"))];
    let file = write_catalog(&catalog_json(&entries))?;
    let path = file.path().to_string_lossy().into_owned();

    let stdout = stdout_of(&["validate", "--catalog", &path])?;
    assert!(stdout.contains("catalog sample_components_v1 ok (2 components, 1 with forms)"));

    let mut cmd = flatwrite_command();
    cmd.env("FLATWRITE_CATALOG", &path)
        .args(["snippet", "alert", "--framework", "oat"]);
    let output = run_command(cmd)?;
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "<div class=\"alert\">alert for oat</div>\n"
    );
    Ok(())
}

#[test]
fn bad_catalog_fails_to_load() -> Result<()> {
    let dir = TempDir::new()?;
    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json")?;
    let stderr = stderr_of_failure(&["validate", "--catalog", &broken.to_string_lossy()])?;
    assert!(stderr.contains("loading"));

    let missing = dir.path().join("missing.json");
    let stderr = stderr_of_failure(&["list", "--catalog", &missing.to_string_lossy()])?;
    assert!(stderr.contains("missing.json"));
    Ok(())
}
