//! Command-line front end for the component engine.
//!
//! Usage:
//!   flatwrite list --framework oat
//!   flatwrite snippet accordion --framework spectre
//!   flatwrite form table
//!   flatwrite insert card --framework oat --field title=Hello --field body=World
//!   flatwrite insert table --field columns=2 --doc notes.md
//!   flatwrite validate --catalog my_components.json

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use flatwrite::{
    CatalogSource, ComponentIndex, DocumentBuffer, Framework, InsertionCoordinator,
    InsertionOutcome, SupportResolver, resolve_catalog_source, resolve_framework,
    split_field_assignment,
};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "flatwrite")]
#[command(about = "Resolve, generate and insert FlatWrite UI components")]
struct Cli {
    /// Component catalog to use instead of the bundled one (or FLATWRITE_CATALOG).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Log debug output to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List components and whether the framework supports them.
    List {
        /// Framework key (or FLATWRITE_FRAMEWORK).
        #[arg(long)]
        framework: Option<String>,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// List known frameworks and their assets.
    Frameworks,
    /// Print a component's stored snippet.
    Snippet {
        component: String,
        #[arg(long)]
        framework: Option<String>,
    },
    /// Print the field schema of a structured component as JSON.
    Form { component: String },
    /// Produce a component fragment, filling structured forms from --field.
    Insert {
        component: String,
        #[arg(long)]
        framework: Option<String>,
        /// Form field as NAME=VALUE; repeatable.
        #[arg(long = "field", value_name = "NAME=VALUE")]
        fields: Vec<String>,
        /// Append the fragment to this markdown file instead of printing it.
        #[arg(long)]
        doc: Option<PathBuf>,
    },
    /// Validate the catalog and print a summary.
    Validate,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let source = resolve_catalog_source(cli.catalog.as_deref());
    debug!(catalog = %source.describe(), "loading component catalog");
    let index = source
        .load()
        .with_context(|| format!("loading {}", source.describe()))?;

    match cli.command {
        Command::List { framework, json } => {
            let framework = resolve_framework(framework.as_deref())?;
            list_components(&index, framework, json)
        }
        Command::Frameworks => {
            list_frameworks();
            Ok(())
        }
        Command::Snippet {
            component,
            framework,
        } => {
            let framework = resolve_framework(framework.as_deref())?;
            let resolver = SupportResolver::new(&index);
            let Some(snippet) = resolver.snippet(&component, framework) else {
                if index.component(&component).is_none() {
                    bail!("unknown component '{component}'");
                }
                bail!(
                    "component '{component}' is not supported by {}",
                    framework.label()
                );
            };
            println!("{snippet}");
            Ok(())
        }
        Command::Form { component } => {
            let definition = index
                .component(&component)
                .with_context(|| format!("unknown component '{component}'"))?;
            let Some(form) = definition.form else {
                bail!("component '{component}' is inserted directly and has no form");
            };
            println!("{}", serde_json::to_string_pretty(form.schema())?);
            Ok(())
        }
        Command::Insert {
            component,
            framework,
            fields,
            doc,
        } => {
            let framework = resolve_framework(framework.as_deref())?;
            insert_component(&index, framework, &component, &fields, doc)
        }
        Command::Validate => {
            validate_catalog(&index, &source);
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact()
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}

fn list_components(index: &ComponentIndex, framework: Framework, json: bool) -> Result<()> {
    let grid = index.availability(framework);
    if json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
        return Ok(());
    }

    println!("Components under {}:", framework.label());
    for entry in grid {
        let state = if entry.enabled { "ok " } else { "-- " };
        let form = if entry.structured { " [form]" } else { "" };
        println!("  {state}{:<12} {}{form}", entry.id.as_str(), entry.title);
    }
    Ok(())
}

fn list_frameworks() {
    for framework in Framework::all() {
        println!("{} ({})", framework.as_str(), framework.label());
        if let Some(css) = framework.stylesheet_url() {
            println!("  css: {css}");
        }
        if let Some(js) = framework.script_url() {
            println!("  js:  {js}");
        }
    }
}

fn insert_component(
    index: &ComponentIndex,
    framework: Framework,
    component: &str,
    fields: &[String],
    doc: Option<PathBuf>,
) -> Result<()> {
    let existing = match &doc {
        Some(path) => match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", path.display()));
            }
        },
        None => String::new(),
    };

    let mut coordinator =
        InsertionCoordinator::new(index, framework, DocumentBuffer::new(existing));
    match coordinator.request_insertion(component)? {
        InsertionOutcome::Inserted { .. } => {
            if !fields.is_empty() {
                bail!("component '{component}' is inserted directly and takes no --field values");
            }
        }
        InsertionOutcome::AwaitingForm { .. } => {
            for raw in fields {
                let (name, value) = split_field_assignment(raw)
                    .with_context(|| format!("--field expects NAME=VALUE, got '{raw}'"))?;
                coordinator.set_field(name, value)?;
            }
            coordinator.confirm()?;
        }
    }

    let document = coordinator.into_editor().into_text();
    match doc {
        Some(path) => {
            fs::write(&path, &document).with_context(|| format!("writing {}", path.display()))?;
            eprintln!("inserted {component} into {}", path.display());
        }
        None => print!("{document}"),
    }
    Ok(())
}

fn validate_catalog(index: &ComponentIndex, source: &CatalogSource) {
    let structured = index.components().filter(|c| c.is_structured()).count();
    println!(
        "{}: catalog {} ok ({} components, {} with forms)",
        source.describe(),
        index.key(),
        index.len(),
        structured
    );
    for framework in Framework::all() {
        let supported = index
            .components()
            .filter(|component| component.supports(framework))
            .count();
        println!("  {:<8} {supported} supported", framework.as_str());
    }
}
