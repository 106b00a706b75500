mod catalog;
mod config;
mod content;
mod error;
mod executor;
mod model;
mod render;
mod slug;
mod sources;
mod theme_store;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use crate::catalog::{build_catalog, Catalog};
use crate::config::{load_config, Config};
use crate::content::{load_collection, Collection};
use crate::executor::{execute, Dispatch, DryRun, SystemNavigator, ThemeContext};
use crate::model::Action;
use crate::render::{render, Format};
use crate::theme_store::{MemoryTheme, ThemeStore};

#[derive(Parser, Debug)]
#[command(author, version, about = "Builds the command-palette search index of a static site", long_about = None)]
struct Args {
    /// Configuration file (defaults to _palette.toml in the site root)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site root holding the content collections
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the search index file
    Build {
        /// Output file, `-` for stdout (defaults to the configured path)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format (guessed from the output extension when omitted)
        #[arg(long, value_enum)]
        format: Option<Format>,
    },
    /// Print the catalog entries
    List {
        /// Only show entries of this section
        #[arg(long)]
        section: Option<String>,
    },
    /// Fail when two entries share an id
    Check,
    /// Run the action bound to an entry
    Activate {
        id: String,
        /// Print the action instead of running it
        #[arg(long)]
        dry_run: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_collections(config: &Config, root: &Path) -> Vec<Collection> {
    let mut collections = Vec::with_capacity(config.collections.len());
    for collection_config in &config.collections {
        match load_collection(root, collection_config) {
            Ok(collection) => collections.push(collection),
            Err(e) => warn!("Skipping collection '{}': {}", collection_config.name, e),
        }
    }
    collections
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // 1. Load Config
    let config = load_config(args.config.as_deref(), &args.root)?;

    // 2. Build the catalog from config and content
    let collections = load_collections(&config, &args.root);
    let catalog = build_catalog(&config, &collections);
    info!("Catalog built with {} entries", catalog.len());

    match args.command {
        Commands::Build { output, format } => build(&config, &catalog, &args.root, output, format),
        Commands::List { section } => {
            list(&catalog, section.as_deref());
            Ok(())
        }
        Commands::Check => check(&catalog),
        Commands::Activate { id, dry_run } => activate(&config, &catalog, &id, dry_run),
    }
}

fn build(
    config: &Config,
    catalog: &Catalog,
    root: &Path,
    output: Option<PathBuf>,
    format: Option<Format>,
) -> Result<()> {
    let to_stdout = output.as_deref() == Some(Path::new("-"));
    let path = output.unwrap_or_else(|| root.join(&config.output.path));
    let format = format
        .or_else(|| Format::from_path(&path))
        .unwrap_or_default();

    let rendered = render(catalog, format, &config.output.selector)?;

    if to_stdout {
        print!("{}", rendered);
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {:?}", parent))?;
    }
    fs::write(&path, rendered).with_context(|| format!("writing {:?}", path))?;
    println!("Wrote {} entries to {}", catalog.len(), path.display());
    Ok(())
}

fn list(catalog: &Catalog, section: Option<&str>) {
    let entries: Vec<_> = match section {
        Some(s) => catalog.in_section(s).collect(),
        None => catalog.iter().collect(),
    };
    for entry in entries {
        let marker = if entry.is_interactive() { ' ' } else { '-' };
        println!("{} {:<12} {:<60} {}", marker, entry.section, entry.id, entry.title);
    }
}

fn check(catalog: &Catalog) -> Result<()> {
    let duplicates = catalog.duplicates();
    if duplicates.is_empty() {
        println!("ok: {} entries, all ids unique", catalog.len());
        return Ok(());
    }
    for dup in duplicates {
        let titles: Vec<&str> = dup
            .positions
            .iter()
            .map(|&i| catalog.entries()[i].title.as_str())
            .collect();
        println!("duplicate id '{}': {:?}", dup.id, titles);
    }
    bail!("{} duplicate id(s) in catalog", duplicates.len());
}

fn activate(config: &Config, catalog: &Catalog, id: &str, dry_run: bool) -> Result<()> {
    let entry = catalog
        .get(id)
        .ok_or_else(|| error::Error::UnknownEntry(id.to_string()))?;

    let outcome = if dry_run {
        let mut navigator = DryRun::default();
        let mut theme = DryRun::default();
        let outcome = execute(entry, &mut navigator, &mut theme)?;
        for line in navigator.log.iter().chain(theme.log.iter()) {
            println!("{}", line);
        }
        outcome
    } else {
        let mut navigator = SystemNavigator::new(&config.opener, &config.site);
        let mut theme: Box<dyn ThemeContext> = match theme_store::default_state_path() {
            Some(state_path) => Box::new(ThemeStore::open(state_path)),
            None => {
                warn!("No data directory available, theme setting will not persist");
                Box::new(MemoryTheme::default())
            }
        };
        let outcome = execute(entry, &mut navigator, theme.as_mut())?;
        if let (Action::SetTheme { .. }, Some(current)) = (&entry.action, theme.theme()) {
            println!("theme is now {}", current);
        }
        outcome
    };

    if outcome == Dispatch::NoAction {
        println!("'{}' is informational only", entry.id);
    }
    Ok(())
}
