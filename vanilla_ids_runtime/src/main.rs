//! `vanilla-ids` — migrate saved registry data and query the vanilla id table.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use vanilla_ids::hashing::canonical_hash;
use vanilla_ids::vanilla::try_bootstrap;
use vanilla_ids::{Category, Handle, Identifier};
use vanilla_ids_runtime::config::MigrationConfig;
use vanilla_ids_runtime::{export, logging, migrate};

#[derive(Parser)]
#[command(
    name = "vanilla-ids",
    version,
    about = "Legacy tile/item id migration for saved registry data"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rename legacy keys in a registry-data JSON file, in place.
    Migrate {
        file: PathBuf,
        /// Migration config (JSON). Defaults apply when omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the current id of a legacy handle.
    Lookup { category: CategoryArg, handle: Handle },
    /// Print the current form of a possibly-legacy id.
    Correct { category: CategoryArg, id: String },
    /// Write the id table export into a directory.
    Export { dir: PathBuf },
    /// Print the id table fingerprint.
    Fingerprint,
}

#[derive(Clone, Copy, ValueEnum)]
enum CategoryArg {
    Tile,
    Item,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Tile => Category::Tile,
            CategoryArg::Item => Category::Item,
        }
    }
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let registry = try_bootstrap().context("build vanilla id table")?;

    match cli.command {
        Command::Migrate { file, config } => {
            let config = match config {
                Some(path) => MigrationConfig::load(&path)?,
                None => MigrationConfig::default(),
            };
            let report = migrate::migrate_file(&registry, &file, &config)
                .with_context(|| format!("migrate {}", file.display()))?;
            println!("{}", report.summary());
        }
        Command::Lookup { category, handle } => {
            let category = Category::from(category);
            match registry.lookup(category, handle) {
                Some(id) => println!("{}", id),
                None => bail!("no {} registered for handle {}", category, handle),
            }
        }
        Command::Correct { category, id } => {
            let id = Identifier::parse(&id).with_context(|| format!("parse id {:?}", id))?;
            println!("{}", registry.correct_legacy_id(category.into(), &id));
        }
        Command::Export { dir } => {
            let path = export::save_export(&dir, &registry)
                .with_context(|| format!("export to {}", dir.display()))?;
            println!("{}", path.display());
        }
        Command::Fingerprint => {
            println!("{}", canonical_hash(&registry));
        }
    }
    Ok(())
}
