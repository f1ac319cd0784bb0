//! schemadoc CLI entrypoint
//! Parses command-line arguments and dispatches to the application use cases.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use schemadoc::{
    application::{
        DocsRequest, ListGeneratorsUseCase, UpdateCollectionUseCase, UpdateReadmeUseCase,
        ensure_up_to_date,
    },
    core::Config,
    infrastructure::{FileSystemGeneratorScanner, FileSystemOutputService},
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "schemadoc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project root containing package.json and the generator sources
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,
    /// Configuration file (defaults to <root>/schemadoc.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// README file, relative to the project root
    #[arg(long, global = true)]
    readme: Option<PathBuf>,
    /// Collection manifest, relative to the project root
    #[arg(long, global = true)]
    collection: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Regenerate the generators section of the README
    Readme {
        /// Exit with an error instead of writing when the README is stale
        #[arg(long)]
        check: bool,
    },
    /// Regenerate the collection manifest
    Collection {
        /// Exit with an error instead of writing when the manifest is stale
        #[arg(long)]
        check: bool,
    },
    /// Regenerate both the README section and the collection manifest
    All {
        /// Exit with an error instead of writing when anything is stale
        #[arg(long)]
        check: bool,
    },
    /// List the generators that would be documented
    List {
        /// Print generators as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins, otherwise INFO; -v forces DEBUG. Logs go to stderr
    let mut filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.verbose {
        filter = filter.add_directive(Level::DEBUG.into());
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)
        .await
        .context("Failed to load configuration")?;
    let scanner = Arc::new(FileSystemGeneratorScanner::new());
    let output = Arc::new(FileSystemOutputService::new());

    match &cli.command {
        Commands::Readme { check } => {
            let request = DocsRequest::new(&cli.root, config).with_check(*check);
            let response = UpdateReadmeUseCase::new(scanner, output)
                .execute(request)
                .await
                .context("Failed to update README")?;
            ensure_up_to_date_if(*check, response.changed)?;
        }
        Commands::Collection { check } => {
            let request = DocsRequest::new(&cli.root, config).with_check(*check);
            let response = UpdateCollectionUseCase::new(scanner, output)
                .execute(request)
                .await
                .context("Failed to update collection manifest")?;
            ensure_up_to_date_if(*check, response.changed)?;
        }
        Commands::All { check } => {
            let request = DocsRequest::new(&cli.root, config).with_check(*check);
            let readme = UpdateReadmeUseCase::new(scanner.clone(), output.clone())
                .execute(request.clone())
                .await
                .context("Failed to update README")?;
            let collection = UpdateCollectionUseCase::new(scanner, output)
                .execute(request)
                .await
                .context("Failed to update collection manifest")?;

            let mut changed = readme.changed;
            changed.extend(collection.changed);
            ensure_up_to_date_if(*check, changed)?;
        }
        Commands::List { json } => {
            let generators = ListGeneratorsUseCase::new(scanner)
                .execute(DocsRequest::new(&cli.root, config))
                .await
                .context("Failed to collect generators")?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&generators)?);
            } else if generators.is_empty() {
                println!("No generators found.");
            } else {
                println!("Available generators:");
                for generator in &generators {
                    println!(
                        "  • {} ({}) - {} [{}]",
                        generator.title,
                        generator.id,
                        generator.summary(),
                        generator.schema_path()
                    );
                }
                println!("\nFound {} generator(s)", generators.len());
            }
        }
    }
    Ok(())
}

/// File configuration with CLI overrides applied
async fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::load(&cli.root, cli.config.as_deref()).await?;
    if let Some(readme) = &cli.readme {
        config.readme = readme.clone();
    }
    if let Some(collection) = &cli.collection {
        config.collection = collection.clone();
    }
    config.validate()?;
    info!(root = %display_root(&cli.root), "Using project root");
    Ok(config)
}

fn ensure_up_to_date_if(check: bool, changed: Vec<PathBuf>) -> anyhow::Result<()> {
    if check {
        ensure_up_to_date(changed)?;
    }
    Ok(())
}

fn display_root(root: &Path) -> String {
    std::path::absolute(root)
        .unwrap_or_else(|_| root.to_path_buf())
        .display()
        .to_string()
}
