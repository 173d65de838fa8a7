pub mod cli;
pub mod error;
pub mod hashing;
pub mod instructions;
pub mod package;
pub mod preview;
pub mod report;

use std::fs;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Args;
use crate::package::Exporter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.verbose);

    tracing::info!("reading source file {}", args.input.display());
    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let extraction = drill_core::extract_nonempty(&content)
        .with_context(|| format!("no cards extracted from {}", args.input.display()))?;
    report::log_extraction(&extraction);

    let config = args.export_config();
    let images_dir = args.images_dir();
    let exporter = Exporter {
        output_dir: &args.output_dir,
        images_dir: &images_dir,
        config: &config,
    };

    for dialect in args.format.dialects() {
        tracing::info!(%dialect, "generating package");
        let outcome = exporter
            .export(dialect, &extraction.cards)
            .with_context(|| format!("failed to write {} package", dialect))?;

        if !outcome.assets.missing.is_empty() {
            tracing::warn!(
                %dialect,
                "{} referenced images were not found in {}",
                outcome.assets.missing.len(),
                images_dir.display()
            );
        }

        tracing::debug!(%dialect, files = outcome.files.len(), "package written");
        for file in &outcome.files {
            tracing::debug!("  {}", file.display());
        }

        if args.dump_cards {
            let dump = report::CardDump {
                dialect,
                config: &config,
                cards: drill_core::transform_all(&extraction.cards, dialect, &config),
                skipped: &extraction.skipped,
            };
            println!("{}", serde_json::to_string_pretty(&dump)?);
        }
    }

    tracing::info!("conversion complete, output files are in {}", args.output_dir.display());
    Ok(())
}
