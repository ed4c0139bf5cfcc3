use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use appiconset::models::Origin;
use appiconset::{IconsetConfig, IconsetPipeline, WriteOptions};

#[derive(Parser)]
#[command(name = "appiconset")]
#[command(about = "Extract an ICNS file into an Xcode AppIcon.appiconset directory")]
struct Cli {
    /// Path to the ICNS file
    icns_file: PathBuf,

    /// Directory where the extracted files will be saved
    #[arg(required_unless_present = "list")]
    output_dir: Option<PathBuf>,

    /// Losslessly re-compress every PNG (slower, smaller files)
    #[arg(long)]
    optimize: bool,

    /// Exit with an error if a required size could not be produced
    #[arg(long)]
    strict: bool,

    /// Show what is in the container and what would be synthesized, then exit
    #[arg(long)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "appiconset=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let pipeline = IconsetPipeline::new(IconsetConfig::macos()).options(WriteOptions {
        optimize: cli.optimize,
    });

    if cli.list {
        return run_list_command(&pipeline, &cli.icns_file);
    }

    let Some(output_dir) = cli.output_dir.as_deref() else {
        anyhow::bail!("OUTPUT_DIR is required unless --list is given");
    };

    let report = pipeline
        .run(&cli.icns_file, output_dir)
        .with_context(|| format!("Failed to convert {}", cli.icns_file.display()))?;

    println!(
        "Extracted images and created manifest at {}",
        report.output_dir.display()
    );

    if cli.strict && !report.is_complete() {
        let missing: Vec<_> = report.gaps.iter().map(|g| g.required.to_string()).collect();
        anyhow::bail!("Missing required sizes: {}", missing.join(", "));
    }

    Ok(())
}

/// Print the inventory and the resolution plan without writing anything
fn run_list_command(pipeline: &IconsetPipeline, icns_file: &Path) -> anyhow::Result<()> {
    let (inventory, plan) = pipeline
        .plan(icns_file)
        .with_context(|| format!("Failed to read {}", icns_file.display()))?;
    let config = pipeline.config();

    println!("Native variants ({}):", inventory.len());
    for key in inventory.keys() {
        println!("  {:<24} {:?}", config.filename(key), Origin::Native);
    }

    println!("\nSynthesized ({}):", plan.synthesize.len());
    for step in &plan.synthesize {
        println!(
            "  {:<24} from {}",
            config.filename(step.target),
            config.filename(step.source)
        );
    }

    if !plan.gaps.is_empty() {
        println!("\nMissing ({}):", plan.gaps.len());
        for gap in &plan.gaps {
            println!("  {:<24} {gap}", config.filename(gap.required));
        }
    }

    Ok(())
}
