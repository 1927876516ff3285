use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scene_forge::manifest::SceneManifest;
use scene_forge::pacing::{self, PatchMode};
use scene_forge::{emit, report};

#[derive(Parser)]
#[command(name = "sforge")]
#[command(about = "Generate narrated scene sources and lengthen their pacing")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble every manifest topic and write it into the scene directory
    Generate {
        /// Scene directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Manifest JSON to use instead of the built-in one
        #[arg(short, long)]
        manifest: Option<PathBuf>,
    },
    /// Lengthen wait literals in the manifest's patch targets
    Patch {
        /// Scene directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Manifest JSON to use instead of the built-in one
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the effective manifest as JSON
    Manifest {
        /// Manifest JSON to use instead of the built-in one
        #[arg(short, long)]
        manifest: Option<PathBuf>,
    },
}

/// Initialize tracing on stderr so stdout carries only the run summary
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "scene_forge=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::Generate { dir, manifest } => {
            let manifest = SceneManifest::load(manifest.as_deref())?;
            tracing::info!(
                "Generating {} scenes into {}",
                manifest.topics.len(),
                dir.display()
            );

            emit::emit_all(&manifest.topics, &dir, |written| {
                println!("{}", report::emit_line(written));
            })?;
            println!("{}", report::GENERATE_DONE);
        }
        Commands::Patch {
            dir,
            manifest,
            dry_run,
        } => {
            let manifest = SceneManifest::load(manifest.as_deref())?;
            let mode = if dry_run {
                PatchMode::DryRun
            } else {
                PatchMode::Write
            };

            pacing::patch_all(&dir, manifest.patch_targets.as_slice(), mode, |outcome| {
                println!("{}", report::patch_line(outcome));
            })?;
            println!("{}", report::PATCH_DONE);
        }
        Commands::Manifest { manifest } => {
            let manifest = SceneManifest::load(manifest.as_deref())?;
            println!("{}", manifest.to_json_pretty()?);
        }
    }

    Ok(())
}
