//! Stroke Mnemonic CLI
//!
//! Replays recorded strokes, or synthesizes them, through a mnemonic
//! session and prints the resulting phrase.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stroke_mnemonic::{
    canvas::{FileConfig, MockCanvas, StrokeReplay, StrokeSource},
    metrics::{MetricsRegistry, MetricsSnapshot},
    session::MnemonicSession,
};
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "stroke-mnemonic", version, about = "Derive BIP39 mnemonics from drawn strokes")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the phrase as a terminal QR code.
    #[arg(long, global = true)]
    qr: bool,

    /// Print session metrics in Prometheus text format.
    #[arg(long, global = true)]
    metrics: bool,

    /// Log level (overridden by RUST_LOG).
    #[arg(long, global = true, default_value = "info")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay strokes from a JSON file.
    Generate {
        /// JSON array of strokes, each an array of points.
        #[arg(long)]
        input: PathBuf,
    },
    /// Draw synthetic strokes. Not a source of real entropy.
    Simulate {
        /// Seed for the synthetic stroke generator.
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Accepted strokes to collect.
        #[arg(long, default_value_t = 128)]
        strokes: usize,
        /// Give up after this many attempts.
        #[arg(long, default_value_t = 10_000)]
        max_attempts: usize,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(cli.log_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Stroke Mnemonic v{}", stroke_mnemonic::VERSION);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let mut session = MnemonicSession::from_config(&config)?;

    match cli.command {
        Command::Generate { input } => {
            let mut replay = StrokeReplay::from_file(&input)?;
            feed(&mut session, &mut replay, usize::MAX, usize::MAX)?;
        }
        Command::Simulate {
            seed,
            strokes,
            max_attempts,
        } => {
            warn!("Simulated strokes are deterministic; do not use the phrase for real funds");
            let mut canvas = MockCanvas::new(&config.canvas, seed)?;
            feed(&mut session, &mut canvas, strokes, max_attempts)?;
        }
    }

    let progress = session.progress();
    info!(
        accepted = progress.accepted,
        next = progress.next_threshold,
        words = progress.word_count,
        "{}",
        progress
    );

    let result = session.generate_mnemonic().await;

    if cli.metrics {
        let registry = MetricsRegistry::new()?;
        registry.update(&MetricsSnapshot::from_session(&session));
        print!("{}", registry.encode()?);
    }

    let phrase = result?;
    if let Some(report) = session.quality() {
        if let Some(warning) = &report.warning {
            warn!("Entropy quality warning: {}", warning);
        }
    }

    println!("{}", phrase);

    if cli.qr {
        match session.qr_image() {
            Some(image) => println!("{}", image.terminal()),
            None => warn!("No QR code available"),
        }
    }

    Ok(())
}

/// Feeds strokes until `target` are accepted, the source runs dry or
/// `max_attempts` strokes have been tried.
fn feed(
    session: &mut MnemonicSession,
    source: &mut dyn StrokeSource,
    target: usize,
    max_attempts: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut attempts = 0;

    while session.strokes().len() < target && attempts < max_attempts {
        let Some(points) = source.next_stroke()? else {
            break;
        };
        attempts += 1;

        session.on_stroke_started();
        match session.on_stroke_completed(points) {
            Ok(_) => {}
            Err(e) => warn!("Skipping stroke {}: {}", attempts, e),
        }
    }

    let counters = session.counters();
    info!(
        attempts,
        accepted = counters.strokes_accepted,
        rejected = counters.strokes_rejected,
        "Finished collecting strokes"
    );

    Ok(())
}
