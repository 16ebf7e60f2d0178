// m3utrim - IPTV playlist reducer
// Takes a bloated provider list and keeps a bounded, deduplicated subset:
// a few HD channels per category, capped overall

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use m3utrim::{
    config::Config,
    playlist::{self, Selector},
    report::ReductionReport,
};

#[derive(Parser)]
#[command(name = "m3utrim")]
#[command(about = "Reduce an oversized IPTV playlist to a bounded, deduplicated subset")]
struct Args {
    /// Playlist to reduce (defaults to the configured input path)
    input: Option<PathBuf>,

    /// Where to write the reduced playlist (defaults to the configured output path)
    output: Option<PathBuf>,

    /// Use this config file instead of the per-user one
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured global channel cap
    #[arg(long)]
    cap: Option<usize>,

    /// Also write the run summary as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Enable developer logging (stderr + debug output)
    #[arg(long)]
    dev: bool,
}

fn init_logging(dev: bool) -> Result<()> {
    // Create logs directory in project root
    let log_dir = PathBuf::from("logs");
    std::fs::create_dir_all(&log_dir)?;

    // Daily rotating file appender
    let file_appender = tracing_appender::rolling::daily(&log_dir, "m3utrim.log");
    let (file_writer, _guard) = tracing_appender::non_blocking(file_appender);

    // Base filter: info level for general logs, debug for m3utrim
    let base_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,m3utrim=debug"));

    let subscriber = tracing_subscriber::fmt()
        .with_writer(file_writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_env_filter(base_filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    if dev {
        eprintln!("🔧 Dev mode: Debug output enabled to stderr + file");
    }

    // Prevent the guard from being dropped
    std::mem::forget(_guard);

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.dev)?;

    info!("📺 m3utrim starting up");

    // Load config - falls back to defaults if missing
    let config = Config::load_from(args.config.as_deref())?;

    let input_path = args.input.unwrap_or_else(|| config.input_path.clone());
    let output_path = args.output.unwrap_or_else(|| config.output_path.clone());
    let global_cap = args.cap.unwrap_or(config.global_cap);
    debug!(
        "Reducing {} -> {} (cap {})",
        input_path.display(),
        output_path.display(),
        global_cap
    );

    println!("Processing playlist {}...", input_path.display());
    let lines = playlist::source::read_lines(&input_path)?;
    println!("Total lines: {}", lines.len());

    let selector = Selector::new(config.categories, global_cap);
    let reduction = selector.reduce(&lines);

    let output_bytes = playlist::source::write_lines(&output_path, &reduction.lines)?;

    let report = ReductionReport::new(&reduction.counts, reduction.total, output_bytes);
    println!("\n{}", report.render());
    println!("Saved to {}", output_path.display());

    if let Some(json_path) = args.json {
        std::fs::write(&json_path, report.to_json()?)?;
        info!("JSON report written to {}", json_path.display());
    }

    Ok(())
}
