//! ink - hue/saturation recoloring for stroke documents
//!
//! Reads JSON stroke documents, applies the Hue/Saturation modifier and
//! writes the result.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "ink")]
#[command(author, version, about = "Hue/saturation recoloring for ink stroke documents")]
#[command(long_about = "
Applies HSV offsets to the fill and vertex colors of ink strokes.

HSV values are absolute targets; 0.5 hue, 1.0 saturation, 1.0 value is no change.

Examples:
  ink info drawing.json                       # Layer/stroke summary
  ink hue drawing.json -o out.json --hue 0.6  # Shift hue by +0.1
  ink hue drawing.json -o out.json --preset warm.yaml --mode fill
  ink hue drawing.json -o out.json --saturation 0.5 --layer Lines --invert-layer
  ink batch -i 'shots/*.json' -o graded/ --value 0.8
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (repeat for more detail)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Display document information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Apply the Hue/Saturation modifier to a document
    Hue(HueArgs),

    /// Apply the Hue/Saturation modifier to many documents
    Batch(BatchArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Input document(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Show per-layer details
    #[arg(short, long)]
    all: bool,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

/// Hue/Saturation parameters shared by `hue` and `batch`.
#[derive(Args, Clone, Default)]
struct AdjustArgs {
    /// YAML preset; flags below override its values
    #[arg(short, long)]
    preset: Option<PathBuf>,

    /// Hue target (0.5 = no change)
    #[arg(long)]
    hue: Option<f32>,

    /// Saturation target (1.0 = no change)
    #[arg(short, long)]
    saturation: Option<f32>,

    /// Value target (1.0 = no change)
    #[arg(long)]
    value: Option<f32>,

    /// Colors to modify: stroke, fill, both
    #[arg(short, long)]
    mode: Option<String>,

    /// Only affect this layer
    #[arg(long)]
    layer: Option<String>,

    /// Only affect this material
    #[arg(long)]
    material: Option<String>,

    /// Only affect strokes with this pass index
    #[arg(long)]
    pass: Option<u32>,

    /// Only affect layers with this pass index
    #[arg(long)]
    layer_pass: Option<u32>,

    /// Invert the layer filter
    #[arg(long)]
    invert_layer: bool,

    /// Invert the material filter
    #[arg(long)]
    invert_material: bool,

    /// Invert the pass filter
    #[arg(long)]
    invert_pass: bool,

    /// Invert the layer pass filter
    #[arg(long)]
    invert_layer_pass: bool,
}

#[derive(Args)]
struct HueArgs {
    /// Input document
    input: PathBuf,

    /// Output document
    #[arg(short, long)]
    output: PathBuf,

    #[command(flatten)]
    adjust: AdjustArgs,

    /// Process strokes on a single thread
    #[arg(long)]
    sequential: bool,
}

#[derive(Args)]
struct BatchArgs {
    /// Input pattern (glob)
    #[arg(short, long)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: PathBuf,

    #[command(flatten)]
    adjust: AdjustArgs,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Hue(args) => commands::hue::run(args, cli.verbose),
        Commands::Batch(args) => commands::batch::run(args, cli.verbose),
    }
}
