//! bidr - BIDR log-color analysis harness
//!
//! Generates synthetic or literal RGB samples, runs them through the
//! chromaticity engine and prints JSON reports.

use anyhow::{Context, Result};
use bidr_core::EngineConfig;
use bidr_math::Vec3;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::parse_rgb;

#[derive(Parser)]
#[command(name = "bidr")]
#[command(author, version, about = "BIDR log-color analysis harness")]
#[command(long_about = "
Runs the Bi-illumination Dichromatic Reflection engine on synthetic or
literal RGB samples and prints a JSON report.

Examples:
  bidr plane                                 # Synthetic material cloud, seed 7
  bidr plane -n 500 --seed 42 -o plane.json
  bidr cylinder                              # Toy lit/shadow samples
  bidr isd --ambient 0.25,0.35,0.95 --direct 1,0.95,0.8
  bidr isd --lit 0.9,0.7,0.6 --shadow 0.45,0.42,0.54
  bidr curve --count 256                     # Linear vs log display curve
  bidr -vv --config engine.yaml plane
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Engine configuration (YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log clamp floor, overrides the configuration
    #[arg(long, global = true)]
    eps: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Project a synthetic single-material cloud onto its chromaticity plane
    #[command(visible_alias = "p")]
    Plane(PlaneArgs),

    /// ISD and shadow-to-lit trajectory of a few lit/shadow samples
    #[command(visible_alias = "cyl")]
    Cylinder(CylinderArgs),

    /// Estimate the ISD from illuminants or lit/shadow samples
    Isd(IsdArgs),

    /// Sample the linear and log display curves
    Curve(CurveArgs),
}

#[derive(Args)]
struct PlaneArgs {
    /// RNG seed
    #[arg(long, default_value = "7")]
    seed: u64,

    /// Number of samples
    #[arg(short = 'n', long = "count", default_value = "2000")]
    count: usize,

    /// Mean body reflectance R,G,B
    #[arg(long, default_value = "0.55,0.55,0.55", value_parser = parse_rgb)]
    reflectance: Vec3,

    /// Standard deviation of per-sample reflectance texture
    #[arg(long, default_value = "0.02")]
    texture_sigma: f64,

    /// Standard deviation of additive sensor noise
    #[arg(long, default_value = "0.002")]
    noise_sigma: f64,

    /// Ambient illuminant R,G,B
    #[arg(long, default_value = "0.25,0.35,0.95", value_parser = parse_rgb)]
    ambient: Vec3,

    /// Direct illuminant R,G,B
    #[arg(long, default_value = "1.0,0.95,0.8", value_parser = parse_rgb)]
    direct: Vec3,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct CylinderArgs {
    /// Lit sample R,G,B (repeatable)
    #[arg(
        long,
        value_parser = parse_rgb,
        default_values = ["0.9,0.7,0.6", "0.85,0.65,0.55", "0.8,0.6,0.5"]
    )]
    lit: Vec<Vec3>,

    /// Per-channel shadow/lit ratio applied to every lit sample
    #[arg(long, default_value = "0.5,0.6,0.9", value_parser = parse_rgb)]
    ratio: Vec3,

    /// Trajectory samples (default: from configuration)
    #[arg(short, long)]
    samples: Option<usize>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct IsdArgs {
    /// Ambient illuminant R,G,B
    #[arg(long, value_parser = parse_rgb, requires = "direct", conflicts_with_all = ["lit", "shadow"])]
    ambient: Option<Vec3>,

    /// Direct illuminant R,G,B
    #[arg(long, value_parser = parse_rgb, requires = "ambient")]
    direct: Option<Vec3>,

    /// Lit sample R,G,B (repeatable)
    #[arg(long, value_parser = parse_rgb)]
    lit: Vec<Vec3>,

    /// Shadow sample R,G,B (repeatable)
    #[arg(long, value_parser = parse_rgb)]
    shadow: Vec<Vec3>,

    /// Treat lit/shadow as independent clusters instead of index-aligned pairs
    #[arg(long)]
    clusters: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct CurveArgs {
    /// Number of curve samples over [0, 1]
    #[arg(short = 'n', long, default_value = "1000")]
    count: usize,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "bidr=warn",
        1 => "bidr=info,bidr_chroma=info",
        2 => "bidr=debug,bidr_chroma=debug",
        _ => "bidr=trace,bidr_chroma=trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
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

    let base = match cli.command {
        Commands::Curve(_) => EngineConfig::image(),
        _ => EngineConfig::synthetic(),
    };
    let config = commands::load_config(cli.config.as_deref(), cli.eps, base)?;

    match cli.command {
        Commands::Plane(args) => commands::plane::run(args, &config),
        Commands::Cylinder(args) => commands::cylinder::run(args, &config),
        Commands::Isd(args) => commands::isd::run(args, &config),
        Commands::Curve(args) => commands::curve::run(args, &config),
    }
}
