use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shadescope::models::{AppConfig, RegionConfig};
use shadescope::services::{AnalysisOptions, AnalysisService};
use tone_engine::Lab;

#[derive(Parser)]
#[command(name = "shadescope")]
#[command(about = "Photo focus check, color features and shade-guide matching")]
struct Cli {
    /// Config file (defaults to $SHADESCOPE_CONFIG)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a PNG photo
    Analyze {
        /// Input PNG file
        image: PathBuf,

        /// Analysis rectangle as x,y,width,height
        #[arg(short, long)]
        region: Option<RegionConfig>,

        /// Never match bleached shades
        #[arg(long)]
        exclude_bleached: bool,

        /// Reference guide ("vita" or a guide from the config)
        #[arg(short, long)]
        guide: Option<String>,
    },
    /// Match a CIE Lab color against the guide
    #[command(allow_negative_numbers = true)]
    Match {
        l: f32,
        a: f32,
        b: f32,

        /// Never match bleached shades
        #[arg(long)]
        exclude_bleached: bool,

        #[arg(short, long)]
        guide: Option<String>,
    },
    /// Brightness steps from one shade to another (positive = brighter)
    Steps {
        from: String,
        to: String,

        #[arg(short, long)]
        guide: Option<String>,
    },
    /// List guide entries, brightest first
    Shades {
        #[arg(short, long)]
        guide: Option<String>,
    },
    /// Show color-space features of a hex color (e.g. "#E8D9B5")
    Convert { hex: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shadescope=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = AppConfig::load(cli.config.as_deref());
    let service = AnalysisService::new(config)?;

    match cli.command {
        Commands::Analyze {
            image,
            region,
            exclude_bleached,
            guide,
        } => {
            let options = AnalysisOptions {
                region,
                exclude_bleached,
                guide,
            };
            let report = service.analyze_file(&image, &options)?;
            print_json(&report, cli.pretty)
        }
        Commands::Match {
            l,
            a,
            b,
            exclude_bleached,
            guide,
        } => {
            let options = AnalysisOptions {
                region: None,
                exclude_bleached,
                guide,
            };
            let report = service.match_lab(Lab::new(l, a, b), &options)?;
            print_json(&report, cli.pretty)
        }
        Commands::Steps { from, to, guide } => {
            let report = service.shade_steps(&from, &to, guide.as_deref())?;
            print_json(&report, cli.pretty)
        }
        Commands::Shades { guide } => {
            let shades = service.list_shades(guide.as_deref())?;
            print_json(&shades, cli.pretty)
        }
        Commands::Convert { hex } => {
            let report = AnalysisService::convert(&hex)?;
            print_json(&report, cli.pretty)
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
