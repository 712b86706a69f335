use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use pixel_diff::{severity_of, ComparisonMode};
use visidiff::logging;
use visidiff::models::AppConfig;
use visidiff::rendering::write_canvas_png;
use visidiff::services::{ComparisonService, FileLoader};

#[derive(Parser)]
#[command(name = "visidiff")]
#[command(about = "Pixel-level visual diff of two images")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two PNG images and report what changed
    Compare {
        /// The earlier image
        before: String,

        /// The later image
        after: String,

        /// Write the diff canvas to this PNG file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Comparison mode: "binary" or "heatmap" (overrides config)
        #[arg(short, long)]
        mode: Option<ComparisonMode>,

        /// Heatmap noise threshold, 0.0 to 1.0 (overrides config)
        #[arg(short, long)]
        threshold: Option<f32>,

        /// Print the report as JSON instead of a summary line
        #[arg(long)]
        json: bool,

        /// YAML config file (falls back to CONFIG_FILE)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the severity label for a changed-pixel percentage
    Severity {
        /// Percentage of changed pixels, e.g. 2.5
        percent: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Compare {
            before,
            after,
            output,
            mode,
            threshold,
            json,
            config,
        }) => {
            run_compare_command(
                &before,
                &after,
                output.as_deref(),
                mode,
                threshold,
                json,
                config,
            )
            .await
        }
        Some(Commands::Severity { percent }) => run_severity_command(percent),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Load both images, compare them and print the report
async fn run_compare_command(
    before: &str,
    after: &str,
    output: Option<&Path>,
    mode: Option<ComparisonMode>,
    threshold: Option<f32>,
    json: bool,
    config_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    // JSON output stays clean on stdout; logs go to stderr either way
    logging::init(if json { "visidiff=warn" } else { "visidiff=info" });

    let config_path = config_path.or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));
    let mut config = AppConfig::load(config_path.as_deref());
    if let Some(mode) = mode {
        config.mode = mode;
    }
    if let Some(threshold) = threshold {
        config.heatmap = config.heatmap.threshold(threshold);
    }

    let service = ComparisonService::from_config(Arc::new(FileLoader::new()), &config);
    let comparison = service.compare_locators(before, after).await?;

    if let Some(path) = output {
        write_canvas_png(&comparison.canvas, path)?;
    }

    if json {
        println!("{}", comparison.report.to_json()?);
    } else {
        println!("{}", comparison.report);
    }

    Ok(())
}

fn run_severity_command(percent: f64) -> anyhow::Result<()> {
    if !(0.0..=100.0).contains(&percent) {
        anyhow::bail!("Percentage must be between 0 and 100, got {percent}");
    }
    println!("{}", severity_of(percent));
    Ok(())
}

/// Show version, environment and usage
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Surfaces config read/parse warnings
    logging::init("visidiff=warn");

    let config_file = std::env::var("CONFIG_FILE").ok();
    let config = AppConfig::load(config_file.as_deref().map(Path::new));

    println!("Visidiff v{VERSION} - pixel-level visual diff\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG    = {}",
        std::env::var("RUST_LOG")
            .as_deref()
            .unwrap_or("visidiff=info (default)")
    );

    println!("\nEffective Settings:");
    println!("  mode              = {}", config.mode);
    println!("  load_timeout_secs = {}", config.load_timeout_secs);
    println!("  heatmap.threshold = {}", config.heatmap.threshold);
    println!("  heatmap.dim       = {}", config.heatmap.dim);
    println!("  heatmap.boost     = {}", config.heatmap.boost);

    println!("\nUsage:");
    println!("  visidiff compare <BEFORE> <AFTER> [-o diff.png] [--mode binary|heatmap]");
    println!("                   [--threshold F] [--json] [--config PATH]");
    println!("  visidiff severity <PERCENT>");
    println!("\nRun 'visidiff --help' for details.");
}
