use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ciede2000::{Srgb8, SHARMA_2005};
use deltae::config::AppConfig;
use deltae::report::{self, Comparison, OutputFormat, VerifyReport};

#[derive(Parser)]
#[command(name = "deltae")]
#[command(about = "CIEDE2000 color difference between sRGB colors")]
struct Cli {
    /// YAML config file (falls back to $DELTAE_CONFIG, then defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute ΔE00 between two sRGB colors
    Compare {
        /// First color as three 0-255 channel values
        #[arg(long, num_args = 3, value_names = ["R", "G", "B"], required = true)]
        first: Vec<u8>,

        /// Second color as three 0-255 channel values
        #[arg(long, num_args = 3, value_names = ["R", "G", "B"], required = true)]
        second: Vec<u8>,
    },
    /// Print the CIELAB value of an sRGB color
    Lab {
        /// Color as three 0-255 channel values
        #[arg(num_args = 3, value_names = ["R", "G", "B"], required = true)]
        rgb: Vec<u8>,
    },
    /// Check the formula against the published CIEDE2000 test data
    Verify,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI; stderr keeps JSON on stdout clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deltae=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config_path = AppConfig::resolve_path(cli.config);
    let config = AppConfig::load(config_path.as_deref())?;

    match cli.command {
        Commands::Compare { first, second } => {
            run_compare_command(&first, &second, cli.format, &config)
        }
        Commands::Lab { rgb } => run_lab_command(&rgb, cli.format, &config),
        Commands::Verify => run_verify_command(cli.format, &config),
    }
}

fn to_srgb(channels: &[u8]) -> anyhow::Result<Srgb8> {
    let bytes: [u8; 3] = channels
        .try_into()
        .with_context(|| format!("expected 3 channel values, got {}", channels.len()))?;
    Ok(Srgb8::from_bytes(bytes))
}

fn run_compare_command(
    first: &[u8],
    second: &[u8],
    format: OutputFormat,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let first = to_srgb(first)?;
    let second = to_srgb(second)?;

    let comparison = Comparison::new(first, second, &config.thresholds);
    tracing::debug!(
        ?first,
        ?second,
        delta_e = comparison.delta_e,
        "Compared colors"
    );

    println!("{}", comparison.render(format, config.precision)?);
    Ok(())
}

fn run_lab_command(rgb: &[u8], format: OutputFormat, config: &AppConfig) -> anyhow::Result<()> {
    let color = to_srgb(rgb)?;
    println!("{}", report::render_color(color, format, config.precision)?);
    Ok(())
}

fn run_verify_command(format: OutputFormat, config: &AppConfig) -> anyhow::Result<()> {
    let report = VerifyReport::run(&SHARMA_2005, config.verify_tolerance);
    println!("{}", report.render(format, config.precision)?);
    report.into_result()?;
    Ok(())
}
