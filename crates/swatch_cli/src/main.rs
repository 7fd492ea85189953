//! `swatch`: resolve themed component styles from the command line

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use swatch_components::StyleContext;
use swatch_core::{DeviceMetrics, ScaleResolver};
use swatch_theme::ThemePreset;
use tracing_subscriber::EnvFilter;

use crate::commands::Component;

#[derive(Parser)]
#[command(name = "swatch")]
#[command(author, version, about = "Resolve themed component styles")]
#[command(propagate_version = true)]
struct Cli {
    /// Built-in preset id (legacy-light, legacy-dark, current-light, current-dark)
    #[arg(long, env = "SWATCH_PRESET", global = true)]
    preset: Option<String>,

    /// Theme config file, or a directory containing swatch.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Device width in logical points
    #[arg(long, default_value_t = 350.0, global = true)]
    width: f32,

    /// Device height in logical points
    #[arg(long, default_value_t = 680.0, global = true)]
    height: f32,

    /// Physical pixels per logical point
    #[arg(long, default_value_t = 1.0, global = true)]
    pixel_ratio: f32,

    /// Output format
    #[arg(long, value_enum, default_value_t, global = true)]
    format: Format,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
enum Format {
    #[default]
    Json,
    Toml,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in presets
    Presets,

    /// Print the resolved theme's color roles
    Theme,

    /// Resolve one component style
    #[command(subcommand)]
    Style(Component),

    /// Write a starter swatch.toml
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("SWATCH_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print(value: &Value, format: Format) -> Result<()> {
    let rendered = match format {
        Format::Json => serde_json::to_string_pretty(value).context("Failed to render JSON")?,
        Format::Toml => {
            // TOML has no bare values or nulls
            let table = match value {
                Value::Null => return Ok(()),
                Value::Object(_) => value.clone(),
                other => serde_json::json!({ "value": other }),
            };
            toml::to_string_pretty(&table).context("Failed to render TOML")?
        }
    };
    println!("{rendered}");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Presets => {
            for preset in ThemePreset::all() {
                println!("{:<14} {}", preset.id(), preset.display_name());
            }
            Ok(())
        }
        Commands::Init { dir, force } => {
            let preset = match cli.preset.as_deref() {
                Some(id) => ThemePreset::from_id(id)
                    .with_context(|| format!("Unknown preset `{id}`"))?,
                None => swatch_theme::config::DEFAULT_PRESET,
            };
            let path = config::write_template(dir, preset, *force)?;
            println!("Created {}", path.display());
            Ok(())
        }
        Commands::Theme => {
            let theme = config::load_theme(cli.preset.as_deref(), cli.config.as_deref())?;
            let colors: serde_json::Map<String, Value> = theme
                .colors()
                .iter()
                .map(|(role, color)| {
                    let color = Value::from(color.to_canonical_string());
                    (role.name().to_string(), color)
                })
                .collect();
            let summary = serde_json::json!({
                "name": theme.name(),
                "schema": theme.schema().name(),
                "dark": theme.is_dark(),
                "roundness": theme.roundness(),
                "colors": colors,
            });
            print(&summary, cli.format)
        }
        Commands::Style(component) => {
            let theme = config::load_theme(cli.preset.as_deref(), cli.config.as_deref())?;
            let metrics = DeviceMetrics::new(cli.width, cli.height, cli.pixel_ratio)
                .context("Invalid device metrics")?;
            let scale = ScaleResolver::new(metrics);
            let cx = StyleContext::new(&theme, &scale);

            let style = commands::resolve(component, &cx)?;
            print(&style, cli.format)
        }
    }
}
