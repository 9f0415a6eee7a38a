#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use seedbloom_core::GardenConfig;

/// Global garden config, set from command line
static GARDEN_CONFIG: OnceLock<GardenConfig> = OnceLock::new();

/// Get the garden config (loaded from --config or default)
pub fn get_garden_config() -> GardenConfig {
    GARDEN_CONFIG.get().cloned().unwrap_or_default()
}

/// Seed Bloom - plant a name, grow a flower
#[derive(Parser, Debug)]
#[command(name = "seedbloom-desktop")]
#[command(about = "Seed Bloom - an interactive greeting garden")]
struct Args {
    /// JSON file overriding garden timings and effect sizes
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 700.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn main() -> anyhow::Result<()> {
    seedbloom_core::logging::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GardenConfig::load(path)
            .with_context(|| format!("Failed to load garden config from {:?}", path))?,
        None => GardenConfig::default(),
    };
    config.viewport_width = args.width;

    let _ = GARDEN_CONFIG.set(config);

    tracing::info!("🌸 Seed of Purity 🌸 - made with love and care");
    tracing::info!("Easter egg: try clicking the flower center 3 times!");
    if let Ok(cores) = std::thread::available_parallelism() {
        if cores.get() < 4 {
            tracing::info!(cores = cores.get(), "Optimizing for lower-end device");
        }
    }

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Seed of Purity")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::try_parse_from(["seedbloom-desktop"]).unwrap();
        assert!(args.config.is_none());
        assert_eq!(args.width, 700.0);
        assert_eq!(args.height, 900.0);
    }

    #[test]
    fn test_config_and_size_args() {
        let args = Args::try_parse_from([
            "seedbloom-desktop",
            "--config",
            "garden.json",
            "--width",
            "1280",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("garden.json")));
        assert_eq!(args.width, 1280.0);
    }

    #[test]
    fn test_config_defaults_before_launch() {
        assert_eq!(get_garden_config().sparkle_count, 6);
    }
}
