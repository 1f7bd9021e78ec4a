//! Gomoku GUI
//!
//! Play five-in-a-row against the computer.
//!
//! Settings are read from the TOML file named by `GOMOKU_CONFIG`, or from
//! `gomoku.toml` in the working directory. Log verbosity follows `RUST_LOG`.

use std::path::PathBuf;

use gomoku::ui::GomokuApp;
use gomoku::AppConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "GOMOKU_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "gomoku.toml";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = std::env::var_os(CONFIG_ENV).map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = AppConfig::load_or_default(&path)?;
    info!(
        board_size = config.engine.board_size,
        max_depth = config.engine.max_depth,
        "starting gomoku"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku - You vs AI"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, &config)))),
    )?;
    Ok(())
}
