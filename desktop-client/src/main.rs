mod app;

use clap::Parser;
use eframe::egui;
use snake_engine::logger::init_logger;
use snake_engine::{GameConfig, GameEngine, InputRouter};

#[derive(Parser)]
#[command(name = "snake_client", about = "Desktop snake client")]
struct Args {
    /// Path to a YAML game config. Defaults apply when omitted.
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger(Some("snake".to_string()));

    let config = match &args.config {
        Some(path) => GameConfig::from_yaml_file(path)?,
        None => GameConfig::default(),
    };

    let engine = GameEngine::new(config.clone())?;
    let router = InputRouter::from_config(&config)?;

    let canvas_width = config.grid_width as f32 * app::CELL_PX;
    let canvas_height = config.grid_height as f32 * app::CELL_PX;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([canvas_width + 16.0, canvas_height + 80.0])
            .with_title("Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(|_cc| Ok(Box::new(app::SnakeApp::new(engine, router)))),
    )?;

    Ok(())
}
