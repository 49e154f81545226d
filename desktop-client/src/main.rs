mod colors;
mod config;
mod input;
mod session_task;
mod sink;
mod state;
mod ui;

use clap::Parser;
use common::{log, logger};
use eframe::egui;
use tokio::sync::mpsc;

use config::{ClientConfig, get_config_manager, parse_level};
use session_task::session_task;
use state::SharedState;
use ui::App;

#[derive(Parser)]
#[command(name = "snake_arcade_client")]
struct Args {
    /// Snake color as a #rrggbb hex value.
    #[arg(long)]
    color: Option<String>,

    /// Difficulty: easy, medium, hard, very-hard, or a number from 1 to 10.
    #[arg(long)]
    level: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_logger();

    let mut config = get_config_manager().get_config().unwrap_or_else(|e| {
        log!("Falling back to default config: {}", e);
        ClientConfig::default()
    });

    if let Some(color) = args.color.as_deref() {
        if colors::parse_hex_color(color).is_some() {
            config.color = color.to_string();
        } else {
            log!("Ignoring unparseable --color {:?}", color);
        }
    }
    if let Some(level) = args.level.as_deref() {
        match parse_level(level) {
            Some(level) => config.level = level,
            None => log!("Ignoring unparseable --level {:?}", level),
        }
    }

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let shared_state_clone = shared_state.clone();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");
        rt.block_on(session_task(shared_state_clone, command_rx));
    });

    let window_width = (config.field_width * config.cell_size) as f32 + 60.0;
    let window_height = (config.field_height * config.cell_size) as f32 + 180.0;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window_width, window_height])
            .with_title("Snake Arcade"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake Arcade",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(shared_state, command_tx, config)))),
    )?;

    Ok(())
}
