mod board;
mod home;

use eframe::egui;
use tokio::sync::mpsc;

use common::log;

use crate::config::{ClientConfig, get_config_manager};
use crate::input::InputTracker;
use crate::state::{AppScreen, ClientCommand, CommandSender, MenuCommand, SharedState};

pub struct App {
    shared_state: SharedState,
    commands: CommandSender,
    config: ClientConfig,
    input: InputTracker,
}

impl App {
    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<ClientCommand>,
        config: ClientConfig,
    ) -> Self {
        Self {
            shared_state,
            commands: CommandSender::new(command_tx),
            config,
            input: InputTracker::new(),
        }
    }

    fn start_game(&mut self) {
        if let Err(e) = get_config_manager().set_config(&self.config) {
            log!("Failed to save config: {}", e);
        }
        self.input.reset();
        self.commands.send(ClientCommand::Menu(MenuCommand::StartGame {
            config: self.config.clone(),
        }));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let screen = self.shared_state.get_screen();

        egui::CentralPanel::default().show(ctx, |ui| match screen {
            AppScreen::Home => {
                if home::render_home(ui, &mut self.config) {
                    self.start_game();
                }
            }
            AppScreen::InGame { snapshot } => {
                board::render_game(
                    ui,
                    ctx,
                    &snapshot,
                    &self.config,
                    &mut self.input,
                    &self.commands,
                );
                // Poll for the next snapshot even without input events.
                ctx.request_repaint();
            }
        });
    }
}
