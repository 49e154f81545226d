use std::sync::{Arc, Mutex};

use common::{BoardSnapshot, Direction, log};
use tokio::sync::mpsc;

use crate::config::ClientConfig;

#[derive(Debug)]
pub enum ClientCommand {
    Menu(MenuCommand),
    Game(GameCommand),
}

#[derive(Debug)]
pub enum MenuCommand {
    StartGame { config: ClientConfig },
    GoHome,
}

#[derive(Debug)]
pub enum GameCommand {
    Turn(Direction),
    TogglePause,
    Restart,
}

#[derive(Clone, Debug)]
pub enum AppScreen {
    Home,
    InGame { snapshot: Option<BoardSnapshot> },
}

/// Screen state shared between the egui thread and the session task.
#[derive(Clone)]
pub struct SharedState {
    screen: Arc<Mutex<AppScreen>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            screen: Arc::new(Mutex::new(AppScreen::Home)),
        }
    }

    pub fn get_screen(&self) -> AppScreen {
        self.screen.lock().unwrap().clone()
    }

    pub fn set_screen(&self, screen: AppScreen) {
        *self.screen.lock().unwrap() = screen;
    }

    /// Stores the latest board snapshot. Ignored outside a game so a
    /// straggling publish cannot resurrect a torn-down session.
    pub fn set_snapshot(&self, snapshot: BoardSnapshot) {
        let mut screen = self.screen.lock().unwrap();
        if let AppScreen::InGame { snapshot: current } = &mut *screen {
            *current = Some(snapshot);
        }
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

/// UI-side handle for the session task's command channel.
#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<ClientCommand>,
}

impl CommandSender {
    pub fn new(tx: mpsc::UnboundedSender<ClientCommand>) -> Self {
        Self { tx }
    }

    pub fn send(&self, command: ClientCommand) {
        if self.tx.send(command).is_err() {
            log!("Session task is gone, dropping command");
        }
    }
}
