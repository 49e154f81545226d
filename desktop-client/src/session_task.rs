use common::log;
use common::session::{SessionCommand, SnakeSession};
use common::{GameSettings, GridSize};
use tokio::sync::mpsc;

use crate::config::ClientConfig;
use crate::sink::LocalSnapshotSink;
use crate::state::{AppScreen, ClientCommand, GameCommand, MenuCommand, SharedState};

/// Background task owning every game session. Lives for the whole
/// process; one iteration of the outer loop is one trip through a game.
pub async fn session_task(
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
) {
    loop {
        let Some(command) = command_rx.recv().await else {
            break;
        };

        if let ClientCommand::Menu(MenuCommand::StartGame { config }) = command {
            run_game(&shared_state, &mut command_rx, &config).await;
            shared_state.set_screen(AppScreen::Home);
        }
    }
}

async fn run_game(
    shared_state: &SharedState,
    command_rx: &mut mpsc::UnboundedReceiver<ClientCommand>,
    config: &ClientConfig,
) {
    let settings = GameSettings::new(
        GridSize::new(config.field_width as usize, config.field_height as usize),
        config.level,
    );
    if let Err(e) = settings.validate() {
        log!("Refusing to start game: {}", e);
        return;
    }

    let seed: u64 = rand::random();
    let (session, session_tx) = SnakeSession::new(settings, seed);

    shared_state.set_screen(AppScreen::InGame { snapshot: None });

    let sink = LocalSnapshotSink::new(shared_state.clone());
    let mut game_handle = tokio::spawn(session.run(sink));

    loop {
        tokio::select! {
            result = &mut game_handle => {
                if let Err(e) = result {
                    log!("Session task failed: {}", e);
                }
                return;
            }
            command = command_rx.recv() => {
                let Some(command) = command else {
                    // UI is gone; tear the session down with it.
                    let _ = session_tx.send(SessionCommand::Quit);
                    let _ = (&mut game_handle).await;
                    return;
                };

                match command {
                    ClientCommand::Game(GameCommand::Turn(direction)) => {
                        let _ = session_tx.send(SessionCommand::Turn(direction));
                    }
                    ClientCommand::Game(GameCommand::TogglePause) => {
                        let _ = session_tx.send(SessionCommand::TogglePause);
                    }
                    ClientCommand::Game(GameCommand::Restart) => {
                        let _ = session_tx.send(SessionCommand::Reset);
                    }
                    ClientCommand::Menu(MenuCommand::GoHome) => {
                        let _ = session_tx.send(SessionCommand::Quit);
                        let _ = (&mut game_handle).await;
                        return;
                    }
                    ClientCommand::Menu(MenuCommand::StartGame { .. }) => {}
                }
            }
        }
    }
}
