use tokio::sync::mpsc;

use crate::game::{BoardSnapshot, Direction, GameSettings, GameState, GameStatus};
use crate::log;
use crate::session_rng::SessionRng;

use super::scheduler::TickScheduler;

/// Everything that can change the game, serialized into one stream so a
/// tick is never interleaved with a steering or pause command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Tick,
    Turn(Direction),
    TogglePause,
    Reset,
    Quit,
}

/// Receives a snapshot after every applied command. The desktop client's
/// sink stores it for the next frame.
pub trait SnapshotSink: Send + 'static {
    fn publish(&self, snapshot: BoardSnapshot);
}

/// One game from start until quit. Owns the state, the RNG and the tick
/// scheduler; pause stops the scheduler, resume and reset restart it.
pub struct SnakeSession {
    state: GameState,
    rng: SessionRng,
    settings: GameSettings,
    scheduler: TickScheduler,
    command_tx: mpsc::UnboundedSender<SessionCommand>,
    command_rx: mpsc::UnboundedReceiver<SessionCommand>,
}

impl SnakeSession {
    pub fn new(
        settings: GameSettings,
        seed: u64,
    ) -> (Self, mpsc::UnboundedSender<SessionCommand>) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let mut rng = SessionRng::new(seed);
        let state = GameState::new(&settings, &mut rng);

        let session = Self {
            state,
            rng,
            settings,
            scheduler: TickScheduler::new(),
            command_tx: command_tx.clone(),
            command_rx,
        };
        (session, command_tx)
    }

    pub async fn run<S: SnapshotSink>(mut self, sink: S) {
        log!("Session started, seed {}", self.rng.seed());
        self.scheduler
            .start(self.settings.tick_interval(), self.command_tx.clone());
        sink.publish(BoardSnapshot::of(&self.state));

        while let Some(command) = self.command_rx.recv().await {
            match command {
                SessionCommand::Tick => {
                    self.state.apply_tick(&mut self.rng);
                    if self.state.status.is_terminal() {
                        self.scheduler.stop();
                    }
                }
                SessionCommand::Turn(direction) => {
                    self.state.set_pending_direction(direction);
                }
                SessionCommand::TogglePause => self.toggle_pause(),
                SessionCommand::Reset => self.reset(),
                SessionCommand::Quit => break,
            }
            sink.publish(BoardSnapshot::of(&self.state));
        }

        self.scheduler.stop();
        log!("Session ended, final score {}", self.state.score);
    }

    fn toggle_pause(&mut self) {
        match self.state.status {
            GameStatus::Running => {
                self.state.pause();
                self.scheduler.stop();
            }
            GameStatus::Paused => {
                self.state.resume();
                self.scheduler
                    .start(self.settings.tick_interval(), self.command_tx.clone());
            }
            GameStatus::Over | GameStatus::Won => {}
        }
    }

    fn reset(&mut self) {
        self.state = GameState::new(&self.settings, &mut self.rng);
        self.scheduler
            .start(self.settings.tick_interval(), self.command_tx.clone());
        log!("Session reset");
    }
}
