mod settings;
mod snake;
mod snapshot;
mod state;
mod types;

pub use settings::{BASE_TICK_INTERVAL_MS, GameSettings};
pub use snake::Snake;
pub use snapshot::BoardSnapshot;
pub use state::GameState;
pub use types::{Direction, GameStatus};
