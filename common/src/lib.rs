pub mod config;
pub mod game;
pub mod grid;
pub mod logger;
pub mod session;
mod session_rng;

pub use game::{BoardSnapshot, Direction, GameSettings, GameState, GameStatus, Snake};
pub use grid::{GridSize, Point};
pub use session_rng::SessionRng;
