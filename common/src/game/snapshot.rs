use crate::grid::{GridSize, Point};

use super::state::GameState;
use super::types::{Direction, GameStatus};

/// Read-only copy of the board, published after every applied session
/// command. The renderer and the host UI only ever see these.
#[derive(Clone, Debug)]
pub struct BoardSnapshot {
    /// Body cells, head first.
    pub body: Vec<Point>,
    pub food: Option<Point>,
    pub direction: Direction,
    pub score: u32,
    pub status: GameStatus,
    pub grid: GridSize,
}

impl BoardSnapshot {
    pub fn of(state: &GameState) -> Self {
        Self {
            body: state.snake.body.iter().copied().collect(),
            food: state.food,
            direction: state.direction,
            score: state.score,
            status: state.status,
            grid: state.grid,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::Over
    }
}
