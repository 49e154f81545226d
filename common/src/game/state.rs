use crate::grid::{GridSize, Point};
use crate::log;
use crate::session_rng::SessionRng;

use super::settings::GameSettings;
use super::snake::Snake;
use super::types::{Direction, GameStatus};

const FOOD_PLACEMENT_ATTEMPTS: usize = 100;

const START_DIRECTION: Direction = Direction::Right;

/// The whole game board. Mutated only through the session command loop;
/// everything else sees read-only snapshots.
#[derive(Clone, Debug)]
pub struct GameState {
    pub snake: Snake,
    /// `None` only once the snake covers the entire grid.
    pub food: Option<Point>,
    pub grid: GridSize,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
    pub score: u32,
    pub status: GameStatus,
}

impl GameState {
    pub fn new(settings: &GameSettings, rng: &mut SessionRng) -> Self {
        let grid = settings.grid;
        let snake = Snake::new(grid.center());
        let food = place_food(&snake, grid, rng);

        Self {
            snake,
            food,
            grid,
            direction: START_DIRECTION,
            pending_direction: None,
            score: 0,
            status: GameStatus::Running,
        }
    }

    /// Queues a direction change for the next tick. Reversals of the
    /// committed direction are dropped here and again when the tick
    /// consumes the queue, so a reversal can never slip through.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if self.status != GameStatus::Running {
            return;
        }
        if direction.is_opposite(&self.direction) {
            return;
        }
        self.pending_direction = Some(direction);
    }

    pub fn pause(&mut self) {
        if self.status == GameStatus::Running {
            self.status = GameStatus::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.status == GameStatus::Paused {
            self.status = GameStatus::Running;
        }
    }

    /// One discrete game step: commit the pending direction, move the
    /// head across the torus, then resolve collision or growth.
    pub fn apply_tick(&mut self, rng: &mut SessionRng) {
        if self.status != GameStatus::Running {
            return;
        }

        if let Some(pending) = self.pending_direction.take()
            && !pending.is_opposite(&self.direction)
        {
            self.direction = pending;
        }

        let next_head = self.next_head_position();

        if self.snake.contains(next_head) {
            self.status = GameStatus::Over;
            log!(
                "Game over: self collision at ({}, {}), score {}",
                next_head.x,
                next_head.y,
                self.score
            );
            return;
        }

        self.snake.push_head(next_head);

        if self.food == Some(next_head) {
            self.score += 1;
            log!(
                "Ate food at ({}, {}). Score: {}",
                next_head.x,
                next_head.y,
                self.score
            );
            self.food = place_food(&self.snake, self.grid, rng);
            if self.food.is_none() {
                self.status = GameStatus::Won;
                log!("Board filled, won with score {}", self.score);
            }
        } else {
            self.snake.drop_tail();
        }
    }

    fn next_head_position(&self) -> Point {
        let head = self.snake.head();
        match self.direction {
            Direction::Up => Point::new(head.x, GridSize::wrapping_dec(head.y, self.grid.height)),
            Direction::Down => Point::new(head.x, GridSize::wrapping_inc(head.y, self.grid.height)),
            Direction::Left => Point::new(GridSize::wrapping_dec(head.x, self.grid.width), head.y),
            Direction::Right => Point::new(GridSize::wrapping_inc(head.x, self.grid.width), head.y),
        }
    }
}

/// Picks a food cell outside the snake body. Random placement is retried a
/// bounded number of times, then a scan takes over on dense boards. Returns
/// `None` only when no free cell exists.
fn place_food(snake: &Snake, grid: GridSize, rng: &mut SessionRng) -> Option<Point> {
    for _ in 0..FOOD_PLACEMENT_ATTEMPTS {
        let pos = grid.random_cell(rng);
        if !snake.contains(pos) {
            return Some(pos);
        }
    }

    for y in 0..grid.height {
        for x in 0..grid.width {
            let pos = Point::new(x, y);
            if !snake.contains(pos) {
                return Some(pos);
            }
        }
    }

    None
}
