use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Cell};
use crate::config::{
    BASE_TICK_INTERVAL_MS, INITIAL_SNAKE_LENGTH, MIN_TICK_INTERVAL_MS, SPEEDUP_DELTA_MS,
    SPEEDUP_EVERY_FOOD,
};
use crate::input::Direction;
use crate::snake::Snake;

/// Current high-level gameplay state.
///
/// `GameOver` and `BoardFull` are terminal; only a reset leaves them.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
    BoardFull,
}

/// What ended a run.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Result of one `tick` call, for the event loop to act on.
///
/// The simulation does no I/O; persistence and clock re-arming happen in
/// the caller, driven by this value.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// Nothing happened: the game is paused or already over.
    Idle,
    /// The snake moved without eating.
    Moved,
    /// The snake ate; `interval_changed` is set when the speed ramp
    /// shortened the tick interval, so the clock must be re-armed.
    Ate { interval_changed: bool },
    /// Fatal collision.
    Died(DeathReason),
    /// The snake covered the whole board and nothing remains to eat.
    Won,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    pub score: u32,
    pub food_eaten: u32,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    tick_interval_ms: u64,
    board: Board,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh running game with an entropy-seeded RNG.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self::new_with_seed(board, rand::random())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(board: Board, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let snake = Snake::spawn_centered(board, INITIAL_SNAKE_LENGTH);
        let food = place_food(&mut rng, board, &snake);

        Self {
            snake,
            food,
            score: 0,
            food_eaten: 0,
            status: GameStatus::Running,
            death_reason: None,
            tick_interval_ms: BASE_TICK_INTERVAL_MS,
            board,
            rng,
        }
    }

    /// Starts a fresh run from any state: centered snake, new food, zero
    /// score, base interval, running.
    pub fn reset(&mut self) {
        self.snake = Snake::spawn_centered(self.board, INITIAL_SNAKE_LENGTH);
        self.food = place_food(&mut self.rng, self.board, &self.snake);
        self.score = 0;
        self.food_eaten = 0;
        self.status = GameStatus::Running;
        self.death_reason = None;
        self.tick_interval_ms = BASE_TICK_INTERVAL_MS;
    }

    /// Advances the simulation by one tick.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Idle;
        }

        self.snake.commit_intent();
        let candidate = self.snake.next_head();

        if !self.board.contains(candidate) {
            return self.die(DeathReason::WallCollision);
        }
        // The whole pre-move body counts as occupied, tail included, even
        // though the tail may vacate this very tick.
        if self.snake.occupies(candidate) {
            return self.die(DeathReason::SelfCollision);
        }

        self.snake.push_head(candidate);

        if candidate == self.food {
            self.score += 1;
            self.food_eaten += 1;
            let interval_changed = self.apply_speed_ramp();

            match self
                .board
                .random_free_cell(&mut self.rng, &self.snake.occupied_cells())
            {
                Some(cell) => {
                    self.food = cell;
                    TickOutcome::Ate { interval_changed }
                }
                None => {
                    self.status = GameStatus::BoardFull;
                    TickOutcome::Won
                }
            }
        } else {
            self.snake.pop_tail();
            TickOutcome::Moved
        }
    }

    /// Buffers a direction intent for the next tick.
    ///
    /// Accepted while running or paused; reversals of the current movement
    /// direction are silently rejected, and a later intent replaces an
    /// earlier unapplied one.
    pub fn set_direction_intent(&mut self, direction: Direction) {
        if matches!(self.status, GameStatus::Running | GameStatus::Paused) {
            self.snake.buffer_intent(direction);
        }
    }

    /// Toggles between Running and Paused. No effect once terminal.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            other => other,
        };
    }

    /// Returns true once the run has ended, by collision or a full board.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.status, GameStatus::GameOver | GameStatus::BoardFull)
    }

    /// Current tick interval.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Current tick interval in milliseconds.
    #[must_use]
    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    /// The play field.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    fn die(&mut self, reason: DeathReason) -> TickOutcome {
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
        TickOutcome::Died(reason)
    }

    /// Shortens the tick interval every `SPEEDUP_EVERY_FOOD` foods, floored
    /// at the minimum. Returns true when the interval actually changed.
    fn apply_speed_ramp(&mut self) -> bool {
        if self.food_eaten % SPEEDUP_EVERY_FOOD != 0 {
            return false;
        }

        let next = self
            .tick_interval_ms
            .saturating_sub(SPEEDUP_DELTA_MS)
            .max(MIN_TICK_INTERVAL_MS);
        let changed = next != self.tick_interval_ms;
        self.tick_interval_ms = next;
        changed
    }
}

/// Places food on a cell the snake does not occupy.
fn place_food<R: Rng + ?Sized>(rng: &mut R, board: Board, snake: &Snake) -> Cell {
    board
        .random_free_cell(rng, &snake.occupied_cells())
        .expect("a freshly spawned snake never covers the whole board")
}
