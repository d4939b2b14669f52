use gridsnake::board::{Board, Cell};
use gridsnake::config::BASE_TICK_INTERVAL_MS;
use gridsnake::game::{DeathReason, GameState, GameStatus, TickOutcome};
use gridsnake::input::Direction;
use gridsnake::snake::Snake;

fn row_snake() -> Snake {
    Snake::from_segments(
        vec![
            Cell { x: 6, y: 10 },
            Cell { x: 5, y: 10 },
            Cell { x: 4, y: 10 },
            Cell { x: 3, y: 10 },
        ],
        Direction::Right,
    )
}

#[test]
fn a_plain_move_shifts_the_body_by_one_cell() {
    let mut state = GameState::new_with_seed(Board::new(20), 42);
    state.snake = row_snake();
    state.food = Cell { x: 0, y: 0 };

    assert_eq!(state.tick(), TickOutcome::Moved);

    let segments: Vec<Cell> = state.snake.segments().copied().collect();
    assert_eq!(
        segments,
        vec![
            Cell { x: 7, y: 10 },
            Cell { x: 6, y: 10 },
            Cell { x: 5, y: 10 },
            Cell { x: 4, y: 10 },
        ]
    );
    assert_eq!(state.score, 0);
}

#[test]
fn eating_keeps_the_tail_and_scores_one() {
    let mut state = GameState::new_with_seed(Board::new(20), 42);
    state.snake = row_snake();
    state.food = Cell { x: 7, y: 10 };

    assert_eq!(
        state.tick(),
        TickOutcome::Ate {
            interval_changed: false
        }
    );

    let segments: Vec<Cell> = state.snake.segments().copied().collect();
    assert_eq!(
        segments,
        vec![
            Cell { x: 7, y: 10 },
            Cell { x: 6, y: 10 },
            Cell { x: 5, y: 10 },
            Cell { x: 4, y: 10 },
            Cell { x: 3, y: 10 },
        ]
    );
    assert_eq!(state.score, 1);
    assert_eq!(state.food_eaten, 1);
    assert_eq!(state.tick_interval_ms(), BASE_TICK_INTERVAL_MS);
    assert!(!state.snake.occupies(state.food));
}

#[test]
fn stepwise_run_ends_at_the_wall_and_restarts_clean() {
    let mut state = GameState::new_with_seed(Board::new(20), 42);
    state.snake = row_snake();
    state.food = Cell { x: 7, y: 10 };

    assert_eq!(
        state.tick(),
        TickOutcome::Ate {
            interval_changed: false
        }
    );
    state.food = Cell { x: 0, y: 19 };

    // Steer up; the intent commits at the start of the next tick.
    state.set_direction_intent(Direction::Up);
    for expected_y in (0..=9).rev() {
        assert_eq!(state.tick(), TickOutcome::Moved);
        assert_eq!(state.snake.head(), Cell { x: 7, y: expected_y });
    }

    // The next step leaves the board.
    assert_eq!(state.tick(), TickOutcome::Died(DeathReason::WallCollision));
    assert_eq!(state.status, GameStatus::GameOver);
    assert!(state.is_terminal());
    let final_score = state.score;
    assert_eq!(final_score, 1);

    // Further ticks change nothing.
    assert_eq!(state.tick(), TickOutcome::Idle);

    state.reset();
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.score, 0);
    assert_eq!(state.tick_interval_ms(), BASE_TICK_INTERVAL_MS);
    assert_eq!(state.death_reason, None);
    assert!(!state.snake.occupies(state.food));
}
