use std::io;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event};

use gridsnake::board::Board;
use gridsnake::config::{self, BOARD_SIDE, Theme};
use gridsnake::game::{GameState, GameStatus, TickOutcome};
use gridsnake::input::{self, GameInput};
use gridsnake::renderer;
use gridsnake::scheduler::TickClock;
use gridsnake::score::{load_best_score, save_best_score};
use gridsnake::terminal_runtime::{AppTerminal, TerminalSession, install_panic_hook};
use gridsnake::ui::controls::ControlBar;
use gridsnake::ui::hud::HudInfo;

/// Poll timeout while no tick is scheduled (paused or game over).
const IDLE_POLL: Duration = Duration::from_millis(100);

#[derive(Debug, Parser)]
#[command(version, about = "Classic grid snake for the terminal")]
struct Cli {
    /// Seed the game RNG for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Color theme name.
    #[arg(long, default_value = "classic")]
    theme: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(theme) = config::theme_by_name(&cli.theme) else {
        eprintln!(
            "Unknown theme {:?}; available: {}",
            cli.theme,
            config::theme_names().join(", ")
        );
        return ExitCode::from(2);
    };

    let best_score = match load_best_score() {
        Ok(score) => score,
        Err(error) => {
            eprintln!("Ignoring unreadable score file: {error}");
            0
        }
    };

    install_panic_hook();

    match run_session(&cli, theme, best_score) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Terminal error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run_session(cli: &Cli, theme: &'static Theme, best_score: u32) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    run(session.terminal_mut(), cli.seed, theme, best_score)
}

fn run(
    terminal: &mut AppTerminal,
    seed: Option<u64>,
    theme: &'static Theme,
    mut best_score: u32,
) -> io::Result<()> {
    let board = Board::new(BOARD_SIDE);
    let mut state = match seed {
        Some(seed) => GameState::new_with_seed(board, seed),
        None => GameState::new(board),
    };

    let mut clock = TickClock::new();
    clock.arm(state.tick_interval(), Instant::now());
    let mut prior_best = best_score;
    let mut control_bar = ControlBar::empty();

    loop {
        terminal.draw(|frame| {
            control_bar = renderer::render(
                frame,
                &state,
                HudInfo {
                    best_score,
                    prior_best,
                    theme,
                },
            );
        })?;

        let timeout = clock.until_due(Instant::now()).unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            let game_input = match event::read()? {
                Event::Key(key) => input::map_key_event(key),
                Event::Mouse(mouse) => control_bar.hit(mouse),
                _ => None,
            };

            if let Some(game_input) = game_input {
                if matches!(game_input, GameInput::Quit) {
                    return Ok(());
                }
                handle_input(&mut state, &mut clock, &mut prior_best, best_score, game_input);
            }
        }

        if clock.fire_if_due(Instant::now()) {
            match state.tick() {
                TickOutcome::Ate { interval_changed } => {
                    if interval_changed {
                        clock.arm(state.tick_interval(), Instant::now());
                    }
                }
                TickOutcome::Died(_) | TickOutcome::Won => {
                    clock.cancel();
                    prior_best = best_score;
                    if state.score > best_score {
                        best_score = state.score;
                        if let Err(error) = save_best_score(best_score) {
                            eprintln!("Failed to save best score: {error}");
                        }
                    }
                }
                TickOutcome::Moved | TickOutcome::Idle => {}
            }
        }
    }
}

/// Routes one logical action into the simulation and keeps the clock in
/// step with the resulting state.
fn handle_input(
    state: &mut GameState,
    clock: &mut TickClock,
    prior_best: &mut u32,
    best_score: u32,
    game_input: GameInput,
) {
    match game_input {
        GameInput::Direction(direction) => state.set_direction_intent(direction),
        GameInput::TogglePause => {
            if !state.is_terminal() {
                state.toggle_pause();
                match state.status {
                    GameStatus::Paused => clock.cancel(),
                    GameStatus::Running => clock.arm(state.tick_interval(), Instant::now()),
                    GameStatus::GameOver | GameStatus::BoardFull => {}
                }
            }
        }
        GameInput::Restart => {
            if state.is_terminal() {
                state.reset();
                *prior_best = best_score;
                clock.arm(state.tick_interval(), Instant::now());
            }
        }
        GameInput::Quit => {}
    }
}
