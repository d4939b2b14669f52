use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::board::{Board, Cell};
use crate::config::{
    Theme, BORDER_HALF_BLOCK, GLYPH_FOOD, GLYPH_GRID_DOT, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD,
};
use crate::game::{GameState, GameStatus};
use crate::ui::controls::ControlBar;
use crate::ui::hud::{render_score_line, HudInfo};
use crate::ui::menu::{render_board_full_menu, render_game_over_menu, render_pause_menu};

/// Renders the full frame from immutable state.
///
/// Returns the control bar laid out for this frame so the event loop can
/// hit-test mouse clicks against what was actually drawn.
pub fn render(frame: &mut Frame<'_>, state: &GameState, info: HudInfo<'_>) -> ControlBar {
    let area = frame.area();
    let [play_outer, score_row, controls_row] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_score_line(frame, score_row, state, info);
    let control_bar = ControlBar::layout(controls_row);
    control_bar.render(frame, info.theme);

    let theme = info.theme;
    let side = state.board().side();
    let board_area = centered_fixed(play_outer, side.saturating_add(2), side.saturating_add(2));
    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg))
        .style(Style::new().bg(theme.play_bg));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_grid(frame, inner, state.board(), theme);
    render_food(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);

    match state.status {
        GameStatus::Paused => render_pause_menu(frame, board_area, theme),
        GameStatus::GameOver => render_game_over_menu(
            frame,
            board_area,
            state.score,
            info.prior_best,
            state.death_reason,
            theme,
        ),
        GameStatus::BoardFull => render_board_full_menu(frame, board_area, state.score, theme),
        GameStatus::Running => {}
    }

    control_bar
}

/// Marks every cell with a faint lattice dot; entities paint over it.
fn render_grid(frame: &mut Frame<'_>, inner: Rect, board: Board, theme: &Theme) {
    let style = Style::new().fg(theme.grid);
    let buffer = frame.buffer_mut();
    for y in 0..i32::from(board.side()) {
        for x in 0..i32::from(board.side()) {
            let Some((col, row)) = logical_to_terminal(inner, board, Cell { x, y }) else {
                continue;
            };
            buffer.set_string(col, row, GLYPH_GRID_DOT, style);
        }
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some((col, row)) = logical_to_terminal(inner, state.board(), state.food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(col, row, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let head = state.snake.head();

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((col, row)) = logical_to_terminal(inner, state.board(), *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                col,
                row,
                GLYPH_SNAKE_HEAD,
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(col, row, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
        }
    }
}

/// Maps a board cell to a terminal coordinate inside `inner`, clipping
/// cells that fall outside the board or the visible area.
fn logical_to_terminal(inner: Rect, board: Board, cell: Cell) -> Option<(u16, u16)> {
    if !board.contains(cell) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let col = inner.x.saturating_add(x_offset);
    let row = inner.y.saturating_add(y_offset);
    if col >= inner.right() || row >= inner.bottom() {
        return None;
    }

    Some((col, row))
}

fn centered_fixed(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
