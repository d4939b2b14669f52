use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::GameState;

/// Values shown by the HUD beyond the game state itself.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    /// Best score across sessions, live (already raised on a new record).
    pub best_score: u32,
    /// Best score as it stood before the current run ended; reference for
    /// the "new best" banner on the game-over overlay.
    pub prior_best: u32,
    pub theme: &'a Theme,
}

/// Renders the one-line score row: current score and best score.
pub fn render_score_line(frame: &mut Frame<'_>, area: Rect, state: &GameState, info: HudInfo<'_>) {
    let theme = info.theme;
    let label = Style::new().fg(theme.hud_fg);
    let value = Style::new()
        .fg(theme.hud_accent)
        .add_modifier(Modifier::BOLD);

    let line = Line::from(vec![
        Span::styled("Score ", label),
        Span::styled(state.score.to_string(), value),
        Span::styled("   Best ", label),
        Span::styled(info.best_score.to_string(), value),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
