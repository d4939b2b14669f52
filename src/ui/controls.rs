use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::input::{Direction, GameInput};

/// One on-screen control and the action it triggers.
#[derive(Debug, Clone, Copy)]
struct Control {
    label: &'static str,
    input: GameInput,
}

/// The six controls, in display order.
const CONTROLS: [Control; 6] = [
    Control {
        label: "[◀]",
        input: GameInput::Direction(Direction::Left),
    },
    Control {
        label: "[▲]",
        input: GameInput::Direction(Direction::Up),
    },
    Control {
        label: "[▼]",
        input: GameInput::Direction(Direction::Down),
    },
    Control {
        label: "[▶]",
        input: GameInput::Direction(Direction::Right),
    },
    Control {
        label: "[Pause]",
        input: GameInput::TogglePause,
    },
    Control {
        label: "[Restart]",
        input: GameInput::Restart,
    },
];

const BUTTON_GAP: u16 = 2;

/// Screen placement of the on-screen controls for one rendered frame.
///
/// Rendering and mouse hit-testing consume the same rects, so a click
/// always resolves against exactly what was drawn.
#[derive(Debug, Clone, Default)]
pub struct ControlBar {
    buttons: Vec<(Rect, Control)>,
}

impl ControlBar {
    /// A bar with no controls; clicks resolve to nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Lays the controls out in a single centered row inside `area`.
    /// Controls that do not fit a narrow terminal are dropped from the end.
    #[must_use]
    pub fn layout(area: Rect) -> Self {
        if area.height == 0 {
            return Self::empty();
        }

        let total: u16 = CONTROLS
            .iter()
            .map(|control| label_width(control.label) + BUTTON_GAP)
            .sum::<u16>()
            .saturating_sub(BUTTON_GAP);

        let mut x = area.x + area.width.saturating_sub(total) / 2;
        let mut buttons = Vec::with_capacity(CONTROLS.len());
        for control in CONTROLS {
            let width = label_width(control.label);
            if x + width > area.right() {
                break;
            }
            buttons.push((Rect::new(x, area.y, width, 1), control));
            x += width + BUTTON_GAP;
        }

        Self { buttons }
    }

    /// Resolves a mouse event to the control under it, if any.
    ///
    /// Only left-button presses count; motion, drags, and releases are
    /// ignored, mirroring the key-down-only keyboard mapping.
    #[must_use]
    pub fn hit(&self, event: MouseEvent) -> Option<GameInput> {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }

        let position = Position {
            x: event.column,
            y: event.row,
        };
        self.buttons
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, control)| control.input)
    }

    /// Draws the control labels.
    pub fn render(&self, frame: &mut Frame<'_>, theme: &Theme) {
        let buffer = frame.buffer_mut();
        for (rect, control) in &self.buttons {
            buffer.set_string(
                rect.x,
                rect.y,
                control.label,
                Style::new()
                    .fg(theme.hud_accent)
                    .add_modifier(Modifier::DIM),
            );
        }
    }
}

fn label_width(label: &str) -> u16 {
    u16::try_from(label.width()).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::layout::Rect;

    use crate::input::{Direction, GameInput};

    use super::ControlBar;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn every_control_is_clickable() {
        let bar = ControlBar::layout(Rect::new(0, 20, 80, 1));

        let expected = [
            GameInput::Direction(Direction::Left),
            GameInput::Direction(Direction::Up),
            GameInput::Direction(Direction::Down),
            GameInput::Direction(Direction::Right),
            GameInput::TogglePause,
            GameInput::Restart,
        ];
        for (index, (rect, _)) in bar.buttons.iter().enumerate() {
            assert_eq!(bar.hit(click(rect.x, rect.y)), Some(expected[index]));
        }
        assert_eq!(bar.buttons.len(), expected.len());
    }

    #[test]
    fn clicks_between_buttons_miss() {
        let bar = ControlBar::layout(Rect::new(0, 20, 80, 1));

        let first = bar.buttons[0].0;
        // One column past the first button lands in the gap.
        assert_eq!(bar.hit(click(first.right(), 20)), None);
        // Wrong row.
        assert_eq!(bar.hit(click(first.x, 19)), None);
    }

    #[test]
    fn only_left_button_presses_count() {
        let bar = ControlBar::layout(Rect::new(0, 20, 80, 1));
        let first = bar.buttons[0].0;

        let mut event = click(first.x, first.y);
        event.kind = MouseEventKind::Moved;
        assert_eq!(bar.hit(event), None);

        event.kind = MouseEventKind::Down(MouseButton::Right);
        assert_eq!(bar.hit(event), None);
    }

    #[test]
    fn zero_height_area_yields_an_inert_bar() {
        let bar = ControlBar::layout(Rect::new(0, 0, 80, 0));
        assert!(bar.buttons.is_empty());
        assert_eq!(bar.hit(click(0, 0)), None);
    }
}
