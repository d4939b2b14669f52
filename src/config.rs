use ratatui::style::Color;
use ratatui::symbols::border;

/// Side length of the square play field, in cells.
pub const BOARD_SIDE: u16 = 20;

/// Snake length right after a reset.
pub const INITIAL_SNAKE_LENGTH: u16 = 4;

/// Tick interval at the start of a run, in milliseconds.
pub const BASE_TICK_INTERVAL_MS: u64 = 200;

/// Hard floor for the tick interval, in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 60;

/// Interval reduction applied on each speed-up, in milliseconds.
pub const SPEEDUP_DELTA_MS: u64 = 6;

/// Number of eaten foods between speed-ups.
pub const SPEEDUP_EVERY_FOOD: u32 = 5;

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Block color for the snake head.
    pub snake_head: Color,
    /// Block color for body segments.
    pub snake_body: Color,
    pub food: Color,
    /// Lattice dots marking empty cells.
    pub grid: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_fg: Color,
    pub hud_accent: Color,
    pub overlay_title: Color,
    pub overlay_hint: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    food: Color::Red,
    grid: Color::DarkGray,
    play_bg: Color::Black,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_fg: Color::DarkGray,
    hud_accent: Color::White,
    overlay_title: Color::Green,
    overlay_hint: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    food: Color::Yellow,
    grid: Color::DarkGray,
    play_bg: Color::Black,
    border_fg: Color::Cyan,
    border_bg: Color::DarkGray,
    hud_fg: Color::DarkGray,
    hud_accent: Color::Cyan,
    overlay_title: Color::Cyan,
    overlay_hint: Color::DarkGray,
};

/// Neon magenta/yellow theme.
pub const THEME_NEON: Theme = Theme {
    name: "neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    food: Color::Yellow,
    grid: Color::DarkGray,
    play_bg: Color::Black,
    border_fg: Color::Magenta,
    border_bg: Color::Black,
    hud_fg: Color::DarkGray,
    hud_accent: Color::Magenta,
    overlay_title: Color::Magenta,
    overlay_hint: Color::DarkGray,
};

/// All available themes.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_NEON];

/// Looks a theme up by its case-insensitive name.
#[must_use]
pub fn theme_by_name(name: &str) -> Option<&'static Theme> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}

/// Names of all built-in themes, for CLI error messages.
#[must_use]
pub fn theme_names() -> Vec<&'static str> {
    THEMES.iter().map(|theme| theme.name).collect()
}

/// Half-block border set: solid side faces the play area.
///
/// - Top row + top corners: `▄` (solid bottom -> play area below)
/// - Bottom row + bottom corners: `▀` (solid top -> play area above)
/// - Left/right columns: `█` (fully solid)
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Solid block glyph for the snake head.
pub const GLYPH_SNAKE_HEAD: &str = "█";

/// Solid block glyph for body segments.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Centered dot glyph for food.
pub const GLYPH_FOOD: &str = "●";

/// Faint lattice dot for empty cells.
pub const GLYPH_GRID_DOT: &str = "·";
