use ratatui::style::Color;
use tgcloud_config::ThemeParams;
use tgcloud_utils::theme::parse_hex_color;

pub const DEFAULT_BACKGROUND: Color = Color::White;
pub const DEFAULT_TEXT: Color = Color::Black;

pub const ACCENT_COLOR: Color = Color::Rgb(36, 129, 204); // Telegram blue
pub const MUTED_COLOR: Color = Color::Rgb(128, 128, 128);
pub const ERROR_COLOR: Color = Color::Rgb(220, 53, 69);

/// Root colours resolved from the host theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
}

impl Palette {
    #[must_use]
    pub fn from_theme(theme: &ThemeParams) -> Self {
        Self {
            background: resolve(theme.bg_color.as_deref(), DEFAULT_BACKGROUND),
            text: resolve(theme.text_color.as_deref(), DEFAULT_TEXT),
        }
    }
}

fn resolve(value: Option<&str>, fallback: Color) -> Color {
    value
        .and_then(parse_hex_color)
        .map_or(fallback, |(r, g, b)| Color::Rgb(r, g, b))
}
