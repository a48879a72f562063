use ratatui::style::{Color, Modifier, Style};

/// Blue-on-dark form theme.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Rgb(14, 17, 23);
    pub const FG: Color = Color::Rgb(230, 234, 241);
    pub const FG_DIM: Color = Color::Rgb(150, 160, 175);
    pub const FG_MUTED: Color = Color::Rgb(90, 98, 110);

    pub const ACCENT_BLUE: Color = Color::Rgb(26, 115, 232);
    pub const FIELD_BG: Color = Color::Rgb(21, 41, 66);
    pub const ACCENT_GREEN: Color = Color::Rgb(60, 200, 110);
    pub const ACCENT_YELLOW: Color = Color::Rgb(255, 200, 60);
    pub const ACCENT_RED: Color = Color::Rgb(255, 85, 85);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// Border of the panel holding focus.
    pub fn border_active() -> Style {
        Style::default().fg(Self::ACCENT_BLUE)
    }

    pub fn title() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// Unfocused input box.
    pub fn field() -> Style {
        Style::default().fg(Self::FG).bg(Self::FIELD_BG)
    }

    /// Focused input box.
    pub fn field_focused() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn ok() -> Style {
        Style::default()
            .fg(Self::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warn() -> Style {
        Style::default()
            .fg(Self::ACCENT_YELLOW)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ACCENT_RED)
            .add_modifier(Modifier::BOLD)
    }

    /// Metric values in the result panel.
    pub fn metric() -> Style {
        Style::default()
            .fg(Self::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }
}
