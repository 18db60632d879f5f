//! Theme and style definitions.

use ratatui::style::{Color, Modifier, Style};

use chatbot_core::MessageKind;

/// Theme configuration for the chat TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary accent color (titles, active elements)
    pub accent: Color,
    /// Error color (failed sends)
    pub error: Color,
    /// Muted color (help text, secondary info)
    pub muted: Color,
    /// User message color
    pub user: Color,
    /// Bot message color
    pub bot: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            error: Color::Red,
            muted: Color::DarkGray,
            user: Color::Cyan,
            bot: Color::Green,
        }
    }
}

impl Theme {
    /// Style for focused/active borders.
    pub fn focused_border(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for unfocused borders.
    pub fn unfocused_border(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for error text.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for muted/secondary text.
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Bold style for a message author label.
    pub fn author_style(&self, kind: MessageKind) -> Style {
        let color = match kind {
            MessageKind::User => self.user,
            MessageKind::Bot => self.bot,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}
