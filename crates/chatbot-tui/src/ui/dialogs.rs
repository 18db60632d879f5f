//! Dialog widgets.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::theme::Theme;
use super::utils::truncate_left;

/// Create a centered rectangle within the given area.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// A text input dialog.
#[derive(Debug, Clone)]
pub struct InputDialog<'a> {
    /// Dialog title.
    title: &'a str,
    /// Prompt message.
    prompt: &'a str,
    /// Current input value.
    value: &'a str,
    /// Width of the dialog.
    width: u16,
    /// Theme for styling.
    theme: Theme,
}

impl<'a> InputDialog<'a> {
    /// Create a new input dialog.
    pub fn new(title: &'a str, prompt: &'a str, value: &'a str) -> Self {
        Self {
            title,
            prompt,
            value,
            width: 60,
            theme: Theme::default(),
        }
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Render the dialog.
    pub fn render(self, frame: &mut Frame) {
        let area = centered_rect(self.width, 7, frame.area());

        frame.render_widget(Clear, area);

        // Keep the end of long paths visible, cursor sits at the end
        let room = area.width.saturating_sub(5) as usize;
        let input_display = format!("  {}|", truncate_left(self.value, room));

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", self.prompt),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                input_display,
                Style::default().fg(Color::White),
            )),
            Line::from(Span::styled(
                "  [Enter] Attach  [Esc] Cancel",
                self.theme.muted_style(),
            )),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.focused_border())
                .title(format!(" {} ", self.title)),
        );

        frame.render_widget(paragraph, area);
    }
}
