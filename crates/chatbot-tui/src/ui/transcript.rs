//! Transcript widget for displaying the conversation.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use chatbot_client::{project, MessageView};
use chatbot_core::{Message, MessageKind};

use super::theme::Theme;
use super::utils::wrap_text_indented;

/// Scrollable view over the transcript.
#[derive(Debug, Clone)]
pub struct TranscriptWidget<'a> {
    /// Messages to display.
    messages: &'a [Message],
    /// Lines scrolled back from the bottom (0 = follow the latest message).
    scroll_back: usize,
    /// Number of sends still waiting for a reply.
    pending: usize,
    /// Theme for styling.
    theme: Theme,
}

impl<'a> TranscriptWidget<'a> {
    /// Create a new transcript widget.
    pub fn new(messages: &'a [Message]) -> Self {
        Self {
            messages,
            scroll_back: 0,
            pending: 0,
            theme: Theme::default(),
        }
    }

    /// Set how many lines to scroll back from the bottom.
    pub fn scroll_back(mut self, lines: usize) -> Self {
        self.scroll_back = lines;
        self
    }

    /// Set the number of outstanding sends.
    pub fn pending(mut self, pending: usize) -> Self {
        self.pending = pending;
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Build every display line for the given text width.
    pub fn lines(&self, text_width: usize) -> Vec<Line<'static>> {
        let mut all_lines: Vec<Line<'static>> = Vec::new();

        for msg in self.messages {
            let view = project(msg);
            let author = view.author();
            let label = match author {
                MessageKind::User => "You: ",
                MessageKind::Bot => "Bot: ",
            };
            let label_style = self.theme.author_style(author);

            match view {
                MessageView::Text {
                    body, attachment, ..
                } => {
                    all_lines.push(Line::from(Span::styled(label, label_style)));
                    for wrapped in wrap_text_indented(body, text_width, "  ") {
                        all_lines.push(Line::from(Span::raw(wrapped)));
                    }
                    if let Some(name) = attachment {
                        all_lines.push(Line::from(Span::styled(
                            format!("  Uploaded: {}", name),
                            self.theme.muted_style(),
                        )));
                    }
                }
                MessageView::Card {
                    title,
                    description,
                    items,
                    ..
                } => {
                    all_lines.push(Line::from(vec![
                        Span::styled(label, label_style),
                        Span::styled(
                            title.to_string(),
                            self.theme.focused_border().add_modifier(Modifier::BOLD),
                        ),
                    ]));
                    for wrapped in wrap_text_indented(description, text_width, "  ") {
                        all_lines.push(Line::from(Span::raw(wrapped)));
                    }
                    for item in items {
                        let mut wrapped = wrap_text_indented(item, text_width, "    ");
                        if let Some(first) = wrapped.first_mut() {
                            first.replace_range(..4, "  - ");
                        }
                        all_lines.extend(wrapped.into_iter().map(|l| Line::from(Span::raw(l))));
                    }
                }
            }

            // Add blank line between messages
            all_lines.push(Line::from(""));
        }

        if self.pending > 0 {
            all_lines.push(Line::from(Span::styled(
                format!("Bot is typing... ({} pending)", self.pending),
                self.theme.muted_style(),
            )));
        }

        all_lines
    }

    /// Render the widget.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let visible_height = area.height.saturating_sub(2) as usize;
        let text_width = area.width.saturating_sub(2) as usize;

        let all_lines = self.lines(text_width);
        let total_lines = all_lines.len();

        let max_scroll = total_lines.saturating_sub(visible_height);
        let scroll_offset = max_scroll - self.scroll_back.min(max_scroll);

        let lines: Vec<Line> = all_lines
            .into_iter()
            .skip(scroll_offset)
            .take(visible_height)
            .collect();

        let first_line = if total_lines == 0 { 0 } else { scroll_offset + 1 };
        let last_line = (scroll_offset + visible_height).min(total_lines);
        let title = format!(" Chat [{}-{}/{}] ", first_line, last_line, total_lines);

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.unfocused_border())
                .title(title),
        );

        frame.render_widget(paragraph, area);
    }
}
