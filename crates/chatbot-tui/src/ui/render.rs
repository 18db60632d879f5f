//! Main render function for the TUI.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, InputMode};

use super::dialogs::InputDialog;
use super::theme::Theme;
use super::transcript::TranscriptWidget;
use super::utils::{format_size, truncate_left};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let theme = Theme::default();

    // Input box grows by one line while a file is pending
    let input_height = if app.state.attachment().is_some() { 4 } else { 3 };

    let [header_area, body_area, input_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(input_height),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header_area, app, &theme);

    TranscriptWidget::new(app.state.transcript().as_slice())
        .scroll_back(app.scroll_back)
        .pending(app.state.in_flight())
        .theme(theme.clone())
        .render(frame, body_area);

    render_input(frame, input_area, app, &theme);
    render_footer(frame, footer_area, app, &theme);

    if let InputMode::AttachPath(path) = &app.mode {
        InputDialog::new("Attach file", "Path to the file:", path)
            .theme(theme)
            .render(frame);
    }
}

/// Render the header with the service address.
fn render_header(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let line = Line::from(vec![
        Span::raw(" Service: "),
        Span::styled(app.api_url.as_str(), theme.muted_style()),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Chatbot ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    );

    frame.render_widget(header, area);
}

/// Render the message input and the pending attachment.
fn render_input(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let focused = app.mode == InputMode::Compose;
    let input = app.state.input();

    let mut lines = vec![if input.is_empty() && focused {
        Line::from(Span::styled("Type your message...", theme.muted_style()))
    } else if focused {
        Line::from(format!("{}|", input))
    } else {
        Line::from(input)
    }];

    if let Some(file) = app.state.attachment() {
        let room = area.width.saturating_sub(30) as usize;
        lines.push(Line::from(vec![
            Span::styled("Attached: ", theme.muted_style()),
            Span::raw(truncate_left(&file.name, room)),
            Span::styled(
                format!(" ({})  Ctrl+X to remove", format_size(file.size_bytes)),
                theme.muted_style(),
            ),
        ]));
    }

    let border_style = if focused {
        theme.focused_border()
    } else {
        theme.unfocused_border()
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Message "),
    );

    frame.render_widget(paragraph, area);
}

/// Render the footer with the latest error or status.
fn render_footer(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let status = if let Some(error) = app.state.last_error() {
        Span::styled(format!("Error: {}", error), theme.error_style())
    } else if let Some(notice) = &app.notice {
        Span::styled(notice.clone(), theme.error_style())
    } else if app.state.in_flight() > 0 {
        Span::styled(
            format!("Sending ({} pending)", app.state.in_flight()),
            Style::default().fg(Color::Yellow),
        )
    } else {
        Span::styled("Ready", Style::default().fg(Color::Green))
    };

    let help = " Enter: send | Ctrl+O: attach | Ctrl+X: detach | PgUp/PgDn: scroll | Esc: quit ";

    let footer = Line::from(vec![
        status,
        Span::raw(" | "),
        Span::styled(help, theme.muted_style()),
    ]);

    frame.render_widget(Paragraph::new(footer), area);
}
