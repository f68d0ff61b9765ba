//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    /// Dialog title
    pub title: &'a str,
    /// Title and border color
    pub accent: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint text shown at the bottom
    pub hint: Vec<Span<'a>>,
    /// Maximum width of the dialog
    pub max_width: u16,
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let padding = 4u16; // 2 chars on each side
    let max_line_width = (config.max_width - padding) as usize;

    let wrapped_lines = wrap_text(config.message, max_line_width);

    let content_width = wrapped_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(config.title.chars().count()) as u16;
    let dialog_width = (content_width + padding + 2).min(config.max_width);

    // title + blank + message + blank + hint, inside borders
    let dialog_height = (wrapped_lines.len() as u16 + 4 + 2).max(5);

    let dialog_area = Rect {
        x: area.x + (area.width.saturating_sub(dialog_width)) / 2,
        y: area.y + (area.height.saturating_sub(dialog_height)) / 2,
        width: dialog_width.min(area.width),
        height: dialog_height.min(area.height),
    };

    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for line in wrapped_lines {
        content.push(Line::from(line));
    }
    content.push(Line::from(""));
    content.push(Line::from(config.hint));

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.accent))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            if current_line.chars().count() + word.chars().count() + 1 > max_width
                && !current_line.is_empty()
            {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text_is_one_line() {
        assert_eq!(wrap_text("E-mail já cadastrado", 40).len(), 1);
    }

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap_text("uma mensagem de erro bastante longa do servidor", 12);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= 12));
    }

    #[test]
    fn test_wrap_empty_text_yields_one_empty_line() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }
}
