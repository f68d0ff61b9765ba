//! Layout helpers and status bar

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into main content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Draw the key-hint status bar for the current view
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints: &[(&str, &str)] = if app.state.alert.visible {
        &[("Enter/Esc", "fechar")]
    } else {
        match app.state.current_view {
            View::Dependents => &[
                ("↑/↓", "navegar"),
                ("n", "cadastrar"),
                ("r", "atualizar"),
                ("q", "sair"),
            ],
            View::SignUp => &[
                ("Tab", "próximo campo"),
                ("Enter", "avançar/enviar"),
                ("Ctrl+S", "enviar"),
                ("Ctrl+U", "limpar campo"),
                ("Esc", "voltar"),
            ],
        }
    };

    let mut spans = Vec::new();
    if app.state.current_view == View::SignUp && app.state.form.has_errors() {
        spans.push(Span::styled(
            "Corrija os campos destacados  ",
            Style::default().fg(Color::Red),
        ));
    }
    for (i, (keys, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default()));
        }
        spans.push(Span::styled(*keys, Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
