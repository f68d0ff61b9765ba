//! Feedback alert dialog

use super::base::{render_dialog, DialogConfig};
use crate::state::AlertState;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the submission feedback alert centered on the screen.
///
/// Success and error share the layout; only the accent color changes.
pub fn render_alert(frame: &mut Frame, alert: &AlertState) {
    let accent = if alert.dismiss_is_back {
        Color::Green
    } else {
        Color::Red
    };

    let hint = vec![
        Span::raw("Pressione "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" para fechar"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: &alert.title,
            accent,
            message: &alert.message,
            hint,
            max_width: 60,
        },
    );
}
