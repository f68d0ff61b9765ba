//! Sign-up form view

use crate::app::App;
use crate::state::{Form, FormField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the sign-up form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    draw_header(frame, chunks[0]);
    draw_fields(frame, chunks[1], app);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Vamos começar?",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Coloque abaixo os seus dados para realizarmos seu cadastro.",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(header, area);
}

/// One bordered row per field plus an inline error line when present
fn field_height(field: &FormField) -> u16 {
    if field.error.is_some() {
        4
    } else {
        3
    }
}

fn draw_fields(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let active = form.active_field();

    // Scroll the column so the active field stays visible
    let mut start = 0;
    while start < active {
        let mut y = 0u16;
        let mut active_fits = true;
        for index in start..=active {
            let Some(field) = form.get_field(index) else {
                break;
            };
            let height = field_height(field);
            if y + height > area.height {
                active_fits = false;
                break;
            }
            y += height;
        }
        if active_fits {
            break;
        }
        start += 1;
    }

    let mut y = area.y;
    for index in start..form.field_count() {
        let Some(field) = form.get_field(index) else {
            break;
        };
        let height = field_height(field);
        if y + height > area.y + area.height {
            break;
        }

        let field_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height: 3,
        };
        draw_field(frame, field_area, field, index == active);

        if let Some(error) = &field.error {
            let error_area = Rect {
                x: area.x + 1,
                y: y + 3,
                width: area.width.saturating_sub(1),
                height: 1,
            };
            let message = Paragraph::new(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
            frame.render_widget(message, error_area);
        }

        y += height;
    }
}

/// Draw a single form field
fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let border_style = if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = if field.is_secret {
        "•".repeat(field.display_value().chars().count())
    } else {
        field.display_value().to_string()
    };

    let content = if display_value.is_empty() && !is_active {
        Line::from(Span::styled(
            field.placeholder(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let value_style = if is_active {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        let cursor = if is_active { "▌" } else { "" };
        Line::from(vec![
            Span::styled(display_value, value_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(content).block(block), area);
}
