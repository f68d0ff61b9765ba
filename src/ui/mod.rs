//! UI module for rendering the TUI

mod components;
mod dependents;
mod layout;
mod signup;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (main_area, status_area) = layout::create_layout(area);

    match app.state.current_view {
        View::Dependents => dependents::draw(frame, main_area, app),
        View::SignUp => signup::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Feedback alert renders above everything
    if app.state.alert.visible {
        components::dialog::render_alert(frame, &app.state.alert);
    }
}
