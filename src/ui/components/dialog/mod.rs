//! Dialog components

mod alert_dialog;
mod base;

pub use alert_dialog::render_alert;
