//! Application state definitions

use super::forms::SignUpForm;
use serde::{Deserialize, Serialize};

/// Fixed account classification sent on registration
pub const USER_TYPE: &str = "1";
/// Fixed permission flag sent on registration
pub const USER_PERMISSION: &str = "true";

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dependents,
    SignUp,
}

/// A dependent as returned by `GET /ousers`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Dependent {
    pub id: String,
    pub name: String,
}

/// Registration payload for `POST /users`.
///
/// Built from a validated form: `cpf` and `zip` are digits only,
/// `birthday` is ISO (`YYYY-MM-DD`), classification and permission are
/// fixed constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub cpf: String,
    pub birthday: String,
    pub email: String,
    pub password: String,
    pub rg: String,
    pub zip: String,
    pub number: String,
    pub complement: String,
    pub street: String,
    pub neighborhood: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub permission: String,
}

/// Modal feedback shown after a submission attempt
#[derive(Debug, Clone, Default)]
pub struct AlertState {
    pub visible: bool,
    pub title: String,
    pub message: String,
    /// Dismissing the alert navigates back to the dependents list
    pub dismiss_is_back: bool,
}

impl AlertState {
    /// Alert for a successful registration
    pub fn success() -> Self {
        Self {
            visible: true,
            title: "Sucesso!".to_string(),
            message: "Você já pode fazer o login".to_string(),
            dismiss_is_back: true,
        }
    }

    /// Alert carrying a server or transport error message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            visible: true,
            title: "Erro!".to_string(),
            message: message.into(),
            dismiss_is_back: false,
        }
    }

    /// Hide the alert
    pub fn dismiss(&mut self) {
        *self = Self::default();
    }
}

/// Top-level application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    /// Dependents collection, in server order; empty before first fetch
    pub dependents: Vec<Dependent>,
    /// List cursor into `dependents`
    pub selected_dependent: usize,
    /// The sign-up form; reset whenever the SignUp view is entered
    pub form: SignUpForm,
    pub alert: AlertState,
}

impl AppState {
    /// Move the list cursor down, clamped to the collection
    pub fn select_next_dependent(&mut self) {
        if !self.dependents.is_empty() {
            self.selected_dependent = (self.selected_dependent + 1).min(self.dependents.len() - 1);
        }
    }

    /// Move the list cursor up
    pub fn select_prev_dependent(&mut self) {
        self.selected_dependent = self.selected_dependent.saturating_sub(1);
    }
}
