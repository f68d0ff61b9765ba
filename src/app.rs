//! Application state and core logic

use crate::api::ApiClient;
use crate::state::{AlertState, AppState, Form, SignUpForm, View};
use crate::validation::validate_sign_up;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Enrollment API client, injected so tests can mock it
    pub api: Box<dyn ApiClient>,
    /// Whether the app should quit
    quit: bool,
    /// In-flight guard: a submit while one is outstanding is ignored
    submitting: bool,
}

impl App {
    /// Create a new App instance and load the dependents list
    pub async fn new(api: Box<dyn ApiClient>) -> Self {
        let mut app = Self {
            state: AppState::default(),
            api,
            quit: false,
            submitting: false,
        };
        app.refresh_dependents().await;
        app
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Navigate to a view, running its on-enter effect
    async fn navigate(&mut self, view: View) {
        match view {
            // Entering the list issues exactly one fetch
            View::Dependents => self.refresh_dependents().await,
            // Entering the form starts from a clean slate
            View::SignUp => self.state.form = SignUpForm::new(),
        }
        self.state.current_view = view;
    }

    /// Replace the dependents collection with the server's.
    ///
    /// A failed fetch keeps whatever was displayed before; the screen
    /// has no error surface of its own.
    async fn refresh_dependents(&mut self) {
        match self.api.fetch_dependents().await {
            Ok(dependents) => {
                self.state.selected_dependent = self
                    .state
                    .selected_dependent
                    .min(dependents.len().saturating_sub(1));
                self.state.dependents = dependents;
            }
            Err(err) => {
                tracing::warn!("failed to fetch dependents: {err}");
            }
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // The feedback alert is modal; Enter/Esc dismisses it
        if self.state.alert.visible {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_alert().await;
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Dependents => self.handle_dependents_key(key).await?,
            View::SignUp => self.handle_sign_up_key(key).await?,
        }
        Ok(())
    }

    /// Hide the alert; after a successful registration this navigates
    /// back to the dependents list
    async fn dismiss_alert(&mut self) {
        let go_back = self.state.alert.dismiss_is_back;
        self.state.alert.dismiss();
        if go_back {
            self.navigate(View::Dependents).await;
        }
    }

    /// Handle keys in the Dependents view
    async fn handle_dependents_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('n') | KeyCode::Char('+') => self.navigate(View::SignUp).await,
            KeyCode::Char('r') => self.refresh_dependents().await,
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next_dependent(),
            KeyCode::Up | KeyCode::Char('k') => self.state.select_prev_dependent(),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the SignUp view
    async fn handle_sign_up_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            // Submit from anywhere
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_sign_up().await;
            }
            // Clear the active field
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form.get_active_field_mut().clear();
            }
            // Enter advances the focus chain; on the last field it submits
            KeyCode::Enter => {
                if self.state.form.active_field() + 1 == self.state.form.field_count() {
                    self.submit_sign_up().await;
                } else {
                    self.state.form.next_field();
                }
            }
            KeyCode::Esc => self.navigate(View::Dependents).await,
            KeyCode::Char(c) => self.state.form.get_active_field_mut().push_char(c),
            KeyCode::Backspace => self.state.form.get_active_field_mut().pop_char(),
            _ => {}
        }
        Ok(())
    }

    /// Validate the form and, if it passes, register the user.
    ///
    /// Exactly one POST per submit; validation failures write their
    /// messages into the form and never reach the API. The outcome of a
    /// POST, success or failure, lands in the feedback alert.
    pub async fn submit_sign_up(&mut self) {
        if self.submitting {
            return;
        }
        self.submitting = true;

        self.state.form.clear_errors();
        let values = self.state.form.values();

        match validate_sign_up(&values) {
            Err(errors) => {
                tracing::debug!(fields = errors.len(), "sign-up form invalid");
                self.state.form.set_errors(&errors);
            }
            Ok(()) => {
                let payload = self.state.form.payload();
                match self.api.create_user(&payload).await {
                    Ok(()) => {
                        tracing::info!("user registered");
                        self.state.alert = AlertState::success();
                    }
                    Err(err) => {
                        tracing::warn!("registration failed: {err}");
                        self.state.alert = AlertState::error(err.user_message());
                    }
                }
            }
        }

        self.submitting = false;
    }
}
