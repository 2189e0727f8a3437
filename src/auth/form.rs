// src/auth/form.rs
use crate::auth::{Credentials, LoginApi, LoginError, SubmitGate};

/// What happened when the submit control was clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Login accepted; the page moved to this path.
    Navigated(String),
    /// Request failed; the page is exactly as it was before the click.
    Failed(LoginError),
    /// This form already has a submission in flight; nothing was sent.
    AlreadyPending,
}

/// State of the login page: two fields, a modal and the current location.
///
/// `form_id` names this particular rendered form. Only a resubmit of the
/// same form is held back while its request is pending.
pub struct LoginForm<'a> {
    api: &'a dyn LoginApi,
    gate: &'a SubmitGate,
    success_path: &'a str,
    form_id: String,
    username: String,
    password: String,
    modal_open: bool,
    location: String,
}

impl<'a> LoginForm<'a> {
    pub fn new(
        api: &'a dyn LoginApi,
        gate: &'a SubmitGate,
        success_path: &'a str,
        location: impl Into<String>,
        form_id: impl Into<String>,
    ) -> Self {
        Self {
            api,
            gate,
            success_path,
            form_id: form_id.into(),
            username: String::new(),
            password: String::new(),
            modal_open: false,
            location: location.into(),
        }
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn click_login(&mut self) {
        self.modal_open = true;
    }

    pub fn click_cancel(&mut self) {
        self.modal_open = false;
    }

    /// Reads both fields now, sends one login request, navigates on success.
    pub fn click_submit(&mut self) -> SubmitOutcome {
        let credentials = Credentials::new(self.username.as_str(), self.password.as_str());

        let Some(_permit) = self.gate.try_acquire(&self.form_id) else {
            tracing::warn!(username = %credentials.username, form = %self.form_id, "login already pending, ignoring submit");
            return SubmitOutcome::AlreadyPending;
        };

        match self.api.login(&credentials) {
            Ok(()) => {
                tracing::info!(username = %credentials.username, to = self.success_path, "login succeeded");
                self.location = self.success_path.to_string();
                SubmitOutcome::Navigated(self.location.clone())
            }
            Err(e) => {
                tracing::error!(username = %credentials.username, error = %e, "login failed");
                SubmitOutcome::Failed(e)
            }
        }
    }
}
