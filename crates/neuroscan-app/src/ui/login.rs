//! Login screen
//!
//! Email/password form with a simulated sign-in: submitting spins for a
//! fixed delay and always succeeds, then the app routes to the dashboard.

use iced::widget::{button, checkbox, column, container, text, text_input, Space};
use iced::{Alignment, Element, Length};

use neuroscan_core::auth::{LoginForm, SubmitFlow};

use super::theme;

/// State for the login screen
pub struct LoginScreen {
    /// Form fields
    pub form: LoginForm,
    /// Single-shot submit flow
    pub flow: SubmitFlow,
}

/// Messages for login interaction
#[derive(Debug, Clone)]
pub enum LoginMessage {
    /// Email field edited
    EmailChanged(String),
    /// Password field edited
    PasswordChanged(String),
    /// Show/hide the password
    ToggleShowPassword(bool),
    /// Submit pressed
    Submit,
    /// Simulated authentication delay elapsed
    SubmitComplete,
    /// Link to the access-request form
    GoToRequestAccess,
}

impl LoginScreen {
    /// Create a fresh login screen
    pub fn new() -> Self {
        Self {
            form: LoginForm::default(),
            flow: SubmitFlow::new(),
        }
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, LoginMessage> {
        let email_input = text_input("doctor@hospital.org", &self.form.email)
            .on_input(LoginMessage::EmailChanged)
            .padding(10);

        let password_input = text_input("Password", &self.form.password)
            .on_input(LoginMessage::PasswordChanged)
            .secure(!self.form.show_password)
            .padding(10);

        let show_password = checkbox(self.form.show_password)
            .label("Show password")
            .on_toggle(LoginMessage::ToggleShowPassword)
            .size(16);

        let submit_label = if self.flow.is_submitting() {
            "Signing in..."
        } else {
            "Sign In"
        };
        let mut submit = button(text(submit_label).size(16))
            .padding([12, 24])
            .width(Length::Fill)
            .style(theme::accent_button);
        if self.form.is_complete() && !self.flow.is_submitting() {
            submit = submit.on_press(LoginMessage::Submit);
        }

        let card = container(
            column![
                text("Sign in to NeuroScan").size(24),
                text("Access the scan analysis dashboard")
                    .size(13)
                    .color(theme::TEXT_DIM),
                Space::new().height(8),
                email_input,
                password_input,
                show_password,
                submit,
                button(text("Need access? Request it here").size(13))
                    .style(button::text)
                    .on_press(LoginMessage::GoToRequestAccess),
            ]
            .spacing(14)
            .align_x(Alignment::Center),
        )
        .style(theme::panel)
        .padding(32)
        .width(380);

        container(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}
