//! Login and access-request handlers
//!
//! Both flows are simulated: submit flips the flow into `Submitting`, a
//! fixed tokio sleep elapses, and the flow succeeds. Nothing can fail.

use std::time::Duration;

use iced::Task;

use crate::ui::access::AccessMessage;
use crate::ui::app::{NeuroScanApp, Screen};
use crate::ui::login::LoginMessage;
use crate::ui::message::Message;

/// Handle login screen messages
pub fn handle_login(app: &mut NeuroScanApp, msg: LoginMessage) -> Task<Message> {
    match msg {
        LoginMessage::EmailChanged(email) => {
            app.login.form.email = email;
            Task::none()
        }
        LoginMessage::PasswordChanged(password) => {
            app.login.form.password = password;
            Task::none()
        }
        LoginMessage::ToggleShowPassword(show) => {
            app.login.form.show_password = show;
            Task::none()
        }
        LoginMessage::Submit => {
            if !app.login.form.is_complete() || !app.login.flow.submit() {
                return Task::none();
            }
            log::info!("Simulated sign-in for {}", app.login.form.email);
            let delay = Duration::from_millis(app.config.simulation.submit_delay_ms);
            Task::perform(tokio::time::sleep(delay), |_| {
                Message::Login(LoginMessage::SubmitComplete)
            })
        }
        LoginMessage::SubmitComplete => {
            app.login.flow.complete();
            app.screen = Screen::Dashboard;
            log::info!("Signed in, entering dashboard");
            Task::none()
        }
        LoginMessage::GoToRequestAccess => {
            app.screen = Screen::RequestAccess;
            Task::none()
        }
    }
}

/// Handle access-request screen messages
pub fn handle_access(app: &mut NeuroScanApp, msg: AccessMessage) -> Task<Message> {
    match msg {
        AccessMessage::FirstNameChanged(v) => {
            app.access.form.first_name = v;
            Task::none()
        }
        AccessMessage::LastNameChanged(v) => {
            app.access.form.last_name = v;
            Task::none()
        }
        AccessMessage::EmailChanged(v) => {
            app.access.form.email = v;
            Task::none()
        }
        AccessMessage::InstitutionChanged(v) => {
            app.access.form.institution = v;
            Task::none()
        }
        AccessMessage::RoleChanged(v) => {
            app.access.form.role = v;
            Task::none()
        }
        AccessMessage::ToggleTerms(accepted) => {
            app.access.form.accepted_terms = accepted;
            Task::none()
        }
        AccessMessage::Submit => {
            if !app.access.form.is_complete() || !app.access.flow.submit() {
                return Task::none();
            }
            log::info!("Simulated access request for {}", app.access.form.email);
            let delay = Duration::from_millis(app.config.simulation.submit_delay_ms);
            Task::perform(tokio::time::sleep(delay), |_| {
                Message::Access(AccessMessage::SubmitComplete)
            })
        }
        AccessMessage::SubmitComplete => {
            app.access.flow.complete();
            Task::none()
        }
        AccessMessage::GoToLogin => {
            app.login.flow.reset();
            app.screen = Screen::Login;
            Task::none()
        }
        AccessMessage::GoToLanding => {
            app.screen = Screen::Landing;
            Task::none()
        }
    }
}
