//! Access-request screen
//!
//! Two-step form: step 1 collects applicant details, the simulated
//! submission spins for a fixed delay, and step 2 is the confirmation view
//! with links back to login and the landing page.

use iced::widget::{button, checkbox, column, container, row, text, text_input, Space};
use iced::{Alignment, Element, Length};

use neuroscan_core::auth::{AccessForm, SubmitFlow};

use super::theme;

/// State for the access-request screen
pub struct AccessScreen {
    /// Form fields
    pub form: AccessForm,
    /// Single-shot submit flow; success means step 2 is shown
    pub flow: SubmitFlow,
}

/// Messages for access-request interaction
#[derive(Debug, Clone)]
pub enum AccessMessage {
    FirstNameChanged(String),
    LastNameChanged(String),
    EmailChanged(String),
    InstitutionChanged(String),
    RoleChanged(String),
    ToggleTerms(bool),
    /// Submit pressed on step 1
    Submit,
    /// Simulated request delay elapsed; show the confirmation step
    SubmitComplete,
    /// Confirmation buttons
    GoToLogin,
    GoToLanding,
}

impl AccessScreen {
    /// Create a fresh access-request screen
    pub fn new() -> Self {
        Self {
            form: AccessForm::default(),
            flow: SubmitFlow::new(),
        }
    }

    /// Build the view for the current step
    pub fn view(&self) -> Element<'_, AccessMessage> {
        let card = if self.flow.succeeded() {
            self.view_confirmation()
        } else {
            self.view_form()
        };

        container(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    /// Step 1: the request form
    fn view_form(&self) -> Element<'_, AccessMessage> {
        let name_row = row![
            text_input("First name", &self.form.first_name)
                .on_input(AccessMessage::FirstNameChanged)
                .padding(10),
            text_input("Last name", &self.form.last_name)
                .on_input(AccessMessage::LastNameChanged)
                .padding(10),
        ]
        .spacing(12);

        let email_input = text_input("Work email", &self.form.email)
            .on_input(AccessMessage::EmailChanged)
            .padding(10);

        let institution_input = text_input("Institution", &self.form.institution)
            .on_input(AccessMessage::InstitutionChanged)
            .padding(10);

        let role_input = text_input("Radiologist, Neurologist, Researcher, etc.", &self.form.role)
            .on_input(AccessMessage::RoleChanged)
            .padding(10);

        let terms = checkbox(self.form.accepted_terms)
            .label("I confirm that I am a healthcare professional or researcher")
            .on_toggle(AccessMessage::ToggleTerms)
            .size(16);

        let submit_label = if self.flow.is_submitting() {
            "Submitting..."
        } else {
            "Request Access"
        };
        let mut submit = button(text(submit_label).size(16))
            .padding([12, 24])
            .width(Length::Fill)
            .style(theme::accent_button);
        if self.form.is_complete() && !self.flow.is_submitting() {
            submit = submit.on_press(AccessMessage::Submit);
        }

        container(
            column![
                text("Request Access").size(24),
                text("Tell us who you are and we'll review your request")
                    .size(13)
                    .color(theme::TEXT_DIM),
                Space::new().height(8),
                name_row,
                email_input,
                institution_input,
                column![
                    text("Professional Role").size(13).color(theme::TEXT_DIM),
                    role_input,
                ]
                .spacing(4),
                terms,
                submit,
            ]
            .spacing(14),
        )
        .style(theme::panel)
        .padding(32)
        .width(460)
        .into()
    }

    /// Step 2: confirmation
    fn view_confirmation(&self) -> Element<'_, AccessMessage> {
        container(
            column![
                text("Request Received").size(24),
                text(format!(
                    "Thanks, {}. We'll email {} once your access is approved.",
                    self.form.first_name, self.form.email
                ))
                .size(14)
                .color(theme::TEXT_DIM),
                Space::new().height(8),
                row![
                    button(text("Go to Login").size(14))
                        .style(theme::accent_button)
                        .padding([10, 20])
                        .on_press(AccessMessage::GoToLogin),
                    button(text("Back to Home").size(14))
                        .style(button::secondary)
                        .padding([10, 20])
                        .on_press(AccessMessage::GoToLanding),
                ]
                .spacing(12),
            ]
            .spacing(14)
            .align_x(Alignment::Center),
        )
        .style(theme::panel)
        .padding(32)
        .width(460)
        .into()
    }
}

impl Default for AccessScreen {
    fn default() -> Self {
        Self::new()
    }
}
