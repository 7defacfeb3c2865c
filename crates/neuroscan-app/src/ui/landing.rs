//! Landing screen
//!
//! Hero page with the product pitch and routes into the login and
//! access-request flows. Pure marketing chrome; no state.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use super::app::Screen;
use super::message::Message;
use super::theme;

/// Build the landing view
pub fn view() -> Element<'static, Message> {
    let header = row![
        text("NeuroScan AI").size(22),
        Space::new().width(Length::Fill),
        button(text("Log In").size(14))
            .style(button::secondary)
            .on_press(Message::Navigate(Screen::Login)),
    ]
    .spacing(16)
    .align_y(Alignment::Center)
    .padding(16);

    let hero = column![
        text("AI-Powered Brain Tumor Detection").size(42),
        text("Upload an MRI scan and get an instant, annotated analysis.")
            .size(18)
            .color(theme::TEXT_DIM),
        text("For research and educational purposes only.")
            .size(13)
            .color(theme::TEXT_DIM),
        row![
            button(text("Get Started").size(16))
                .padding([12, 24])
                .style(theme::accent_button)
                .on_press(Message::Navigate(Screen::Login)),
            button(text("Request Access").size(16))
                .padding([12, 24])
                .style(button::secondary)
                .on_press(Message::Navigate(Screen::RequestAccess)),
        ]
        .spacing(16),
    ]
    .spacing(24)
    .align_x(Alignment::Center);

    let features = row![
        feature_card(
            "Instant Analysis",
            "Detection, classification, and localization in seconds.",
        ),
        feature_card(
            "Annotated Results",
            "Tumor regions highlighted directly on the scan.",
        ),
        feature_card(
            "Exportable Reports",
            "Share structured findings with your team.",
        ),
    ]
    .spacing(20);

    let content = column![
        header,
        Space::new().height(Length::FillPortion(1)),
        hero,
        Space::new().height(40),
        features,
        Space::new().height(Length::FillPortion(2)),
    ]
    .align_x(Alignment::Center)
    .width(Length::Fill);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn feature_card(title: &'static str, body: &'static str) -> Element<'static, Message> {
    container(
        column![
            text(title).size(16),
            text(body).size(13).color(theme::TEXT_DIM),
        ]
        .spacing(8),
    )
    .style(theme::panel)
    .padding(20)
    .width(260)
    .into()
}
