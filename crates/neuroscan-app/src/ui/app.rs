//! Main iced application for the NeuroScan demo
//!
//! Owns the screen router and the per-screen state. Update logic lives in
//! the `handlers` modules; this file only dispatches and builds the
//! subscription set.

use std::time::Duration;

use iced::event::{self, Event};
use iced::{time, window, Element, Subscription, Task, Theme};

use neuroscan_core::config::AppConfig;

use super::access::AccessScreen;
use super::dashboard::DashboardScreen;
use super::handlers;
use super::landing;
use super::login::LoginScreen;
use super::message::Message;

/// Which screen is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Login,
    RequestAccess,
    Dashboard,
}

/// Application state
pub struct NeuroScanApp {
    /// Loaded configuration (timing, viewer defaults, profile)
    pub config: AppConfig,
    /// Visible screen
    pub screen: Screen,
    /// Login screen state
    pub login: LoginScreen,
    /// Access-request screen state
    pub access: AccessScreen,
    /// Dashboard state (session, viewer, tabs)
    pub dashboard: DashboardScreen,
}

impl NeuroScanApp {
    /// Create a new application instance
    pub fn new(config: AppConfig) -> Self {
        let dashboard = DashboardScreen::new(&config);
        Self {
            config,
            screen: Screen::Landing,
            login: LoginScreen::new(),
            access: AccessScreen::new(),
            dashboard,
        }
    }

    /// Update application state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => handlers::tick::handle(self),
            Message::AnalysisFinalized(epoch) => handlers::tick::handle_finalized(self, epoch),
            Message::Navigate(screen) => {
                log::debug!("Navigate to {:?}", screen);
                if screen == Screen::Login {
                    // Returning to the form always restarts the flow
                    self.login.flow.reset();
                }
                self.screen = screen;
                Task::none()
            }
            Message::FileDropped(path) => {
                // Drops only mean something on the dashboard
                if self.screen == Screen::Dashboard {
                    handlers::dashboard::handle_dropped(self, path)
                } else {
                    Task::none()
                }
            }
            Message::Login(msg) => handlers::auth::handle_login(self, msg),
            Message::Access(msg) => handlers::auth::handle_access(self, msg),
            Message::Dashboard(msg) => handlers::dashboard::handle(self, msg),
        }
    }

    /// Build the view for the visible screen
    pub fn view(&self) -> Element<'_, Message> {
        match self.screen {
            Screen::Landing => landing::view(),
            Screen::Login => self.login.view().map(Message::Login),
            Screen::RequestAccess => self.access.view().map(Message::Access),
            Screen::Dashboard => self
                .dashboard
                .view(&self.config.profile)
                .map(Message::Dashboard),
        }
    }

    /// Subscriptions: the progress tick only exists while a counter is
    /// animating, so a repeating timer can never outlive its phase.
    pub fn subscription(&self) -> Subscription<Message> {
        let mut subs = Vec::new();

        if self.screen == Screen::Dashboard {
            if self.dashboard.session.needs_tick() {
                subs.push(
                    time::every(Duration::from_millis(self.config.simulation.tick_interval_ms))
                        .map(|_| Message::Tick),
                );
            }
            subs.push(event::listen_with(|event, _status, _window| match event {
                Event::Window(window::Event::FileDropped(path)) => {
                    Some(Message::FileDropped(path))
                }
                _ => None,
            }));
        }

        Subscription::batch(subs)
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
