//! NeuroScan AI demo - MRI upload and analysis dashboard
//!
//! This is the main entry point for the GUI application. It:
//! 1. Loads the YAML config (timing, viewer defaults, profile)
//! 2. Initializes the theme palette
//! 3. Launches the iced application with the screen router

mod ui;

use iced::{Size, Task};

use neuroscan_core::config::{self, AppConfig};
use ui::{theme, NeuroScanApp};

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("neuroscan starting up");

    let config_path = config::default_config_path();
    let config: AppConfig = config::load_config(&config_path);
    log::info!(
        "Simulation timing: tick {} ms, upload +{}, processing +{}, finalize {} ms",
        config.simulation.tick_interval_ms,
        config.simulation.upload_step,
        config.simulation.processing_step,
        config.simulation.finalize_delay_ms
    );

    // Initialize theme palette from ~/.config/neuroscan/theme.yaml
    theme::init_theme();

    iced::application(
        move || (NeuroScanApp::new(config.clone()), Task::none()),
        update,
        view,
    )
    .subscription(subscription)
    .theme(theme)
    .title("NeuroScan AI")
    .window_size(Size::new(1280.0, 860.0))
    .run()
}

/// Update function for iced
fn update(app: &mut NeuroScanApp, message: ui::message::Message) -> Task<ui::message::Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &NeuroScanApp) -> iced::Element<'_, ui::message::Message> {
    app.view()
}

/// Subscription function for iced
fn subscription(app: &NeuroScanApp) -> iced::Subscription<ui::message::Message> {
    app.subscription()
}

/// Theme function for iced
fn theme(app: &NeuroScanApp) -> iced::Theme {
    app.theme()
}
