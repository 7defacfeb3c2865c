//! Progress tick handler
//!
//! The tick subscription only exists while a counter is animating, so this
//! is called every `tick_interval_ms` during the upload and processing
//! phases and never otherwise. When a tick pushes processing over 100 the
//! session enters `Finalizing` and the one-shot result delay is scheduled
//! here, tagged with the session epoch so a scan swap in the meantime
//! orphans it.

use std::time::Duration;

use iced::Task;

use neuroscan_core::SessionPhase;

use crate::ui::app::NeuroScanApp;
use crate::ui::message::Message;

/// Handle the repeating progress tick
pub fn handle(app: &mut NeuroScanApp) -> Task<Message> {
    let phase = app.dashboard.session.tick();

    match phase {
        SessionPhase::Ready => {
            app.dashboard.status = "Upload complete. Ready to analyze.".to_string();
            Task::none()
        }
        SessionPhase::Finalizing => {
            // Edge: processing just hit 100. Schedule the short fixed delay
            // before the result appears.
            app.dashboard.status = "Finalizing analysis...".to_string();
            let epoch = app.dashboard.session.epoch();
            let delay = Duration::from_millis(app.config.simulation.finalize_delay_ms);
            Task::perform(tokio::time::sleep(delay), move |_| {
                Message::AnalysisFinalized(epoch)
            })
        }
        _ => Task::none(),
    }
}

/// Handle the finalize delay elapsing
pub fn handle_finalized(app: &mut NeuroScanApp, epoch: u64) -> Task<Message> {
    if app.dashboard.session.finalize(epoch) {
        app.dashboard.status =
            "Analysis complete. Tumor detected - see results below.".to_string();
    }
    Task::none()
}
