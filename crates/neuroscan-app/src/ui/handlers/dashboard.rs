//! Dashboard message handler
//!
//! Translates widget events into scan session and viewer calls, and runs
//! the native file dialogs for picking a scan and saving the exported
//! report.

use std::path::PathBuf;

use iced::Task;
use rfd::AsyncFileDialog;

use neuroscan_core::scan::SCAN_EXTENSIONS;
use neuroscan_core::SelectedScan;

use crate::ui::app::{NeuroScanApp, Screen};
use crate::ui::dashboard::{DashboardMessage, DashboardTab};
use crate::ui::message::Message;

/// Handle dashboard messages
pub fn handle(app: &mut NeuroScanApp, msg: DashboardMessage) -> Task<Message> {
    match msg {
        DashboardMessage::PickScan => Task::perform(pick_scan(), |path| {
            Message::Dashboard(DashboardMessage::ScanPicked(path))
        }),
        DashboardMessage::ScanPicked(Some(path)) => {
            select_scan(app, &path);
            Task::none()
        }
        DashboardMessage::ScanPicked(None) => Task::none(),
        DashboardMessage::Analyze => {
            if app.dashboard.session.start_analysis() {
                app.dashboard.status = "Analyzing scan...".to_string();
            }
            Task::none()
        }
        DashboardMessage::RemoveScan => {
            app.dashboard.session.remove_scan();
            app.dashboard.active_tab = DashboardTab::Upload;
            app.dashboard.fullscreen = false;
            app.dashboard.status = "Ready. Select an MRI scan to begin.".to_string();
            Task::none()
        }
        DashboardMessage::SelectTab(tab) => {
            app.dashboard.active_tab = tab;
            Task::none()
        }
        DashboardMessage::ToggleSidebar => {
            app.dashboard.sidebar_open = !app.dashboard.sidebar_open;
            Task::none()
        }
        DashboardMessage::ToggleFullscreen => {
            app.dashboard.fullscreen = !app.dashboard.fullscreen;
            Task::none()
        }
        DashboardMessage::ToggleOriginal(show) => {
            app.dashboard.viewer.show_original = show;
            Task::none()
        }
        DashboardMessage::ToggleAnnotations(show) => {
            app.dashboard.viewer.show_annotations = show;
            Task::none()
        }
        DashboardMessage::ZoomIn => {
            app.dashboard.viewer.zoom_in();
            Task::none()
        }
        DashboardMessage::ZoomOut => {
            app.dashboard.viewer.zoom_out();
            Task::none()
        }
        DashboardMessage::SetZoom(zoom) => {
            app.dashboard.viewer.set_zoom(zoom);
            Task::none()
        }
        DashboardMessage::SetContrast(contrast) => {
            app.dashboard.viewer.set_contrast(contrast);
            Task::none()
        }
        DashboardMessage::SetBrightness(brightness) => {
            app.dashboard.viewer.set_brightness(brightness);
            Task::none()
        }
        DashboardMessage::ResetViewer => {
            app.dashboard.viewer.reset();
            Task::none()
        }
        DashboardMessage::ExportReport => {
            if app.dashboard.session.report().is_none() {
                return Task::none();
            }
            let export_dir = app.config.export_dir();
            Task::perform(pick_report_path(export_dir), |path| {
                Message::Dashboard(DashboardMessage::ExportPathPicked(path))
            })
        }
        DashboardMessage::ExportPathPicked(Some(path)) => {
            let written = app.dashboard.session.report().map(|r| r.write_json(&path));
            match written {
                Some(Ok(())) => {
                    app.dashboard.status = format!("Report exported to {}", path.display());
                }
                Some(Err(e)) => {
                    log::error!("Report export failed: {}", e);
                    app.dashboard.status = format!("Export failed: {}", e);
                }
                None => {}
            }
            Task::none()
        }
        DashboardMessage::ExportPathPicked(None) => Task::none(),
        DashboardMessage::Logout => {
            log::info!("Logging out");
            app.login.flow.reset();
            app.screen = Screen::Landing;
            Task::none()
        }
    }
}

/// Handle a file dropped onto the dashboard window
///
/// Takes the same path as the picker, so a drop always resets progress and
/// discards the previous result.
pub fn handle_dropped(app: &mut NeuroScanApp, path: PathBuf) -> Task<Message> {
    select_scan(app, &path);
    Task::none()
}

fn select_scan(app: &mut NeuroScanApp, path: &std::path::Path) {
    let scan = SelectedScan::from_path(path);
    app.dashboard.status = format!("Uploading {}...", scan.file_name);
    app.dashboard.session.select_scan(scan);
    app.dashboard.active_tab = DashboardTab::Upload;
    app.dashboard.fullscreen = false;
}

/// Show the native scan picker
async fn pick_scan() -> Option<PathBuf> {
    AsyncFileDialog::new()
        .set_title("Select MRI Scan")
        .add_filter("Scan images", &SCAN_EXTENSIONS)
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Show the native save dialog for the JSON report
async fn pick_report_path(export_dir: PathBuf) -> Option<PathBuf> {
    AsyncFileDialog::new()
        .set_title("Export Analysis Report")
        .set_directory(export_dir)
        .set_file_name("neuroscan-report.json")
        .save_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}
