//! Application messages for the NeuroScan demo
//!
//! All message types that can be dispatched in the application.

use std::path::PathBuf;

use super::access::AccessMessage;
use super::app::Screen;
use super::dashboard::DashboardMessage;
use super::login::LoginMessage;

/// Messages that can be sent to the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Tick for the simulated upload/processing progress
    Tick,
    /// Finalize delay elapsed for the tagged session epoch
    AnalysisFinalized(u64),
    /// Switch to another screen
    Navigate(Screen),
    /// A file was dropped onto the window
    FileDropped(PathBuf),
    /// Login screen message
    Login(LoginMessage),
    /// Access-request screen message
    Access(AccessMessage),
    /// Dashboard message
    Dashboard(DashboardMessage),
}
