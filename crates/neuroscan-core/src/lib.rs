//! NeuroScan Core - Shared library for the NeuroScan demo application
//!
//! Everything that can change state without touching a widget lives here:
//! the simulated upload/analysis pipeline, viewer display settings, the
//! single-shot auth flows, the canned analysis report, and config I/O.
//! The GUI crate only renders this state and feeds it timer ticks.

pub mod auth;
pub mod config;
pub mod report;
pub mod scan;
pub mod session;
pub mod viewer;

pub use report::AnalysisReport;
pub use scan::SelectedScan;
pub use session::{ScanSession, SessionPhase};
pub use viewer::ViewerSettings;
