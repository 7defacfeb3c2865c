//! UI module for the NeuroScan demo
//!
//! Built with iced - a cross-platform GUI library for Rust.
//! One screen is visible at a time; each screen has its own view state and
//! message enum, routed through the top-level [`message::Message`].

pub mod access;
pub mod app;
pub mod dashboard;
pub mod handlers;
pub mod landing;
pub mod login;
pub mod message;
pub mod theme;
pub mod viewer_panel;

pub use app::NeuroScanApp;
