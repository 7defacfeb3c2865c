//! Message handlers for NeuroScanApp
//!
//! Each handler module is responsible for a specific category of messages.
//! Handlers receive `&mut NeuroScanApp` and return `Task<Message>`.

pub mod auth;
pub mod dashboard;
pub mod tick;
