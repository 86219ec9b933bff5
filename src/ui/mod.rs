//! GUI panels and application state.

pub mod app;
pub mod components;
pub mod consent_panel;
pub mod create_panel;
pub mod edit_panel;
pub mod home;
pub mod login_panel;
pub mod roles_panel;
pub mod show_panel;

pub use app::{App, Screen};
