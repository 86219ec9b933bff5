pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod ui;

pub use error::{AppError, Result};
