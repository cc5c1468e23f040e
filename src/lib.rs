//! Library Catalogue
//!
//! An in-memory catalogue of book records behind a validating service layer,
//! driven from an interactive console menu.

use std::sync::Arc;

pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared by the front end
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
