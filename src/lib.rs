//! Bookcode server
//!
//! Recognizes the JAN/ISBN and C-code barcodes printed on Japanese books,
//! decodes the C-code classification and looks the ISBN up with several
//! bibliographic metadata providers, over a REST JSON API.

use std::sync::Arc;

pub mod api;
pub mod barcode;
pub mod classification;
pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(services: services::Services) -> Self {
        Self {
            services: Arc::new(services),
        }
    }
}
