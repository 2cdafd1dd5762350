//! Bookshed Lending Inventory Service
//!
//! A small Rust REST API server managing an in-memory book inventory:
//! catalog listing, lookup by identifier, registration, and quantity
//! adjustment through checkout/return.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
