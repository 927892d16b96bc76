//! Library REST API
//!
//! A small REST JSON service exposing CRUD operations over an in-memory
//! catalog of books.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the state from a configuration, seeding the store if enabled
    pub fn new(config: AppConfig) -> Self {
        let repository = repository::Repository::new(config.store.initial_books());
        Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(repository)),
        }
    }
}
