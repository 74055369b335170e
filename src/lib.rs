pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use services::foods::FoodStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FoodStore>,
}

impl AppState {
    pub fn new(store: impl FoodStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
