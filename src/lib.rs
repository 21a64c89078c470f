pub mod catalog;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod routes;

use crate::catalog::Catalog;

/// Shared application state, built once in `main` and handed to handlers
/// through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
}
