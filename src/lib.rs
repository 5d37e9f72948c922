//! JSON CRUD service for mobile records over a single-table SQLite database.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::ServiceConfig;
pub use error::{AppError, ConfigError};
pub use model::{Mobile, MobileInput};
pub use routes::{app, common_routes, mobile_routes};
pub use state::AppState;
pub use store::MobileStore;
