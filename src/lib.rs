pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod repository;
pub mod services;
pub mod state;
pub mod store;
pub mod validation;

pub use api::router;
pub use config::Config;
pub use error::AppError;
pub use state::AppState;
