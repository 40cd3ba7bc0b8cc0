//! Mantenedores: read-only REST backend for maintainer (master-data) tables.

pub mod config;
pub mod constants;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError, StoreError};
pub use response::Envelope;
pub use routes::{app, maintainer_routes, system_routes};
pub use state::AppState;
pub use store::{MaintainerStore, MaintainerTable, PgStore};
