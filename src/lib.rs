//! # Gallax Hizmet Takip
//!
//! Record-keeping service for recurring external services (domains,
//! hosting, websites, consulting contracts) with renewal dates and
//! annual fees.
//!
//! ## Architecture
//!
//! - **domain**: core entities and types
//! - **infrastructure**: persistence (SeaORM database, in-memory store)
//! - **auth**: fixed-credential login and bearer-token request gate
//! - **api**: REST API with Swagger documentation
//! - **export**: Excel and PDF renderers of the record set
//! - **config**: TOML configuration

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod export;
pub mod infrastructure;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, DatabaseStorage, InMemoryStorage, Storage};

// Re-export API router
pub use api::create_api_router;
