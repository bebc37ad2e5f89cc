//! Infrastructure layer - external concerns

pub mod database;
pub mod storage;

pub use database::{init_database, DatabaseConfig, DatabaseStorage};
pub use storage::{InMemoryStorage, Storage, MAX_LIST_SERVICES};
