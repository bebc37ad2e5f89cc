//! REST API module
//!
//! HTTP endpoints for the service registry: login, CRUD, dashboard
//! statistics and document exports, with Swagger documentation.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod validated_json;

pub use error::ApiError;
pub use router::create_api_router;
pub use validated_json::ValidatedJson;
