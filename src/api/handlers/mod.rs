//! API Handlers

pub mod auth;
pub mod dashboard;
pub mod exports;
pub mod health;
pub mod services;

pub use services::AppState;
