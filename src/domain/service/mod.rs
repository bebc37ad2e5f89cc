//! Service aggregate

mod model;

pub use model::{DashboardStats, Service, ServicePatch, ServiceStatus, TypeCount};
