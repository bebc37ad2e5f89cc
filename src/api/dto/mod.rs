//! API data transfer objects

pub mod common;
pub mod service;

pub use common::MessageResponse;
pub use service::{
    CreateServiceRequest, DashboardStatsDto, ServiceDto, ServiceTypeCountDto,
    UpdateServiceRequest,
};
