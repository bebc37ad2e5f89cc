//! Database entities

pub mod service;
