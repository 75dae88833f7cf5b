//! Network layer: REST DTOs and fetch helpers for the backend API.

pub mod api;
pub mod types;
