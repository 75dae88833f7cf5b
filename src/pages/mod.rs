//! Top-level page components, one per route.

pub mod requests;
