//! REST DTOs for the training-requests endpoint.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads so serde can parse them
//! without adapters. Identifiers stay strings end to end: the client never
//! interprets them, it only matches them against checkboxes, storage
//! buckets, and query parameters.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One training request row as rendered in the requests table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingRequest {
    /// Server-assigned identifier, unique within the table.
    pub id: String,
    /// Applicant's display name.
    pub person: String,
    /// Applicant's email address; empty when not on file.
    #[serde(default)]
    pub email: String,
    /// Review state label (e.g. `"Pending"`, `"Accepted"`).
    pub state: String,
    /// Training group the applicant registered under, when any.
    #[serde(default)]
    pub group_name: Option<String>,
}
