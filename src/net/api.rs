//! REST API helpers for the workshop administration backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since the API is only
//! reachable with the browser's session cookie.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so a failed fetch renders
//! as an empty/error table rather than crashing hydration.

#![allow(clippy::unused_async)]

use super::types::TrainingRequest;

/// Fetch the training requests listing from `/api/v1/training-requests`.
/// Returns `None` if the request fails or on the server.
pub async fn fetch_training_requests() -> Option<Vec<TrainingRequest>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/v1/training-requests")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            log::warn!("training requests fetch failed: {}", resp.status());
            return None;
        }
        resp.json::<Vec<TrainingRequest>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
