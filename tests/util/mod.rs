//! Helpers shared by the integration tests.

use axum::response::Response;
use pokemon_review::server::model::app::AppState;
use review_test_utils::{TestContext, TestError};
use serde::de::DeserializeOwned;

/// Extension trait for TestContext to build the server's AppState
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }
}

/// Read a response body and deserialize it as JSON
pub async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, TestError> {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    Ok(serde_json::from_slice(&bytes)?)
}
