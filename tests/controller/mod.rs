mod activity;
mod admin;
mod auth;
mod causes;

use axum::response::Response;

/// Reads a JSON response body into a deserializable value.
pub async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");

    serde_json::from_slice(&bytes).expect("response body was not valid JSON")
}
