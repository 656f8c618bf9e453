//! REST API Wrappers
//!
//! Thin async bindings to the NinerPets backend, organized by resource.
//! All requests go through the helpers here so status handling and the
//! `{"error": ...}` body convention are mapped into `SyncError` in one place.

mod appointments;
mod auth;
mod billing;
mod medications;
mod pets;
mod records;
mod vets;

use resource_sync::{SyncError, SyncResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

// Re-export all public items
pub use appointments::*;
pub use auth::*;
pub use billing::*;
pub use medications::*;
pub use pets::*;
pub use records::*;
pub use vets::*;

/// Backend base URL, overridable at build time
pub fn api_base() -> &'static str {
    option_env!("NINER_PETS_API").unwrap_or("http://localhost:5000")
}

fn url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Error payload the backend sends alongside non-2xx statuses
#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

fn transport_error(err: reqwest::Error) -> SyncError {
    SyncError::network(err.status().map(|s| s.as_u16()), err.to_string())
}

async fn error_from_response(resp: reqwest::Response) -> SyncError {
    let status = resp.status().as_u16();
    if status == 401 {
        return SyncError::Unauthenticated;
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("Request failed with status {}", status),
    };
    SyncError::network(Some(status), message)
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> SyncResult<T> {
    if resp.status().is_success() {
        resp.json::<T>().await.map_err(transport_error)
    } else {
        Err(error_from_response(resp).await)
    }
}

// ========================
// Request helpers
// ========================

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> SyncResult<T> {
    let resp = reqwest::Client::new()
        .get(url(path))
        .send()
        .await
        .map_err(transport_error)?;
    read_json(resp).await
}

pub(crate) async fn get_json_auth<T: DeserializeOwned>(
    path: &str,
    token: &str,
) -> SyncResult<T> {
    let resp = reqwest::Client::new()
        .get(url(path))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .map_err(transport_error)?;
    read_json(resp).await
}

pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> SyncResult<T> {
    let resp = reqwest::Client::new()
        .post(url(path))
        .json(body)
        .send()
        .await
        .map_err(transport_error)?;
    read_json(resp).await
}

pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> SyncResult<T> {
    let resp = reqwest::Client::new()
        .put(url(path))
        .json(body)
        .send()
        .await
        .map_err(transport_error)?;
    read_json(resp).await
}

pub(crate) async fn delete(path: &str) -> SyncResult<()> {
    let resp = reqwest::Client::new()
        .delete(url(path))
        .send()
        .await
        .map_err(transport_error)?;
    if resp.status().is_success() {
        Ok(())
    } else {
        Err(error_from_response(resp).await)
    }
}
