//! Vet Requests
//!
//! The vet directory is read-only; there is only the listing call.

use resource_sync::SyncResult;

use crate::models::Vet;

pub async fn list_vets() -> SyncResult<Vec<Vet>> {
    super::get_json("/vets").await
}
