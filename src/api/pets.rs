//! Pet Requests
//!
//! Frontend bindings for the /pets resource.

use chrono::NaiveDate;
use resource_sync::SyncResult;
use serde::Serialize;

use crate::models::Pet;

// ========================
// Argument Structs
// ========================

/// Payload for creating or updating a pet
#[derive(Serialize)]
pub struct PetArgs {
    pub user_id: i64,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub dob: NaiveDate,
    pub weight: f64,
}

// ========================
// Requests
// ========================

pub async fn list_pets(user_id: i64) -> SyncResult<Vec<Pet>> {
    super::get_json(&format!("/pets?user_id={}", user_id)).await
}

pub async fn create_pet(args: PetArgs) -> SyncResult<Pet> {
    super::post_json("/pets", &args).await
}

pub async fn update_pet(id: i64, args: PetArgs) -> SyncResult<Pet> {
    super::put_json(&format!("/pets/{}", id), &args).await
}

pub async fn delete_pet(id: i64) -> SyncResult<()> {
    super::delete(&format!("/pets/{}", id)).await
}
