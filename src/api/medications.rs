//! Medication Requests
//!
//! Frontend bindings for the /medications resource.

use chrono::NaiveDate;
use resource_sync::SyncResult;
use serde::Serialize;

use crate::models::{ongoing_date, Medication};

// ========================
// Argument Structs
// ========================

/// Payload for creating or updating a medication. A missing end date is
/// serialized as `null` (never an empty string), meaning ongoing.
#[derive(Serialize)]
pub struct MedicationArgs {
    pub user_id: i64,
    pub pet_id: i64,
    pub name: String,
    pub dosage: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    #[serde(with = "ongoing_date")]
    pub end_date: Option<NaiveDate>,
    pub side_effects: Option<String>,
    pub instructions: Option<String>,
    pub refill: bool,
}

// ========================
// Requests
// ========================

pub async fn list_medications(user_id: i64) -> SyncResult<Vec<Medication>> {
    super::get_json(&format!("/medications?user_id={}", user_id)).await
}

pub async fn create_medication(args: MedicationArgs) -> SyncResult<Medication> {
    super::post_json("/medications", &args).await
}

pub async fn update_medication(id: i64, args: MedicationArgs) -> SyncResult<Medication> {
    super::put_json(&format!("/medications/{}", id), &args).await
}

pub async fn delete_medication(id: i64) -> SyncResult<()> {
    super::delete(&format!("/medications/{}", id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ongoing_medication_posts_null_end_date() {
        let args = MedicationArgs {
            user_id: 4,
            pet_id: 2,
            name: "Apoquel".into(),
            dosage: "16mg".into(),
            description: None,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            end_date: None,
            side_effects: Some("Drowsiness".into()),
            instructions: Some("With food".into()),
            refill: true,
        };
        let value = serde_json::to_value(&args).unwrap();
        assert_eq!(value["end_date"], serde_json::Value::Null);
        assert_ne!(value["end_date"], "");
        assert_eq!(value["refill"], true);
    }
}
