//! Medical Record Requests
//!
//! Frontend bindings for the /medicalrecords resource.

use chrono::NaiveDate;
use resource_sync::SyncResult;
use serde::Serialize;

use crate::models::MedicalRecord;

// ========================
// Argument Structs
// ========================

/// Payload for creating or updating a medical record
#[derive(Serialize)]
pub struct MedicalRecordArgs {
    pub user_id: i64,
    pub pet_id: i64,
    pub vet_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,
}

// ========================
// Requests
// ========================

pub async fn list_medical_records(user_id: i64) -> SyncResult<Vec<MedicalRecord>> {
    super::get_json(&format!("/medicalrecords?user_id={}", user_id)).await
}

pub async fn create_medical_record(args: MedicalRecordArgs) -> SyncResult<MedicalRecord> {
    super::post_json("/medicalrecords", &args).await
}

pub async fn update_medical_record(
    id: i64,
    args: MedicalRecordArgs,
) -> SyncResult<MedicalRecord> {
    super::put_json(&format!("/medicalrecords/{}", id), &args).await
}

pub async fn delete_medical_record(id: i64) -> SyncResult<()> {
    super::delete(&format!("/medicalrecords/{}", id)).await
}
