//! Appointment Requests
//!
//! Frontend bindings for the /appointments resource.

use chrono::{NaiveDate, NaiveTime};
use resource_sync::SyncResult;
use serde::Serialize;

use crate::models::{flexible_time, Appointment};

// ========================
// Argument Structs
// ========================

/// Payload for scheduling or rescheduling an appointment
#[derive(Serialize)]
pub struct AppointmentArgs {
    pub user_id: i64,
    pub pet_id: i64,
    pub vet_id: i64,
    pub reason: String,
    pub date: NaiveDate,
    #[serde(with = "flexible_time")]
    pub time: NaiveTime,
    pub location: String,
    pub notes: Option<String>,
}

// ========================
// Requests
// ========================

pub async fn list_appointments(user_id: i64) -> SyncResult<Vec<Appointment>> {
    super::get_json(&format!("/appointments?user_id={}", user_id)).await
}

pub async fn create_appointment(args: AppointmentArgs) -> SyncResult<Appointment> {
    super::post_json("/appointments", &args).await
}

pub async fn update_appointment(id: i64, args: AppointmentArgs) -> SyncResult<Appointment> {
    super::put_json(&format!("/appointments/{}", id), &args).await
}

pub async fn delete_appointment(id: i64) -> SyncResult<()> {
    super::delete(&format!("/appointments/{}", id)).await
}
