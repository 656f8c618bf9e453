//! Billing Requests
//!
//! Frontend bindings for the /billing resource.

use chrono::NaiveDate;
use resource_sync::SyncResult;
use serde::Serialize;

use crate::models::BillingEntry;

// ========================
// Argument Structs
// ========================

/// Payload for creating or updating a billing entry; the category goes out
/// under the wire key `type`
#[derive(Serialize)]
pub struct BillingArgs {
    pub user_id: i64,
    pub pet_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    pub description: Option<String>,
    pub date: NaiveDate,
}

// ========================
// Requests
// ========================

pub async fn list_billing(user_id: i64) -> SyncResult<Vec<BillingEntry>> {
    super::get_json(&format!("/billing?user_id={}", user_id)).await
}

pub async fn create_billing(args: BillingArgs) -> SyncResult<BillingEntry> {
    super::post_json("/billing", &args).await
}

pub async fn update_billing(id: i64, args: BillingArgs) -> SyncResult<BillingEntry> {
    super::put_json(&format!("/billing/{}", id), &args).await
}

pub async fn delete_billing(id: i64) -> SyncResult<()> {
    super::delete(&format!("/billing/{}", id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billing_payload_uses_the_wire_key_type() {
        let args = BillingArgs {
            user_id: 4,
            pet_id: 2,
            kind: "Vaccine".into(),
            price: 45.0,
            description: None,
            date: NaiveDate::from_ymd_opt(2025, 9, 12).unwrap(),
        };
        let value = serde_json::to_value(&args).unwrap();
        assert_eq!(value["type"], "Vaccine");
        assert_eq!(value["date"], "2025-09-12");
        assert_eq!(value["description"], serde_json::Value::Null);
    }
}
