//! Frontend Models
//!
//! Data structures matching backend entities, plus the display/query
//! helpers the pages share (pet-name lookup, balance totals, date
//! formatting, vet search).

use chrono::{Datelike, NaiveDate, NaiveTime};
use resource_sync::Entity;
use serde::{Deserialize, Serialize};

/// Identity resolved from the bearer token (matches backend /user)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// Pet data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub dob: NaiveDate,
    /// Weight in lbs
    pub weight: f64,
}

/// Vet data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vet {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub information: String,
}

/// Appointment data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
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

/// Billing entry (matches backend; the wire key for the category is `type`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingEntry {
    pub id: i64,
    pub user_id: i64,
    pub pet_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    pub description: Option<String>,
    pub date: NaiveDate,
}

/// Medication data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub id: i64,
    pub user_id: i64,
    pub pet_id: i64,
    pub name: String,
    pub dosage: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    /// None means the medication is ongoing
    #[serde(with = "ongoing_date")]
    pub end_date: Option<NaiveDate>,
    pub side_effects: Option<String>,
    pub instructions: Option<String>,
    pub refill: bool,
}

/// Medical record (matches backend; the wire key for the category is `type`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: i64,
    pub user_id: i64,
    pub pet_id: i64,
    pub vet_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,
}

impl Entity for Pet {
    type Id = i64;
    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Entity for Vet {
    type Id = i64;
    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Entity for Appointment {
    type Id = i64;
    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Entity for BillingEntry {
    type Id = i64;
    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Entity for Medication {
    type Id = i64;
    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Entity for MedicalRecord {
    type Id = i64;
    fn id(&self) -> Self::Id {
        self.id
    }
}

// ========================
// Option lists shared by the forms
// ========================

/// Species offered by the pet form; "Other" switches to free text
pub const SPECIES_OPTIONS: &[&str] = &[
    "Dog", "Cat", "Bird", "Reptile", "Horse", "Hamster", "Fish", "Other",
];

/// Billing categories shown as balance cards
pub const BALANCE_TYPES: &[&str] = &["Appointment", "Medication", "Vaccine"];

/// Medical record categories shown as record cards
pub const RECORD_TYPES: &[&str] = &["Appointment", "Medication", "Vaccine"];

/// Visit reasons offered by the appointment form
pub const VISIT_REASONS: &[&str] = &[
    "Routine Checkup",
    "Vaccination",
    "Surgery Consultation",
    "Dental Cleaning",
    "Behavioral Issues",
    "Skin Problems",
    "Other",
];

/// Clinic locations offered by the appointment form
pub const CLINIC_LOCATIONS: &[&str] = &[
    "NinerPets Clinic - Main Campus",
    "NinerPets Clinic - University City",
];

// ========================
// Display helpers
// ========================

/// Pet name for an id, for lists that join against the pets collection
pub fn pet_name(pets: &[Pet], pet_id: i64) -> String {
    pets.iter()
        .find(|p| p.id == pet_id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Vet name for an id
pub fn vet_name(vets: &[Vet], vet_id: i64) -> String {
    vets.iter()
        .find(|v| v.id == vet_id)
        .map(|v| v.name.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Sum of billing entries of one category, for the balance cards
pub fn billing_total(entries: &[BillingEntry], kind: &str) -> f64 {
    entries
        .iter()
        .filter(|e| e.kind == kind)
        .map(|e| e.price)
        .sum()
}

/// Dollar string with two decimals
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// `M/D/YYYY`, the short format the lists use
pub fn format_date_short(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// End-date column text; a missing end date reads as ongoing
pub fn format_end_date(end_date: Option<NaiveDate>) -> String {
    match end_date {
        Some(date) => format_date_short(date),
        None => "Ongoing".to_string(),
    }
}

/// Case-insensitive name/specialty match for the vet search panel
pub fn vet_matches(vet: &Vet, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    vet.name.to_lowercase().contains(&query) || vet.specialty.to_lowercase().contains(&query)
}

/// The species actually stored: the free-text value when "Other" is picked
pub fn effective_species(species: &str, other_species: &str) -> String {
    if species == "Other" {
        other_species.trim().to_string()
    } else {
        species.to_string()
    }
}

// ========================
// Serde helpers for quirky wire fields
// ========================

/// Medication end dates: `null` on the wire means ongoing. The legacy
/// backend sometimes sends the literal string "Ongoing" (or ""), which must
/// read as None; serialization is strictly `null`, never an empty string.
pub mod ongoing_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") | Some("Ongoing") => Ok(None),
            Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// Appointment times: the backend round-trips `HH:MM:SS`, browser time
/// inputs produce `HH:MM`; both deserialize, serialization is `HH:MM:SS`.
pub mod flexible_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format("%H:%M:%S").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M"))
            .map_err(serde::de::Error::custom)
    }
}

/// Clock display for appointment lists (`h:MM AM/PM`)
pub fn format_time_12h(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pet(id: i64, name: &str) -> Pet {
        Pet {
            id,
            user_id: 4,
            name: name.to_string(),
            species: "Dog".to_string(),
            breed: "Beagle".to_string(),
            dob: NaiveDate::from_ymd_opt(2020, 3, 9).unwrap(),
            weight: 22.5,
        }
    }

    #[test]
    fn test_medication_end_date_null_means_ongoing() {
        let raw = json!({
            "id": 1, "user_id": 4, "pet_id": 2,
            "name": "Apoquel", "dosage": "16mg",
            "description": null,
            "start_date": "2025-01-10",
            "end_date": null,
            "side_effects": "Drowsiness",
            "instructions": "With food",
            "refill": true
        });
        let med: Medication = serde_json::from_value(raw).unwrap();
        assert_eq!(med.end_date, None);
        assert_eq!(format_end_date(med.end_date), "Ongoing");
    }

    #[test]
    fn test_medication_tolerates_legacy_ongoing_string() {
        for legacy in ["\"Ongoing\"", "\"\""] {
            let raw = format!(
                r#"{{"id":1,"user_id":4,"pet_id":2,"name":"Apoquel","dosage":"16mg",
                    "description":null,"start_date":"2025-01-10","end_date":{legacy},
                    "side_effects":null,"instructions":null,"refill":false}}"#
            );
            let med: Medication = serde_json::from_str(&raw).unwrap();
            assert_eq!(med.end_date, None);
        }
    }

    #[test]
    fn test_medication_serializes_missing_end_date_as_null() {
        let med = Medication {
            id: 1,
            user_id: 4,
            pet_id: 2,
            name: "Apoquel".into(),
            dosage: "16mg".into(),
            description: None,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            end_date: None,
            side_effects: None,
            instructions: None,
            refill: false,
        };
        let value = serde_json::to_value(&med).unwrap();
        assert_eq!(value["end_date"], serde_json::Value::Null);
    }

    #[test]
    fn test_appointment_time_accepts_both_formats() {
        let base = json!({
            "id": 3, "user_id": 4, "pet_id": 2, "vet_id": 1,
            "reason": "Routine Checkup", "date": "2025-10-01",
            "time": "14:30:00", "location": "NinerPets Clinic - Main Campus",
            "notes": null
        });
        let long: Appointment = serde_json::from_value(base.clone()).unwrap();

        let mut short_raw = base;
        short_raw["time"] = json!("14:30");
        let short: Appointment = serde_json::from_value(short_raw).unwrap();

        assert_eq!(long.time, short.time);
        let back = serde_json::to_value(&long).unwrap();
        assert_eq!(back["time"], "14:30:00");
    }

    #[test]
    fn test_billing_kind_uses_the_wire_key_type() {
        let raw = json!({
            "id": 5, "user_id": 4, "pet_id": 2, "type": "Vaccine",
            "price": 45.0, "description": "Rabies booster", "date": "2025-09-12"
        });
        let entry: BillingEntry = serde_json::from_value(raw).unwrap();
        assert_eq!(entry.kind, "Vaccine");
        let back = serde_json::to_value(&entry).unwrap();
        assert!(back.get("type").is_some());
        assert!(back.get("kind").is_none());
    }

    #[test]
    fn test_billing_totals_by_category() {
        let entries = vec![
            BillingEntry {
                id: 1,
                user_id: 4,
                pet_id: 2,
                kind: "Vaccine".into(),
                price: 45.0,
                description: None,
                date: NaiveDate::from_ymd_opt(2025, 9, 12).unwrap(),
            },
            BillingEntry {
                id: 2,
                user_id: 4,
                pet_id: 2,
                kind: "Vaccine".into(),
                price: 30.5,
                description: None,
                date: NaiveDate::from_ymd_opt(2025, 9, 20).unwrap(),
            },
            BillingEntry {
                id: 3,
                user_id: 4,
                pet_id: 2,
                kind: "Appointment".into(),
                price: 80.0,
                description: None,
                date: NaiveDate::from_ymd_opt(2025, 9, 25).unwrap(),
            },
        ];
        assert_eq!(billing_total(&entries, "Vaccine"), 75.5);
        assert_eq!(billing_total(&entries, "Appointment"), 80.0);
        assert_eq!(billing_total(&entries, "Medication"), 0.0);
        assert_eq!(format_price(billing_total(&entries, "Vaccine")), "$75.50");
    }

    #[test]
    fn test_pet_and_vet_name_lookup_fall_back_to_unknown() {
        let pets = vec![pet(2, "Bella")];
        assert_eq!(pet_name(&pets, 2), "Bella");
        assert_eq!(pet_name(&pets, 99), "Unknown");

        let vets = vec![Vet {
            id: 1,
            name: "Dr. Susan Farley".into(),
            specialty: "Dog Vet".into(),
            information: "Canine specialist".into(),
        }];
        assert_eq!(vet_name(&vets, 1), "Dr. Susan Farley");
        assert_eq!(vet_name(&vets, 7), "Unknown");
    }

    #[test]
    fn test_vet_search_matches_name_or_specialty() {
        let vet = Vet {
            id: 1,
            name: "Dr. Leah Zimmerman".into(),
            specialty: "Exotic Pets".into(),
            information: "".into(),
        };
        assert!(vet_matches(&vet, "zimmer"));
        assert!(vet_matches(&vet, "EXOTIC"));
        assert!(vet_matches(&vet, ""));
        assert!(!vet_matches(&vet, "reptile"));
    }

    #[test]
    fn test_effective_species_substitutes_other() {
        assert_eq!(effective_species("Dog", ""), "Dog");
        assert_eq!(effective_species("Other", " Ferret "), "Ferret");
        assert_eq!(effective_species("Other", ""), "");
    }

    #[test]
    fn test_short_date_format() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(format_date_short(date), "3/9/2025");
    }

    #[test]
    fn test_clock_display_drops_leading_zero() {
        let afternoon = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
        assert_eq!(format_time_12h(afternoon), "2:30 PM");
        let morning = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
        assert_eq!(format_time_12h(morning), "9:05 AM");
    }
}
