//! Form Draft State
//!
//! A dialog's in-progress field values plus the open/closed state machine:
//! Closed -> Open(Creating) or Open(Editing(id)) -> closed again on cancel
//! or successful submit. A failed submit is deliberately not a transition,
//! so the dialog stays open with every field intact.
//!
//! Fields are stored as strings exactly as typed; typed values are parsed
//! out when the payload is assembled, after schema validation has passed.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};

use crate::error::ValidationError;

/// String field values keyed by schema field name
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormDraft {
    values: BTreeMap<&'static str, String>,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a draft from (field, value) pairs
    pub fn from_pairs(pairs: &[(&'static str, &str)]) -> Self {
        let mut draft = Self::new();
        for &(name, value) in pairs {
            draft.set(name, value);
        }
        draft
    }

    pub fn set(&mut self, name: &'static str, value: impl Into<String>) {
        self.values.insert(name, value.into());
    }

    /// The raw value, empty string when the field was never set
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn is_blank(&self, name: &str) -> bool {
        self.get(name).trim().is_empty()
    }

    // ========================
    // Typed getters for payload assembly
    // ========================

    /// Parse an ISO `YYYY-MM-DD` date field
    pub fn parse_date(
        &self,
        name: &'static str,
        label: &'static str,
    ) -> Result<NaiveDate, ValidationError> {
        NaiveDate::parse_from_str(self.get(name).trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::Invalid { field: name, label })
    }

    /// Like `parse_date`, but an empty field means "not set"
    pub fn parse_date_opt(
        &self,
        name: &'static str,
        label: &'static str,
    ) -> Result<Option<NaiveDate>, ValidationError> {
        if self.is_blank(name) {
            return Ok(None);
        }
        self.parse_date(name, label).map(Some)
    }

    /// Parse a time field; browser time inputs emit `HH:MM`, the backend
    /// round-trips `HH:MM:SS`, so both are accepted
    pub fn parse_time(
        &self,
        name: &'static str,
        label: &'static str,
    ) -> Result<NaiveTime, ValidationError> {
        let raw = self.get(name).trim().to_string();
        NaiveTime::parse_from_str(&raw, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M"))
            .map_err(|_| ValidationError::Invalid { field: name, label })
    }

    pub fn parse_f64(
        &self,
        name: &'static str,
        label: &'static str,
    ) -> Result<f64, ValidationError> {
        self.get(name)
            .trim()
            .parse()
            .map_err(|_| ValidationError::NotANumber { field: name, label })
    }

    /// Parse a select-backed id field (selects post the id as a string)
    pub fn parse_id(
        &self,
        name: &'static str,
        label: &'static str,
    ) -> Result<i64, ValidationError> {
        self.get(name)
            .trim()
            .parse()
            .map_err(|_| ValidationError::Invalid { field: name, label })
    }

    /// The trimmed value as an optional payload field, empty becoming None
    pub fn get_opt(&self, name: &str) -> Option<String> {
        let value = self.get(name).trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

/// Which dialog is open, and for which entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode<K: Copy> {
    Closed,
    Creating,
    Editing(K),
}

/// A dialog's mode plus its field values
#[derive(Debug, Clone, PartialEq)]
pub struct DraftState<K: Copy> {
    mode: DraftMode<K>,
    fields: FormDraft,
}

impl<K: Copy> Default for DraftState<K> {
    fn default() -> Self {
        Self::closed()
    }
}

impl<K: Copy> DraftState<K> {
    pub fn closed() -> Self {
        Self {
            mode: DraftMode::Closed,
            fields: FormDraft::new(),
        }
    }

    /// Open the dialog in create mode with the given field defaults
    pub fn open_create(&mut self, defaults: FormDraft) {
        self.mode = DraftMode::Creating;
        self.fields = defaults;
    }

    /// Open the dialog in edit mode, seeded from a snapshot of the entity.
    /// The collection itself is untouched until the submit succeeds.
    pub fn open_edit(&mut self, key: K, snapshot: FormDraft) {
        self.mode = DraftMode::Editing(key);
        self.fields = snapshot;
    }

    /// Close and discard whatever was typed
    pub fn cancel(&mut self) {
        *self = Self::closed();
    }

    /// Close after a successful submit, resetting the fields
    pub fn submit_succeeded(&mut self) {
        *self = Self::closed();
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.mode, DraftMode::Closed)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, DraftMode::Editing(_))
    }

    pub fn editing_key(&self) -> Option<K> {
        match self.mode {
            DraftMode::Editing(key) => Some(key),
            _ => None,
        }
    }

    pub fn mode(&self) -> DraftMode<K> {
        self.mode
    }

    pub fn fields(&self) -> &FormDraft {
        &self.fields
    }

    pub fn set_field(&mut self, name: &'static str, value: impl Into<String>) {
        self.fields.set(name, value);
    }

    /// Owned copy of a field value, so reads can escape a signal borrow
    pub fn field(&self, name: &str) -> String {
        self.fields.get(name).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_field_reads_as_empty() {
        let draft = FormDraft::new();
        assert_eq!(draft.get("name"), "");
        assert!(draft.is_blank("name"));
    }

    #[test]
    fn test_from_pairs_seeds_values() {
        let draft = FormDraft::from_pairs(&[("species", "Dog"), ("name", "Rex")]);
        assert_eq!(draft.get("species"), "Dog");
        assert_eq!(draft.get("name"), "Rex");
    }

    #[test]
    fn test_set_accepts_str_and_string() {
        let mut draft = FormDraft::new();
        let refill = true;
        draft.set("refill", if refill { "yes" } else { "no" });
        draft.set("name", String::from("Apoquel"));
        assert_eq!(draft.get("refill"), "yes");
        assert_eq!(draft.get("name"), "Apoquel");
    }

    #[test]
    fn test_parse_date_and_optional_date() {
        let mut draft = FormDraft::new();
        draft.set("dob", "2023-06-15");
        draft.set("end_date", "  ");
        assert_eq!(
            draft.parse_date("dob", "Date of Birth").unwrap(),
            NaiveDate::from_ymd_opt(2023, 6, 15).unwrap()
        );
        assert_eq!(draft.parse_date_opt("end_date", "End Date").unwrap(), None);

        draft.set("dob", "15/06/2023");
        assert!(draft.parse_date("dob", "Date of Birth").is_err());
    }

    #[test]
    fn test_parse_time_accepts_browser_and_backend_formats() {
        let mut draft = FormDraft::new();
        draft.set("time", "14:30");
        let short = draft.parse_time("time", "Time").unwrap();
        draft.set("time", "14:30:00");
        let long = draft.parse_time("time", "Time").unwrap();
        assert_eq!(short, long);

        draft.set("time", "half past two");
        assert!(draft.parse_time("time", "Time").is_err());
    }

    #[test]
    fn test_parse_id_and_f64() {
        let mut draft = FormDraft::new();
        draft.set("pet_id", "42");
        draft.set("weight", "12.5");
        assert_eq!(draft.parse_id("pet_id", "Pet").unwrap(), 42);
        assert_eq!(draft.parse_f64("weight", "Weight").unwrap(), 12.5);

        draft.set("pet_id", "");
        assert!(draft.parse_id("pet_id", "Pet").is_err());
    }

    #[test]
    fn test_get_opt_trims_and_drops_empty() {
        let mut draft = FormDraft::new();
        draft.set("notes", "  bring records  ");
        assert_eq!(draft.get_opt("notes"), Some("bring records".to_string()));
        draft.set("notes", "   ");
        assert_eq!(draft.get_opt("notes"), None);
    }

    #[test]
    fn test_dialog_opens_with_defaults_and_cancel_discards() {
        let mut state: DraftState<i64> = DraftState::closed();
        assert!(!state.is_open());

        state.open_create(FormDraft::from_pairs(&[("refill", "no")]));
        assert!(state.is_open());
        assert!(!state.is_editing());
        state.set_field("name", "Apoquel");

        state.cancel();
        assert!(!state.is_open());
        assert_eq!(state.field("name"), "");
    }

    #[test]
    fn test_edit_mode_carries_the_entity_key() {
        let mut state: DraftState<i64> = DraftState::closed();
        state.open_edit(7, FormDraft::from_pairs(&[("name", "Rex")]));
        assert_eq!(state.editing_key(), Some(7));
        assert!(state.is_editing());

        state.submit_succeeded();
        assert_eq!(state.editing_key(), None);
        assert_eq!(state.field("name"), "");
    }

    #[test]
    fn test_failed_submit_is_not_a_transition() {
        let mut state: DraftState<i64> = DraftState::closed();
        state.open_create(FormDraft::new());
        state.set_field("name", "Bella");

        // The caller simply doesn't transition on failure; everything stays.
        assert!(state.is_open());
        assert_eq!(state.field("name"), "Bella");
    }
}
