//! Error Taxonomy
//!
//! Every failure a resource page can hit maps onto one of four cases, and
//! each `Display` string is exactly what the notification toast shows.

use thiserror::Error;

/// Failures surfaced by session resolution, collection loads, and mutations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyncError {
    /// No usable bearer token; the caller must fall back to the login view
    #[error("You are not logged in. Please log in to continue.")]
    Unauthenticated,

    /// Pre-flight schema validation failed; no request was sent
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A mutation request failed in transport or was rejected by the server
    #[error("{message}")]
    Network { status: Option<u16>, message: String },

    /// A collection fetch failed; the collection renders empty with this message
    #[error("{message}")]
    Load { status: Option<u16>, message: String },
}

impl SyncError {
    /// Build a network error from an optional HTTP status and a message
    pub fn network(status: Option<u16>, message: impl Into<String>) -> Self {
        SyncError::Network {
            status,
            message: message.into(),
        }
    }

    /// Reclassify a transport error as a load failure
    pub fn into_load(self) -> Self {
        match self {
            SyncError::Network { status, message } => SyncError::Load { status, message },
            other => other,
        }
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, SyncError::Unauthenticated)
    }
}

/// A single schema violation, named after the offending field's label
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{label} is required!")]
    Missing { field: &'static str, label: &'static str },

    #[error("{label} must be a number!")]
    NotANumber { field: &'static str, label: &'static str },

    /// Value parsed but fell outside (min, max]
    #[error("{label} must be greater than {min} and at most {max}!")]
    OutOfRange {
        field: &'static str,
        label: &'static str,
        min: f64,
        max: f64,
    },

    /// Value could not be parsed into the typed payload field
    #[error("{label} is not valid!")]
    Invalid { field: &'static str, label: &'static str },
}

impl ValidationError {
    /// The schema field name the violation belongs to
    pub fn field(&self) -> &'static str {
        match *self {
            ValidationError::Missing { field, .. } => field,
            ValidationError::NotANumber { field, .. } => field,
            ValidationError::OutOfRange { field, .. } => field,
            ValidationError::Invalid { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_the_label() {
        let err = ValidationError::Missing {
            field: "dosage",
            label: "Dosage",
        };
        assert_eq!(err.to_string(), "Dosage is required!");
        assert_eq!(err.field(), "dosage");
    }

    #[test]
    fn test_range_message_carries_bounds() {
        let err = ValidationError::OutOfRange {
            field: "price",
            label: "Price",
            min: 0.0,
            max: 10000.0,
        };
        assert_eq!(err.to_string(), "Price must be greater than 0 and at most 10000!");
    }

    #[test]
    fn test_network_reclassifies_to_load() {
        let err = SyncError::network(Some(500), "boom").into_load();
        assert_eq!(
            err,
            SyncError::Load {
                status: Some(500),
                message: "boom".into()
            }
        );
        assert!(SyncError::Unauthenticated.into_load().is_unauthenticated());
    }

    #[test]
    fn test_validation_converts_into_sync_error() {
        let err: SyncError = ValidationError::Missing {
            field: "name",
            label: "Name",
        }
        .into();
        assert_eq!(err.to_string(), "Name is required!");
    }
}
