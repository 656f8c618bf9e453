//! Declarative Resource Schemas
//!
//! Each resource page declares what its form requires as data (field names,
//! labels, numeric bounds) instead of hand-rolling checks. Validation runs
//! before any request is built, so an invalid draft costs zero network calls.

use crate::draft::FormDraft;
use crate::error::ValidationError;

/// An (exclusive-min, inclusive-max] bound for a numeric field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub min_exclusive: f64,
    pub max_inclusive: f64,
}

impl NumericRange {
    pub const fn new(min_exclusive: f64, max_inclusive: f64) -> Self {
        Self {
            min_exclusive,
            max_inclusive,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value > self.min_exclusive && value <= self.max_inclusive
    }
}

/// One form field's validation rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    /// Draft field name (snake_case, matches the payload key)
    pub name: &'static str,
    /// Human label used in violation messages
    pub label: &'static str,
    pub required: bool,
    /// Numeric bound, checked whenever the field is non-empty
    pub range: Option<NumericRange>,
}

impl FieldRule {
    pub const fn required(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            required: true,
            range: None,
        }
    }

    pub const fn optional(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            required: false,
            range: None,
        }
    }

    pub const fn numeric(name: &'static str, label: &'static str, range: NumericRange) -> Self {
        Self {
            name,
            label,
            required: true,
            range: Some(range),
        }
    }
}

/// The declarative description of one resource's form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceSchema {
    /// Resource name as used in API paths ("pets", "billing", ...)
    pub resource: &'static str,
    pub fields: &'static [FieldRule],
}

impl ResourceSchema {
    /// Check a draft against every rule, reporting the first violation.
    /// Empty optional fields pass; non-empty values must satisfy the
    /// field's numeric range when one is declared.
    pub fn validate(&self, draft: &FormDraft) -> Result<(), ValidationError> {
        for rule in self.fields {
            let value = draft.get(rule.name).trim().to_string();
            if value.is_empty() {
                if rule.required {
                    return Err(ValidationError::Missing {
                        field: rule.name,
                        label: rule.label,
                    });
                }
                continue;
            }
            if let Some(range) = rule.range {
                let parsed: f64 = value.parse().map_err(|_| ValidationError::NotANumber {
                    field: rule.name,
                    label: rule.label,
                })?;
                if !range.contains(parsed) {
                    return Err(ValidationError::OutOfRange {
                        field: rule.name,
                        label: rule.label,
                        min: range.min_exclusive,
                        max: range.max_inclusive,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn rule(&self, name: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|r| r.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEST_SCHEMA: ResourceSchema = ResourceSchema {
        resource: "billing",
        fields: &[
            FieldRule::required("pet_id", "Pet"),
            FieldRule::numeric("price", "Price", NumericRange::new(0.0, 10000.0)),
            FieldRule::optional("description", "Description"),
        ],
    };

    fn draft(pet: &str, price: &str) -> FormDraft {
        let mut d = FormDraft::new();
        d.set("pet_id", pet);
        d.set("price", price);
        d
    }

    #[test]
    fn test_missing_required_field_reports_label() {
        let err = TEST_SCHEMA.validate(&draft("", "5")).unwrap_err();
        assert_eq!(err.to_string(), "Pet is required!");
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let err = TEST_SCHEMA.validate(&draft("   ", "5")).unwrap_err();
        assert_eq!(err.field(), "pet_id");
    }

    #[test]
    fn test_empty_optional_field_passes() {
        assert!(TEST_SCHEMA.validate(&draft("3", "12.50")).is_ok());
    }

    #[test]
    fn test_price_bound_boundaries() {
        // Exclusive lower bound, inclusive upper bound.
        assert!(TEST_SCHEMA.validate(&draft("3", "0")).is_err());
        assert!(TEST_SCHEMA.validate(&draft("3", "0.01")).is_ok());
        assert!(TEST_SCHEMA.validate(&draft("3", "10000")).is_ok());
        assert!(TEST_SCHEMA.validate(&draft("3", "10000.01")).is_err());
    }

    #[test]
    fn test_non_numeric_price_is_rejected() {
        let err = TEST_SCHEMA.validate(&draft("3", "abc")).unwrap_err();
        assert_eq!(err.to_string(), "Price must be a number!");
    }

    #[test]
    fn test_rule_lookup_by_name() {
        assert!(TEST_SCHEMA.rule("price").is_some());
        assert!(TEST_SCHEMA.rule("nope").is_none());
    }
}
