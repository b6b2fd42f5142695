// src/errors.rs
// DOCUMENTATION: Custom error types for the places client
// PURPOSE: Centralized error handling for shaping, transport, and decoding

use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Client-specific error types
/// DOCUMENTATION: Every stage fails fast with one of these variants
/// Validation errors never reach the transport; decode errors never yield partial results
#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("places: missing api key")]
    MissingApiKey,

    #[error("places: invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("places: decode {entity}: {source}")]
    Decode {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("places: api error ({status}){}", body_suffix(.body))]
    Upstream { status: u16, body: String },

    #[error("places: transport error: {0}")]
    Transport(String),

    #[error("places: request cancelled")]
    Cancelled,

    #[error("places: invalid url: {0}")]
    InvalidUrl(String),
}

impl PlacesError {
    /// Shorthand for a required field that was blank after trimming
    pub fn missing(field: &str) -> Self {
        PlacesError::Validation {
            field: field.to_string(),
            message: "required".to_string(),
        }
    }

    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        PlacesError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(": {}", body)
    }
}

/// Convert validator output into a single Validation error
/// DOCUMENTATION: Picks the first failing field in lexicographic path order
/// so the reported field is deterministic regardless of HashMap iteration
impl From<ValidationErrors> for PlacesError {
    fn from(errors: ValidationErrors) -> Self {
        match first_failure(&errors, "") {
            Some((field, message)) => PlacesError::Validation { field, message },
            None => PlacesError::invalid("request", "invalid"),
        }
    }
}

fn first_failure(errors: &ValidationErrors, prefix: &str) -> Option<(String, String)> {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    for (name, kind) in fields {
        let path = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", prefix, name)
        };
        let found = match kind {
            ValidationErrorsKind::Field(list) => list.first().map(|err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                (path.clone(), message)
            }),
            ValidationErrorsKind::Struct(nested) => first_failure(nested, &path),
            ValidationErrorsKind::List(items) => items
                .iter()
                .find_map(|(idx, nested)| first_failure(nested, &format!("{}[{}]", path, idx))),
        };
        if found.is_some() {
            return found;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_error_messages() {
        let validation = PlacesError::invalid("limit", "bad");
        assert!(validation.to_string().contains("limit"));

        let api = PlacesError::Upstream {
            status: 500,
            body: String::new(),
        };
        assert_eq!(api.to_string(), "places: api error (500)");

        let api = PlacesError::Upstream {
            status: 400,
            body: "nope".to_string(),
        };
        assert_eq!(api.to_string(), "places: api error (400): nope");
    }

    #[test]
    fn test_missing_names_field() {
        let err = PlacesError::missing("place_id");
        assert_eq!(err.to_string(), "places: invalid place_id: required");
    }

    #[test]
    fn test_decode_names_entity() {
        let source = serde_json::from_slice::<serde_json::Value>(b"{").unwrap_err();
        let err = PlacesError::Decode {
            entity: "place details",
            source,
        };
        assert!(err.to_string().starts_with("places: decode place details:"));
    }

    #[test]
    fn test_from_validation_errors_is_deterministic() {
        let mut errors = ValidationErrors::new();
        errors.add("query", ValidationError::new("required"));
        let mut ranged = ValidationError::new("range");
        ranged.message = Some("must be between 1 and 20".into());
        errors.add("limit", ranged);

        match PlacesError::from(errors) {
            PlacesError::Validation { field, message } => {
                assert_eq!(field, "limit");
                assert_eq!(message, "must be between 1 and 20");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
