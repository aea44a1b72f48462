use itertools::Itertools;
use serde::Serialize;

/// a single structural violation found during request validation.
/// `field` is a path into the request, e.g. `segments[2].origin`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new<F: ToString, M: ToString>(field: F, message: M) -> FieldViolation {
        FieldViolation {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone)]
pub enum AssessError {
    #[error("validation failed: {}", summarize(.0))]
    Validation(Vec<FieldViolation>),
    #[error("unknown airport code '{code}' at {field}")]
    InvalidAirportCode { code: String, field: String },
    #[error("invalid date at {field}: {message}")]
    InvalidDate { field: String, message: String },
    #[error("no train route found between {origin} and {destination}")]
    RouteNotFound { origin: String, destination: String },
    #[error("no grid intensity data for country '{0}'")]
    CountryNotSupported(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AssessError {
    /// stable machine-readable code, used in batch error objects and by
    /// the transport layer to pick a status.
    pub fn code(&self) -> &'static str {
        match self {
            AssessError::Validation(_) => "VALIDATION_ERROR",
            AssessError::InvalidAirportCode { .. } => "INVALID_AIRPORT_CODE",
            AssessError::InvalidDate { .. } => "INVALID_DATE",
            AssessError::RouteNotFound { .. } => "ROUTE_NOT_FOUND",
            AssessError::CountryNotSupported(_) => "COUNTRY_NOT_SUPPORTED",
            AssessError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// the full violation list when this is a validation failure.
    pub fn violations(&self) -> Option<&[FieldViolation]> {
        match self {
            AssessError::Validation(violations) => Some(violations),
            _ => None,
        }
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .join("; ")
}
