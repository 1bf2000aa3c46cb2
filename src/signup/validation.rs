//! Field validators for the sign-up form

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

use super::surface::FieldId;

/// Letters and whitespace only, at least two characters
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]{2,}$").expect("name pattern is valid"));

/// Ten-digit mobile number starting with 6-9
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("phone pattern is valid"));

/// Why a field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    Empty,
    Format,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Format => write!(f, "format"),
        }
    }
}

/// Outcome of validating a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(InvalidReason),
}

impl ValidationResult {
    /// Attach the field this result belongs to, yielding an error when invalid
    pub fn for_field(self, field: FieldId) -> Result<(), ValidationError> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(reason) => Err(ValidationError { field, reason }),
        }
    }
}

/// A field-level validation failure, shown inline next to the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} is invalid ({reason})")]
pub struct ValidationError {
    pub field: FieldId,
    pub reason: InvalidReason,
}

/// Validate a subscriber name.
///
/// The trimmed text must be at least two characters of ASCII letters and
/// whitespace.
pub fn validate_name(text: &str) -> ValidationResult {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        ValidationResult::Invalid(InvalidReason::Empty)
    } else if NAME_PATTERN.is_match(trimmed) {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(InvalidReason::Format)
    }
}

/// Validate a mobile number after stripping everything but digits.
pub fn validate_phone(text: &str) -> ValidationResult {
    let digits = digits_only(text);
    if digits.is_empty() {
        ValidationResult::Invalid(InvalidReason::Empty)
    } else if PHONE_PATTERN.is_match(&digits) {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(InvalidReason::Format)
    }
}

/// Keep only ASCII digits
pub fn digits_only(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}
