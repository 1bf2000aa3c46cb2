//! Real-time field feedback on blur and input

use super::surface::{FieldId, FieldValue, FormSurface};
use super::validation::{
    digits_only, validate_name, validate_phone, InvalidReason, ValidationResult,
};

/// Inline message for a field that failed validation on blur
pub fn blur_message(field: FieldId, reason: InvalidReason) -> Option<&'static str> {
    match (field, reason) {
        (FieldId::Name, InvalidReason::Empty) => Some("Please enter your name"),
        (FieldId::Name, InvalidReason::Format) => {
            Some("Please enter a valid name (letters only)")
        }
        (FieldId::Phone, InvalidReason::Empty) => Some("Please enter your phone number"),
        (FieldId::Phone, InvalidReason::Format) => {
            Some("Please enter a valid 10-digit mobile number")
        }
        _ => None,
    }
}

/// Validate a text field when focus leaves it
pub fn on_blur(surface: &dyn FormSurface, field: FieldId) {
    let value = surface.read_field(field);
    let result = match field {
        FieldId::Name => validate_name(value.as_text()),
        FieldId::Phone => validate_phone(value.as_text()),
        _ => return,
    };
    match result {
        ValidationResult::Valid => surface.set_field_error(field, None),
        ValidationResult::Invalid(reason) => {
            surface.set_field_error(field, blur_message(field, reason).map(str::to_string))
        }
    }
}

/// React to an edit of a text field.
///
/// Phone input is reduced to its digits in place. A non-blank value clears
/// any inline error.
pub fn on_input(surface: &dyn FormSurface, field: FieldId) {
    let value = surface.read_field(field);
    let text = match field {
        FieldId::Name => value.as_text().to_string(),
        FieldId::Phone => {
            let digits = digits_only(value.as_text());
            if digits != value.as_text() {
                surface.set_field(field, FieldValue::Text(digits.clone()));
            }
            digits
        }
        _ => return,
    };
    if !text.trim().is_empty() {
        surface.set_field_error(field, None);
    }
}
