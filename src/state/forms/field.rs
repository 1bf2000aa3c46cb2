//! Form field value objects

use crate::signup::{FieldId, FieldValue};

/// A single form field with its label, value and inline error
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub label: String,
    pub value: FieldValue,
    pub error: Option<String>,
}

impl FormField {
    /// Create an empty text field
    pub fn text(id: FieldId, label: &str) -> Self {
        Self {
            id,
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            error: None,
        }
    }

    /// Create an unchecked checkbox
    pub fn checkbox(id: FieldId, label: &str) -> Self {
        Self {
            id,
            label: label.to_string(),
            value: FieldValue::Checked(false),
            error: None,
        }
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self.value, FieldValue::Checked(_))
    }

    /// Push a character to a text value (ignored for checkboxes)
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from a text value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Flip a checkbox (ignored for text fields)
    pub fn toggle(&mut self) {
        if let FieldValue::Checked(c) = &mut self.value {
            *c = !*c;
        }
    }

    /// Reset to the empty value for this field kind
    pub fn clear(&mut self) {
        self.value = FieldValue::cleared(self.id);
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Checked(true) => "[x]".to_string(),
            FieldValue::Checked(false) => "[ ]".to_string(),
        }
    }
}
