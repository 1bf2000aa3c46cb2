//! Trait abstraction for the input surface the sign-up workflow drives

use std::fmt;

/// Fields of the newsletter sign-up form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Phone,
    TermsAgreement,
    NewsletterConsent,
    /// Hidden anti-bot field, never filled by a person
    Honeypot,
}

impl FieldId {
    /// Every field, in form order
    pub const ALL: [FieldId; 5] = [
        Self::Name,
        Self::Phone,
        Self::TermsAgreement,
        Self::NewsletterConsent,
        Self::Honeypot,
    ];

    /// Multipart field name used by the submission endpoint
    pub fn form_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::TermsAgreement => "terms_agreement",
            Self::NewsletterConsent => "monthly_newsletter_consent",
            Self::Honeypot => "_gotcha",
        }
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self, Self::TermsAgreement | Self::NewsletterConsent)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_name())
    }
}

/// Value held by a form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    /// Empty value for the given field
    pub fn cleared(field: FieldId) -> Self {
        if field.is_checkbox() {
            FieldValue::Checked(false)
        } else {
            FieldValue::Text(String::new())
        }
    }

    /// Text content (empty for checkboxes)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Checked(_) => "",
        }
    }

    /// Checked state (false for text fields)
    pub fn is_checked(&self) -> bool {
        match self {
            FieldValue::Checked(c) => *c,
            FieldValue::Text(_) => false,
        }
    }
}

/// Visual class of the shared status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    None,
    Loading,
    Success,
    Error,
}

/// The operations the sign-up workflow needs from whatever renders the form.
///
/// Implementations use interior mutability: the workflow holds the surface
/// behind an `Arc` and touches it from spawned tasks.
#[cfg_attr(test, mockall::automock)]
pub trait FormSurface: Send + Sync {
    /// Read the current value of a field
    fn read_field(&self, field: FieldId) -> FieldValue;

    /// Replace the value of a field
    fn set_field(&self, field: FieldId, value: FieldValue);

    /// Enable or disable every input and the submit control
    fn set_disabled(&self, disabled: bool);

    /// Replace the shared status text
    fn set_status(&self, message: &str, kind: StatusKind);

    /// Show or clear the inline error next to a field
    fn set_field_error(&self, field: FieldId, message: Option<String>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_names_match_endpoint_contract() {
        let names: Vec<&str> = FieldId::ALL.iter().map(|f| f.form_name()).collect();
        assert_eq!(
            names,
            vec![
                "name",
                "phone",
                "terms_agreement",
                "monthly_newsletter_consent",
                "_gotcha"
            ]
        );
    }

    #[test]
    fn test_cleared_value_depends_on_field_kind() {
        assert_eq!(
            FieldValue::cleared(FieldId::TermsAgreement),
            FieldValue::Checked(false)
        );
        assert_eq!(
            FieldValue::cleared(FieldId::Phone),
            FieldValue::Text(String::new())
        );
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(FieldValue::Text("Asha".into()).as_text(), "Asha");
        assert!(!FieldValue::Text("x".into()).is_checked());
        assert!(FieldValue::Checked(true).is_checked());
        assert_eq!(FieldValue::Checked(true).as_text(), "");
    }
}
