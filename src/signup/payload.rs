//! Validated sign-up payload

use chrono::{DateTime, SecondsFormat, Utc};

use super::surface::FieldId;

/// Fields sent to the submission endpoint for one attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupPayload {
    pub name: String,
    pub phone: String,
    pub terms_agreed: bool,
    pub newsletter_consent: bool,
    pub subject: String,
    pub submitted_at: DateTime<Utc>,
}

impl SignupPayload {
    /// ISO-8601 timestamp with millisecond precision and a `Z` suffix
    pub fn timestamp(&self) -> String {
        self.submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Ordered (field, value) pairs as posted to the endpoint
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (FieldId::Name.form_name(), self.name.clone()),
            (FieldId::Phone.form_name(), self.phone.clone()),
            (
                FieldId::TermsAgreement.form_name(),
                if self.terms_agreed { "agreed" } else { "" }.to_string(),
            ),
            (
                FieldId::NewsletterConsent.form_name(),
                if self.newsletter_consent { "yes" } else { "" }.to_string(),
            ),
            ("_subject", self.subject.clone()),
            ("timestamp", self.timestamp()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn payload() -> SignupPayload {
        SignupPayload {
            name: "Asha Rao".to_string(),
            phone: "9876543210".to_string(),
            terms_agreed: true,
            newsletter_consent: true,
            subject: "GossipYah Newsletter Sign-Up - Gurgaon".to_string(),
            submitted_at: Utc.with_ymd_and_hms(2024, 3, 9, 18, 30, 5).unwrap(),
        }
    }

    #[test]
    fn test_timestamp_is_iso_8601_utc() {
        assert_eq!(payload().timestamp(), "2024-03-09T18:30:05.000Z");
    }

    #[test]
    fn test_form_fields_layout() {
        let fields = payload().form_fields();
        assert_eq!(
            fields,
            vec![
                ("name", "Asha Rao".to_string()),
                ("phone", "9876543210".to_string()),
                ("terms_agreement", "agreed".to_string()),
                ("monthly_newsletter_consent", "yes".to_string()),
                (
                    "_subject",
                    "GossipYah Newsletter Sign-Up - Gurgaon".to_string()
                ),
                ("timestamp", "2024-03-09T18:30:05.000Z".to_string()),
            ]
        );
    }
}
