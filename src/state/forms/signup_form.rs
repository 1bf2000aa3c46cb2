//! Sign-up form state and its shared, surface-implementing handle

use std::sync::{Arc, Mutex, MutexGuard};

use super::field::FormField;
use crate::signup::{FieldId, FieldValue, FormSurface, StatusKind};

/// Trait for common form navigation
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Newsletter sign-up form
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub name: FormField,
    pub phone: FormField,
    pub terms: FormField,
    pub newsletter: FormField,
    /// Hidden anti-bot field; not reachable by keyboard navigation
    pub honeypot: FormField,
    /// Index 0-3 are fields, 4 is the Join button
    pub active_field_index: usize,
    pub disabled: bool,
    pub status_text: String,
    pub status_kind: StatusKind,
}

impl SignupForm {
    /// Position of the Join button in the navigation order
    pub const JOIN_BUTTON: usize = 4;

    pub fn new() -> Self {
        Self {
            name: FormField::text(FieldId::Name, "Your Name"),
            phone: FormField::text(FieldId::Phone, "WhatsApp Number"),
            terms: FormField::checkbox(FieldId::TermsAgreement, "I agree to the terms"),
            newsletter: FormField::checkbox(
                FieldId::NewsletterConsent,
                "Send me the monthly newsletter",
            ),
            honeypot: FormField::text(FieldId::Honeypot, "Leave empty"),
            active_field_index: 0,
            disabled: false,
            status_text: String::new(),
            status_kind: StatusKind::None,
        }
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::Name => &self.name,
            FieldId::Phone => &self.phone,
            FieldId::TermsAgreement => &self.terms,
            FieldId::NewsletterConsent => &self.newsletter,
            FieldId::Honeypot => &self.honeypot,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::Name => &mut self.name,
            FieldId::Phone => &mut self.phone,
            FieldId::TermsAgreement => &mut self.terms,
            FieldId::NewsletterConsent => &mut self.newsletter,
            FieldId::Honeypot => &mut self.honeypot,
        }
    }

    /// Field under the cursor, if the cursor is not on the Join button
    pub fn active_field_id(&self) -> Option<FieldId> {
        self.get_field(self.active_field_index).map(|f| f.id)
    }

    pub fn is_join_button_active(&self) -> bool {
        self.active_field_index == Self::JOIN_BUTTON
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        5 // name, phone, terms, newsletter, join button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::JOIN_BUTTON);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.phone),
            2 => Some(&mut self.terms),
            3 => Some(&mut self.newsletter),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.phone),
            2 => Some(&self.terms),
            3 => Some(&self.newsletter),
            _ => None,
        }
    }
}

/// Shared handle to a [`SignupForm`], used by both the renderer and the
/// sign-up workflow.
///
/// Locks are short and never held across an await point; callers must not
/// hold the guard from [`SharedSignupForm::lock`] while dispatching form
/// events.
#[derive(Debug, Clone, Default)]
pub struct SharedSignupForm {
    inner: Arc<Mutex<SignupForm>>,
}

impl SharedSignupForm {
    pub fn lock(&self) -> MutexGuard<'_, SignupForm> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Copy of the current form state
    pub fn snapshot(&self) -> SignupForm {
        self.lock().clone()
    }

    pub fn is_disabled(&self) -> bool {
        self.lock().disabled
    }
}

impl FormSurface for SharedSignupForm {
    fn read_field(&self, field: FieldId) -> FieldValue {
        self.lock().field(field).value.clone()
    }

    fn set_field(&self, field: FieldId, value: FieldValue) {
        self.lock().field_mut(field).value = value;
    }

    fn set_disabled(&self, disabled: bool) {
        self.lock().disabled = disabled;
    }

    fn set_status(&self, message: &str, kind: StatusKind) {
        let mut form = self.lock();
        form.status_text = message.to_string();
        form.status_kind = kind;
    }

    fn set_field_error(&self, field: FieldId, message: Option<String>) {
        self.lock().field_mut(field).error = message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod signup_form {
        use super::*;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = SignupForm::new();
            assert_eq!(form.active_field_index, 0);
            assert!(!form.disabled);
            assert_eq!(form.status_kind, StatusKind::None);
            assert_eq!(form.name.id, FieldId::Name);
            assert!(form.terms.is_checkbox());
            assert!(!form.honeypot.is_checkbox());
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = SignupForm::new();
            for _ in 0..5 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_join_button() {
            let mut form = SignupForm::new();
            form.prev_field();
            assert!(form.is_join_button_active());
            assert_eq!(form.active_field_id(), None);
        }

        #[test]
        fn test_honeypot_is_not_navigable() {
            let form = SignupForm::new();
            let reachable: Vec<FieldId> = (0..form.field_count())
                .filter_map(|i| form.get_field(i).map(|f| f.id))
                .collect();
            assert!(!reachable.contains(&FieldId::Honeypot));
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = SignupForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, SignupForm::JOIN_BUTTON);
        }

        #[test]
        fn test_active_field_mut_on_join_is_none() {
            let mut form = SignupForm::new();
            form.set_active_field(SignupForm::JOIN_BUTTON);
            assert!(form.get_active_field_mut().is_none());
        }
    }

    mod shared_surface {
        use super::*;

        #[test]
        fn test_surface_round_trip() {
            let form = SharedSignupForm::default();
            form.set_field(FieldId::Phone, FieldValue::Text("9876543210".into()));
            assert_eq!(
                form.read_field(FieldId::Phone),
                FieldValue::Text("9876543210".into())
            );
        }

        #[test]
        fn test_clones_share_state() {
            let form = SharedSignupForm::default();
            let other = form.clone();
            other.set_disabled(true);
            other.set_status("Subscribing... Please wait", StatusKind::Loading);
            assert!(form.is_disabled());
            let snapshot = form.snapshot();
            assert_eq!(snapshot.status_text, "Subscribing... Please wait");
            assert_eq!(snapshot.status_kind, StatusKind::Loading);
        }

        #[test]
        fn test_field_error_targets_one_field() {
            let form = SharedSignupForm::default();
            form.set_field_error(FieldId::Name, Some("Please enter your name".into()));
            let snapshot = form.snapshot();
            assert_eq!(snapshot.name.error.as_deref(), Some("Please enter your name"));
            assert_eq!(snapshot.phone.error, None);
        }
    }
}
