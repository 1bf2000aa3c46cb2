//! Newsletter sign-up submission workflow
//!
//! One attempt runs in two halves. [`SubmissionWorkflow::begin`] is
//! synchronous: it validates, checks consent and the honeypot, then disables
//! the form. [`SubmissionWorkflow::finish`] performs the single network call
//! and reports the outcome. Splitting them lets a host disable the form
//! before handing the network half to a spawned task, so the disabled
//! controls act as the one-submission-at-a-time gate.

use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::AbortHandle;
use tracing::{debug, info, warn, Instrument};
use uuid::Uuid;

use super::endpoint::{EndpointError, SubmissionEndpoint};
use super::payload::SignupPayload;
use super::status::{FailureReason, SubmissionStatus};
use super::surface::{FieldId, FieldValue, FormSurface, StatusKind};
use super::validation::{digits_only, validate_name, validate_phone, ValidationError};
use crate::config::SiteConfig;

pub const LOADING_MESSAGE: &str = "Subscribing... Please wait";
pub const SUCCESS_MESSAGE: &str = "🎉 Success! Check WhatsApp for confirmation.";
pub const WELCOME_MESSAGE: &str = "You're all set! Welcome to GossipYah 💛";
pub const CONSENT_MESSAGE: &str = "Please accept both terms and consent to continue";
pub const OFFLINE_MESSAGE: &str = "You appear to be offline. Please check your connection.";
pub const NAME_SUBMIT_ERROR: &str = "Please enter a valid name";
pub const PHONE_SUBMIT_ERROR: &str = "Please enter a valid 10-digit mobile number";

/// Fixed values an attempt needs besides the form fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowSettings {
    pub subject: String,
    pub contact_email: String,
    pub follow_up_delay: Duration,
}

impl WorkflowSettings {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            subject: config.subject().to_string(),
            contact_email: config.contact_email().to_string(),
            follow_up_delay: config.follow_up_delay(),
        }
    }

    /// User-facing text for a failed request
    pub fn failure_message(&self) -> String {
        format!(
            "Oops! Something went wrong. Please try again or contact us at {}",
            self.contact_email
        )
    }
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

/// A validated attempt whose form is already disabled, waiting for `finish`
#[derive(Debug)]
pub struct PreparedSubmission {
    attempt: Uuid,
    payload: SignupPayload,
}

impl PreparedSubmission {
    pub fn attempt(&self) -> Uuid {
        self.attempt
    }
}

/// Result of the synchronous half of an attempt
#[derive(Debug)]
pub enum Begin {
    /// Go ahead with the network call
    Ready(PreparedSubmission),
    /// The attempt ended locally with this status
    Done(SubmissionStatus),
}

/// Re-enables the surface when dropped, whichever way `finish` exits
struct EnableOnDrop(Arc<dyn FormSurface>);

impl Drop for EnableOnDrop {
    fn drop(&mut self) {
        self.0.set_disabled(false);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Drives sign-up attempts against a form surface and an endpoint
#[derive(Clone)]
pub struct SubmissionWorkflow {
    surface: Arc<dyn FormSurface>,
    endpoint: Arc<dyn SubmissionEndpoint>,
    settings: WorkflowSettings,
    status: Arc<Mutex<SubmissionStatus>>,
    follow_up: Arc<Mutex<Option<AbortHandle>>>,
    /// Set once the owning page is gone; no follow-up may be scheduled after
    closed: Arc<AtomicBool>,
}

impl SubmissionWorkflow {
    pub fn new(
        surface: Arc<dyn FormSurface>,
        endpoint: Arc<dyn SubmissionEndpoint>,
        settings: WorkflowSettings,
    ) -> Self {
        Self {
            surface,
            endpoint,
            settings,
            status: Arc::new(Mutex::new(SubmissionStatus::Idle)),
            follow_up: Arc::new(Mutex::new(None)),
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Status of the most recent attempt
    pub fn status(&self) -> SubmissionStatus {
        lock(&self.status).clone()
    }

    fn set_status(&self, status: SubmissionStatus) {
        debug!(status = status.label(), "submission status changed");
        *lock(&self.status) = status;
    }

    /// Run a full attempt: validate, submit, report
    #[allow(dead_code)] // the TUI host splits attempts into begin/finish to disable first
    pub async fn submit(&self) -> SubmissionStatus {
        match self.begin() {
            Begin::Ready(prepared) => self.finish(prepared).await,
            Begin::Done(status) => status,
        }
    }

    /// Validate the form and, when it may be sent, disable it.
    ///
    /// Starting an attempt supersedes any follow-up message still pending
    /// from the previous one.
    pub fn begin(&self) -> Begin {
        self.cancel_follow_up();
        self.set_status(SubmissionStatus::Validating);
        self.surface.set_status("", StatusKind::None);

        let name = self.surface.read_field(FieldId::Name);
        let phone = self.surface.read_field(FieldId::Phone);

        let mut errors: Vec<ValidationError> = Vec::new();
        for (field, result, message) in [
            (FieldId::Name, validate_name(name.as_text()), NAME_SUBMIT_ERROR),
            (FieldId::Phone, validate_phone(phone.as_text()), PHONE_SUBMIT_ERROR),
        ] {
            match result.for_field(field) {
                Ok(()) => self.surface.set_field_error(field, None),
                Err(err) => {
                    self.surface
                        .set_field_error(field, Some(message.to_string()));
                    errors.push(err);
                }
            }
        }

        let terms_agreed = self.surface.read_field(FieldId::TermsAgreement).is_checked();
        let newsletter_consent = self
            .surface
            .read_field(FieldId::NewsletterConsent)
            .is_checked();
        let consent_given = terms_agreed && newsletter_consent;
        if !consent_given {
            self.surface.set_status(CONSENT_MESSAGE, StatusKind::Error);
        }

        if !errors.is_empty() {
            debug!(invalid = errors.len(), "sign-up rejected by validation");
            let status = SubmissionStatus::Failed(FailureReason::Invalid(errors));
            self.set_status(status.clone());
            return Begin::Done(status);
        }
        if !consent_given {
            let status = SubmissionStatus::Failed(FailureReason::ConsentRequired);
            self.set_status(status.clone());
            return Begin::Done(status);
        }

        if !self.surface.read_field(FieldId::Honeypot).as_text().is_empty() {
            info!("honeypot field filled, dropping submission");
            self.set_status(SubmissionStatus::Idle);
            return Begin::Done(SubmissionStatus::Idle);
        }

        self.surface.set_disabled(true);
        self.set_status(SubmissionStatus::Submitting);
        self.surface.set_status(LOADING_MESSAGE, StatusKind::Loading);

        let prepared = PreparedSubmission {
            attempt: Uuid::new_v4(),
            payload: SignupPayload {
                name: name.as_text().trim().to_string(),
                phone: digits_only(phone.as_text()),
                terms_agreed,
                newsletter_consent,
                subject: self.settings.subject.clone(),
                submitted_at: Utc::now(),
            },
        };
        Begin::Ready(prepared)
    }

    /// Send a prepared attempt and report the outcome on the surface.
    ///
    /// The surface is re-enabled on every exit path.
    pub async fn finish(&self, prepared: PreparedSubmission) -> SubmissionStatus {
        let _enable = EnableOnDrop(Arc::clone(&self.surface));
        let attempt = prepared.attempt;
        let span = tracing::info_span!("signup", %attempt);

        async {
            info!("submitting newsletter sign-up");
            match self.endpoint.submit(&prepared.payload).await {
                Ok(()) => {
                    info!("newsletter sign-up accepted");
                    self.set_status(SubmissionStatus::Succeeded);
                    self.clear_fields();
                    self.surface.set_status(SUCCESS_MESSAGE, StatusKind::Success);
                    self.schedule_follow_up(attempt);
                    SubmissionStatus::Succeeded
                }
                Err(err) => {
                    warn!(error = %err, "newsletter sign-up failed");
                    let (reason, message) = match err {
                        EndpointError::Unreachable(detail) => {
                            (FailureReason::Offline(detail), OFFLINE_MESSAGE.to_string())
                        }
                        other => (
                            FailureReason::Network(other.to_string()),
                            self.settings.failure_message(),
                        ),
                    };
                    let status = SubmissionStatus::Failed(reason);
                    self.set_status(status.clone());
                    self.surface.set_status(&message, StatusKind::Error);
                    status
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Abort the pending follow-up message, if any
    pub fn cancel_follow_up(&self) {
        if let Some(handle) = lock(&self.follow_up).take() {
            debug!("cancelling pending follow-up message");
            handle.abort();
        }
    }

    /// Cancel any pending follow-up and refuse to schedule new ones.
    ///
    /// An attempt still in flight finishes normally but shows no follow-up.
    pub fn close(&self) {
        {
            let _slot = lock(&self.follow_up);
            self.closed.store(true, Ordering::SeqCst);
        }
        self.cancel_follow_up();
    }

    fn clear_fields(&self) {
        for field in FieldId::ALL {
            self.surface.set_field(field, FieldValue::cleared(field));
            if !field.is_checkbox() {
                self.surface.set_field_error(field, None);
            }
        }
    }

    fn schedule_follow_up(&self, attempt: Uuid) {
        // Held across the check so `close` cannot slip in before the handle is stored
        let mut slot = lock(&self.follow_up);
        if self.closed.load(Ordering::SeqCst) {
            debug!(%attempt, "workflow closed, skipping follow-up message");
            return;
        }
        let surface = Arc::clone(&self.surface);
        let delay = self.settings.follow_up_delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            debug!(%attempt, "showing follow-up message");
            surface.set_status(WELCOME_MESSAGE, StatusKind::Success);
        });
        if let Some(previous) = slot.replace(task.abort_handle()) {
            previous.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signup::endpoint::{HttpEndpoint, MockSubmissionEndpoint};
    use crate::signup::surface::MockFormSurface;
    use crate::state::SharedSignupForm;
    use mockall::predicate::eq;
    use mockall::Sequence;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn filled_form() -> SharedSignupForm {
        let form = SharedSignupForm::default();
        form.set_field(FieldId::Name, FieldValue::Text("  Asha Rao ".into()));
        form.set_field(FieldId::Phone, FieldValue::Text("98765 43210".into()));
        form.set_field(FieldId::TermsAgreement, FieldValue::Checked(true));
        form.set_field(FieldId::NewsletterConsent, FieldValue::Checked(true));
        form
    }

    fn never_called() -> MockSubmissionEndpoint {
        let mut endpoint = MockSubmissionEndpoint::new();
        endpoint.expect_submit().never();
        endpoint
    }

    fn accepting() -> MockSubmissionEndpoint {
        let mut endpoint = MockSubmissionEndpoint::new();
        endpoint.expect_submit().times(1).returning(|_| Ok(()));
        endpoint
    }

    fn workflow(
        form: &SharedSignupForm,
        endpoint: impl SubmissionEndpoint + 'static,
    ) -> SubmissionWorkflow {
        SubmissionWorkflow::new(
            Arc::new(form.clone()),
            Arc::new(endpoint),
            WorkflowSettings::default(),
        )
    }

    mod local_failures {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_invalid_fields_fail_without_network() {
            let form = filled_form();
            form.set_field(FieldId::Name, FieldValue::Text("Jo3".into()));
            form.set_field(FieldId::Phone, FieldValue::Text("98765abc43".into()));

            let status = workflow(&form, never_called()).submit().await;

            let SubmissionStatus::Failed(FailureReason::Invalid(errors)) = status else {
                panic!("expected validation failure, got {status:?}");
            };
            let fields: Vec<FieldId> = errors.iter().map(|e| e.field).collect();
            assert_eq!(fields, vec![FieldId::Name, FieldId::Phone]);

            let snapshot = form.snapshot();
            assert_eq!(snapshot.name.error.as_deref(), Some(NAME_SUBMIT_ERROR));
            assert_eq!(snapshot.phone.error.as_deref(), Some(PHONE_SUBMIT_ERROR));
            assert!(!snapshot.disabled);
        }

        #[tokio::test]
        async fn test_missing_terms_requires_consent() {
            let form = filled_form();
            form.set_field(FieldId::TermsAgreement, FieldValue::Checked(false));

            let status = workflow(&form, never_called()).submit().await;

            assert_eq!(
                status,
                SubmissionStatus::Failed(FailureReason::ConsentRequired)
            );
            let snapshot = form.snapshot();
            assert_eq!(snapshot.status_text, CONSENT_MESSAGE);
            assert_eq!(snapshot.status_kind, StatusKind::Error);
        }

        #[tokio::test]
        async fn test_missing_newsletter_consent_requires_consent() {
            let form = filled_form();
            form.set_field(FieldId::NewsletterConsent, FieldValue::Checked(false));

            let status = workflow(&form, never_called()).submit().await;

            assert_eq!(
                status,
                SubmissionStatus::Failed(FailureReason::ConsentRequired)
            );
        }

        #[tokio::test]
        async fn test_invalid_fields_and_missing_consent_report_both() {
            let form = filled_form();
            form.set_field(FieldId::Name, FieldValue::Text("".into()));
            form.set_field(FieldId::TermsAgreement, FieldValue::Checked(false));

            let status = workflow(&form, never_called()).submit().await;

            assert!(matches!(
                status,
                SubmissionStatus::Failed(FailureReason::Invalid(_))
            ));
            let snapshot = form.snapshot();
            assert_eq!(snapshot.status_text, CONSENT_MESSAGE);
            assert_eq!(snapshot.name.error.as_deref(), Some(NAME_SUBMIT_ERROR));
        }

        #[tokio::test]
        async fn test_honeypot_drops_silently() {
            let form = filled_form();
            form.set_field(FieldId::Honeypot, FieldValue::Text("http://spam".into()));

            let wf = workflow(&form, never_called());
            let status = wf.submit().await;

            assert_eq!(status, SubmissionStatus::Idle);
            assert_eq!(wf.status(), SubmissionStatus::Idle);
            let snapshot = form.snapshot();
            assert_eq!(snapshot.status_text, "");
            assert_eq!(snapshot.status_kind, StatusKind::None);
            assert!(!snapshot.disabled);
            assert_eq!(snapshot.name.value.as_text(), "  Asha Rao ");
        }
    }

    mod remote_outcomes {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_success_clears_and_reenables() {
            let form = filled_form();
            let mut endpoint = MockSubmissionEndpoint::new();
            endpoint
                .expect_submit()
                .withf(|p| {
                    p.name == "Asha Rao"
                        && p.phone == "9876543210"
                        && p.subject == "GossipYah Newsletter Sign-Up - Gurgaon"
                })
                .times(1)
                .returning(|_| Ok(()));

            let wf = workflow(&form, endpoint);
            let status = wf.submit().await;

            assert_eq!(status, SubmissionStatus::Succeeded);
            assert_eq!(wf.status(), SubmissionStatus::Succeeded);
            let snapshot = form.snapshot();
            assert_eq!(snapshot.name.value.as_text(), "");
            assert_eq!(snapshot.phone.value.as_text(), "");
            assert!(!snapshot.terms.value.is_checked());
            assert!(!snapshot.newsletter.value.is_checked());
            assert!(!snapshot.disabled);
            assert_eq!(snapshot.status_text, SUCCESS_MESSAGE);
            assert_eq!(snapshot.status_kind, StatusKind::Success);
            wf.cancel_follow_up();
        }

        #[tokio::test]
        async fn test_endpoint_error_reports_contact_address() {
            let form = filled_form();
            let mut endpoint = MockSubmissionEndpoint::new();
            endpoint
                .expect_submit()
                .times(1)
                .returning(|_| Err(EndpointError::Status(500)));

            let wf = workflow(&form, endpoint);
            let status = wf.submit().await;

            assert_eq!(
                status,
                SubmissionStatus::Failed(FailureReason::Network(
                    "server returned status: 500".into()
                ))
            );
            let snapshot = form.snapshot();
            assert!(!snapshot.disabled);
            assert_eq!(snapshot.status_kind, StatusKind::Error);
            assert!(snapshot.status_text.contains("contact@gossipyah.com"));
        }

        #[tokio::test]
        async fn test_transport_error_reenables() {
            let form = filled_form();
            let mut endpoint = MockSubmissionEndpoint::new();
            endpoint
                .expect_submit()
                .times(1)
                .returning(|_| Err(EndpointError::Transport("connection reset".into())));

            let status = workflow(&form, endpoint).submit().await;

            assert!(matches!(
                status,
                SubmissionStatus::Failed(FailureReason::Network(_))
            ));
            assert!(!form.snapshot().disabled);
        }

        #[tokio::test]
        async fn test_unreachable_endpoint_reports_offline() {
            let form = filled_form();
            let mut endpoint = MockSubmissionEndpoint::new();
            endpoint
                .expect_submit()
                .times(1)
                .returning(|_| Err(EndpointError::Unreachable("connection refused".into())));

            let status = workflow(&form, endpoint).submit().await;

            assert!(matches!(
                status,
                SubmissionStatus::Failed(FailureReason::Offline(_))
            ));
            let snapshot = form.snapshot();
            assert_eq!(snapshot.status_text, OFFLINE_MESSAGE);
            assert_eq!(snapshot.status_kind, StatusKind::Error);
            assert!(!snapshot.disabled);
        }

        #[tokio::test]
        async fn test_http_endpoint_round_trip() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .respond_with(ResponseTemplate::new(200))
                .expect(1)
                .mount(&server)
                .await;
            let endpoint =
                HttpEndpoint::new(server.uri(), Duration::from_secs(5)).unwrap();

            let form = filled_form();
            let wf = workflow(&form, endpoint);
            assert_eq!(wf.submit().await, SubmissionStatus::Succeeded);
            assert!(!form.snapshot().disabled);
            wf.cancel_follow_up();
        }

        #[tokio::test]
        async fn test_http_endpoint_server_error() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .respond_with(ResponseTemplate::new(500))
                .mount(&server)
                .await;
            let endpoint =
                HttpEndpoint::new(server.uri(), Duration::from_secs(5)).unwrap();

            let form = filled_form();
            let status = workflow(&form, endpoint).submit().await;
            assert!(matches!(status, SubmissionStatus::Failed(_)));
            assert!(!form.snapshot().disabled);
        }
    }

    mod gating {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_begin_disables_before_submitting() {
            let form = filled_form();
            let wf = workflow(&form, accepting());

            let Begin::Ready(prepared) = wf.begin() else {
                panic!("expected a prepared submission");
            };
            assert_eq!(wf.status(), SubmissionStatus::Submitting);
            let snapshot = form.snapshot();
            assert!(snapshot.disabled);
            assert_eq!(snapshot.status_text, LOADING_MESSAGE);
            assert_eq!(snapshot.status_kind, StatusKind::Loading);
            assert_eq!(prepared.payload.phone, "9876543210");

            wf.finish(prepared).await;
            assert!(!form.snapshot().disabled);
            wf.cancel_follow_up();
        }

        #[tokio::test]
        async fn test_disable_then_enable_order() {
            let mut surface = MockFormSurface::new();
            surface.expect_read_field().returning(|field| match field {
                FieldId::Name => FieldValue::Text("Asha".into()),
                FieldId::Phone => FieldValue::Text("9876543210".into()),
                FieldId::TermsAgreement | FieldId::NewsletterConsent => FieldValue::Checked(true),
                FieldId::Honeypot => FieldValue::Text(String::new()),
            });
            surface.expect_set_status().returning(|_, _| ());
            surface.expect_set_field_error().returning(|_, _| ());
            surface.expect_set_field().times(FieldId::ALL.len()).returning(|_, _| ());

            let mut seq = Sequence::new();
            surface
                .expect_set_disabled()
                .with(eq(true))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| ());
            surface
                .expect_set_disabled()
                .with(eq(false))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| ());

            let wf = SubmissionWorkflow::new(
                Arc::new(surface),
                Arc::new(accepting()),
                WorkflowSettings::default(),
            );
            assert_eq!(wf.submit().await, SubmissionStatus::Succeeded);
            wf.cancel_follow_up();
        }
    }

    mod follow_up {
        use super::*;
        use pretty_assertions::assert_eq;

        fn quick_settings() -> WorkflowSettings {
            WorkflowSettings {
                follow_up_delay: Duration::from_secs(3),
                ..WorkflowSettings::default()
            }
        }

        #[tokio::test(start_paused = true)]
        async fn test_welcome_message_after_delay() {
            let form = filled_form();
            let wf = SubmissionWorkflow::new(
                Arc::new(form.clone()),
                Arc::new(accepting()),
                quick_settings(),
            );

            wf.submit().await;
            assert_eq!(form.snapshot().status_text, SUCCESS_MESSAGE);

            tokio::time::sleep(Duration::from_millis(2_900)).await;
            assert_eq!(form.snapshot().status_text, SUCCESS_MESSAGE);

            tokio::time::sleep(Duration::from_millis(200)).await;
            assert_eq!(form.snapshot().status_text, WELCOME_MESSAGE);
        }

        #[tokio::test(start_paused = true)]
        async fn test_new_attempt_supersedes_follow_up() {
            let form = filled_form();
            let wf = SubmissionWorkflow::new(
                Arc::new(form.clone()),
                Arc::new(accepting()),
                quick_settings(),
            );

            wf.submit().await;
            tokio::time::sleep(Duration::from_secs(1)).await;

            // Fields were cleared by the success, so this attempt fails locally.
            let status = wf.submit().await;
            assert!(matches!(status, SubmissionStatus::Failed(_)));

            tokio::time::sleep(Duration::from_secs(5)).await;
            assert_eq!(form.snapshot().status_text, CONSENT_MESSAGE);
        }

        #[tokio::test(start_paused = true)]
        async fn test_close_while_in_flight_skips_follow_up() {
            let form = filled_form();
            let wf = SubmissionWorkflow::new(
                Arc::new(form.clone()),
                Arc::new(accepting()),
                quick_settings(),
            );

            let Begin::Ready(prepared) = wf.begin() else {
                panic!("expected a prepared submission");
            };
            wf.close();
            assert_eq!(wf.finish(prepared).await, SubmissionStatus::Succeeded);

            tokio::time::sleep(Duration::from_secs(10)).await;
            assert_eq!(form.snapshot().status_text, SUCCESS_MESSAGE);
        }

        #[tokio::test(start_paused = true)]
        async fn test_cancel_follow_up_keeps_success_text() {
            let form = filled_form();
            let wf = SubmissionWorkflow::new(
                Arc::new(form.clone()),
                Arc::new(accepting()),
                quick_settings(),
            );

            wf.submit().await;
            wf.cancel_follow_up();
            tokio::time::sleep(Duration::from_secs(5)).await;
            assert_eq!(form.snapshot().status_text, SUCCESS_MESSAGE);
        }
    }

    #[test]
    fn test_settings_failure_message() {
        let settings = WorkflowSettings {
            contact_email: "hello@example.test".into(),
            ..WorkflowSettings::default()
        };
        assert_eq!(
            settings.failure_message(),
            "Oops! Something went wrong. Please try again or contact us at hello@example.test"
        );
    }
}
