//! Wiring of the sign-up form: event handlers over a surface and workflow

use std::sync::Arc;
use tracing::debug;

use super::endpoint::SubmissionEndpoint;
use super::events::{FormEvent, FormEvents, Subscription};
use super::feedback;
use super::status::SubmissionStatus;
use super::surface::FormSurface;
use super::workflow::{Begin, SubmissionWorkflow, WorkflowSettings};

/// A mounted sign-up form.
///
/// Holds the handler subscriptions for as long as the page is shown.
/// Dropping the page unregisters them and cancels any pending follow-up
/// message.
pub struct SignupPage {
    events: FormEvents,
    workflow: SubmissionWorkflow,
    subscriptions: Vec<Subscription>,
}

impl SignupPage {
    /// Register the field feedback and submit handlers.
    ///
    /// Submit runs the synchronous half of the workflow inline and spawns the
    /// network half, so this must be called from within a tokio runtime.
    pub fn mount(
        surface: Arc<dyn FormSurface>,
        endpoint: Arc<dyn SubmissionEndpoint>,
        settings: WorkflowSettings,
    ) -> Self {
        let events = FormEvents::new();
        let workflow = SubmissionWorkflow::new(Arc::clone(&surface), endpoint, settings);

        let feedback_sub = events.on(move |event| match event {
            FormEvent::Blur(field) => feedback::on_blur(surface.as_ref(), field),
            FormEvent::Input(field) => feedback::on_input(surface.as_ref(), field),
            FormEvent::Submit => {}
        });

        let submit_workflow = workflow.clone();
        let submit_sub = events.on(move |event| {
            if event != FormEvent::Submit {
                return;
            }
            match submit_workflow.begin() {
                Begin::Ready(prepared) => {
                    debug!(attempt = %prepared.attempt(), "sign-up validated, submitting");
                    let workflow = submit_workflow.clone();
                    tokio::spawn(async move {
                        workflow.finish(prepared).await;
                    });
                }
                Begin::Done(status) => {
                    debug!(status = status.label(), "submission ended locally");
                }
            }
        });

        debug!("sign-up page mounted");
        Self {
            events,
            workflow,
            subscriptions: vec![feedback_sub, submit_sub],
        }
    }

    /// Deliver an event from the host
    pub fn dispatch(&self, event: FormEvent) {
        self.events.emit(event);
    }

    /// Status of the latest attempt
    pub fn status(&self) -> SubmissionStatus {
        self.workflow.status()
    }
}

impl Drop for SignupPage {
    fn drop(&mut self) {
        self.workflow.close();
        self.subscriptions.clear();
        debug!("sign-up page unmounted");
    }
}
