//! Newsletter sign-up: validation, submission workflow and its seams
//!
//! The workflow talks to a [`FormSurface`] for field values and user-visible
//! state, and to a [`SubmissionEndpoint`] for the single network call. Hosts
//! mount a [`SignupPage`] to wire field feedback and submission onto a
//! surface through explicit subscriptions.

pub mod endpoint;
mod events;
mod feedback;
mod page;
mod payload;
mod status;
mod surface;
mod validation;
mod workflow;

pub use endpoint::{HttpEndpoint, SubmissionEndpoint};
pub use events::FormEvent;
pub use page::SignupPage;
pub use payload::SignupPayload;
pub use status::SubmissionStatus;
pub use surface::{FieldId, FieldValue, FormSurface, StatusKind};
pub use workflow::WorkflowSettings;
