//! Form domain layer
//!
//! Type-safe form handling for the newsletter sign-up view.

mod field;
mod signup_form;

pub use field::FormField;
pub use signup_form::{Form, SharedSignupForm, SignupForm};
