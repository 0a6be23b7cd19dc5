//! UI Components
//!
//! Leptos components for the signup form.

mod field_group;
mod form_alerts;
mod signup_form;

pub use field_group::FieldGroup;
pub use form_alerts::{ErrorAlert, SuccessAlert};
pub use signup_form::SignupForm;
