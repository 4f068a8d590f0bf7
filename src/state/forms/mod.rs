//! Form domain layer
//!
//! Type-safe form handling for the contact view.

mod contact_form;
mod field;

pub use contact_form::{ContactForm, Form, SubmitStatus};
pub use field::{FieldValue, FormField};
