//! Contact form state

use super::field::FormField;
use crate::catalog::Catalog;
use crate::contact::{ContactField, ContactSubmission, SubmitError, ValidationError};
use crate::state::Direction;

/// Trait for common form operations
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
    fn get_field(&self, index: usize) -> Option<&FormField>;
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField>;
}

/// Where the last submission stands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    /// Relay confirmation message
    Sent(String),
    /// Relay or transport error message
    Failed(String),
}

const PROJECT_INDEX: usize = 5;
const SUBMIT_INDEX: usize = 6;

#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub subject: FormField,
    pub message: FormField,
    pub project: FormField,
    pub active_field_index: usize,
    errors: Vec<ValidationError>,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("contact.name", false),
            email: FormField::text("contact.email", false),
            phone: FormField::text("contact.phone", false),
            subject: FormField::text("contact.subject", false),
            message: FormField::text("contact.message", true),
            project: FormField::project("contact.project"),
            active_field_index: 0,
            errors: Vec::new(),
            status: SubmitStatus::Idle,
        }
    }

    /// Returns true if the submit button is focused
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == SUBMIT_INDEX
    }

    pub fn is_project_active(&self) -> bool {
        self.active_field_index == PROJECT_INDEX
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_multiline)
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// First inline error for a field
    pub fn error_for(&self, field: ContactField) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    fn contact_field(index: usize) -> Option<ContactField> {
        ContactField::REQUIRED.get(index).copied()
    }

    /// Type into the focused text field; clears that field's error
    pub fn input_char(&mut self, c: char) {
        let index = self.active_field_index;
        if let Some(field) = self.get_field_mut(index) {
            field.push_char(c);
        }
        self.clear_error_at(index);
    }

    pub fn backspace(&mut self) {
        let index = self.active_field_index;
        if let Some(field) = self.get_field_mut(index) {
            field.pop_char();
        }
        self.clear_error_at(index);
    }

    fn clear_error_at(&mut self, index: usize) {
        if let Some(field) = Self::contact_field(index) {
            self.errors.retain(|e| e.field() != field);
        }
    }

    /// Left/Right on the project picker
    pub fn cycle_project(&mut self, catalog: &Catalog, direction: Direction) {
        self.project.cycle_project(catalog, direction);
    }

    /// Snapshot of the current values as a wire payload
    pub fn to_submission(&self, catalog: &Catalog) -> ContactSubmission {
        ContactSubmission {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            phone: self.phone.as_text().to_string(),
            subject: self.subject.as_text().to_string(),
            message: self.message.as_text().to_string(),
            project_interest: self.project.display_value(catalog),
        }
        .trimmed()
    }

    /// Validate and move to `Sending`. Returns the payload to send, or
    /// `None` when the form has inline errors or a send is in flight.
    pub fn begin_submit(&mut self, catalog: &Catalog) -> Option<ContactSubmission> {
        if self.is_sending() {
            return None;
        }
        let submission = self.to_submission(catalog);
        self.errors = submission.validation_errors();
        if !self.errors.is_empty() {
            self.status = SubmitStatus::Idle;
            if let Some(first) = self.errors.first() {
                self.active_field_index = ContactField::REQUIRED
                    .iter()
                    .position(|f| *f == first.field())
                    .unwrap_or(0);
            }
            return None;
        }
        self.status = SubmitStatus::Sending;
        Some(submission)
    }

    /// Apply the relay's answer. Success clears the values; failure keeps
    /// them so the user can retry.
    pub fn finish_submit(&mut self, result: Result<String, SubmitError>) {
        match result {
            Ok(message) => {
                self.reset();
                self.status = SubmitStatus::Sent(message);
            }
            Err(error) => {
                self.status = SubmitStatus::Failed(error.to_string());
            }
        }
    }

    /// Clear every value, error and status
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        7 // name, email, phone, subject, message, project, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_INDEX);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.phone),
            3 => Some(&self.subject),
            4 => Some(&self.message),
            PROJECT_INDEX => Some(&self.project),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.phone),
            3 => Some(&mut self.subject),
            4 => Some(&mut self.message),
            PROJECT_INDEX => Some(&mut self.project),
            _ => None,
        }
    }
}
