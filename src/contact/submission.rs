//! Contact form payload and validation

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// JSON body accepted by the contact endpoint.
///
/// Every field defaults to empty so that a missing field is reported as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_interest: Option<String>,
}

/// Required fields of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl ContactField {
    pub const REQUIRED: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Wire name of the field
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required field: {}", .0.key())]
    Missing(ContactField),
    #[error("Invalid email address")]
    InvalidEmail,
}

impl ValidationError {
    /// Field the error belongs to
    pub fn field(&self) -> ContactField {
        match self {
            Self::Missing(field) => *field,
            Self::InvalidEmail => ContactField::Email,
        }
    }
}

/// Basic `local@domain.tld` shape check
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

impl ContactSubmission {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Every problem with the submission, in field order
    pub fn validation_errors(&self) -> Vec<ValidationError> {
        let mut errors: Vec<ValidationError> = ContactField::REQUIRED
            .into_iter()
            .filter(|field| self.value(*field).trim().is_empty())
            .map(ValidationError::Missing)
            .collect();

        let email = self.email.trim();
        if !email.is_empty() && !is_valid_email(email) {
            let at = errors
                .iter()
                .position(|e| e.field() != ContactField::Name)
                .unwrap_or(errors.len());
            errors.insert(at, ValidationError::InvalidEmail);
        }

        errors
    }

    /// First problem with the submission, if any
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.validation_errors().into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Copy with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
            project_interest: self
                .project_interest
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid() -> ContactSubmission {
        ContactSubmission {
            name: "Ayşe Yılmaz".to_string(),
            email: "ayse@example.com".to_string(),
            phone: "+90 555 000 00 00".to_string(),
            subject: "Studio availability".to_string(),
            message: "Is the studio type still available?".to_string(),
            project_interest: Some("Four Seasons Residence".to_string()),
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        assert_eq!(valid().validate(), Ok(()));
        assert!(valid().validation_errors().is_empty());
    }

    #[test]
    fn test_project_interest_is_optional() {
        let submission = ContactSubmission {
            project_interest: None,
            ..valid()
        };
        assert_eq!(submission.validate(), Ok(()));
    }

    #[test]
    fn test_each_required_field_is_checked() {
        for field in ContactField::REQUIRED {
            let mut submission = valid();
            match field {
                ContactField::Name => submission.name.clear(),
                ContactField::Email => submission.email.clear(),
                ContactField::Phone => submission.phone.clear(),
                ContactField::Subject => submission.subject.clear(),
                ContactField::Message => submission.message.clear(),
            }
            assert_eq!(submission.validate(), Err(ValidationError::Missing(field)));
        }
    }

    #[test]
    fn test_blank_counts_as_missing() {
        let submission = ContactSubmission {
            subject: "   ".to_string(),
            ..valid()
        };
        assert_eq!(
            submission.validate(),
            Err(ValidationError::Missing(ContactField::Subject))
        );
    }

    #[test]
    fn test_invalid_email() {
        for email in ["ayse", "ayse@", "@example.com", "ayse@example", "a b@example.com"] {
            let submission = ContactSubmission {
                email: email.to_string(),
                ..valid()
            };
            assert_eq!(
                submission.validate(),
                Err(ValidationError::InvalidEmail),
                "{email}"
            );
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email(" info@estate.com.tr "));
        assert!(!is_valid_email("a@@b.co"));
    }

    #[test]
    fn test_collects_all_errors_in_field_order() {
        let submission = ContactSubmission {
            email: "nope".to_string(),
            ..Default::default()
        };
        assert_eq!(
            submission.validation_errors(),
            vec![
                ValidationError::Missing(ContactField::Name),
                ValidationError::InvalidEmail,
                ValidationError::Missing(ContactField::Phone),
                ValidationError::Missing(ContactField::Subject),
                ValidationError::Missing(ContactField::Message),
            ]
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::Missing(ContactField::Phone).to_string(),
            "Missing required field: phone"
        );
        assert_eq!(ValidationError::InvalidEmail.to_string(), "Invalid email address");
    }

    #[test]
    fn test_deserialize_camel_case_and_missing_fields() {
        let json = r#"{"name": "A", "projectInterest": "Marina Heights"}"#;
        let parsed: ContactSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.name, "A");
        assert_eq!(parsed.email, "");
        assert_eq!(parsed.project_interest.as_deref(), Some("Marina Heights"));
    }

    #[test]
    fn test_serialize_skips_missing_interest() {
        let submission = ContactSubmission {
            project_interest: None,
            ..valid()
        };
        let json = serde_json::to_string(&submission).unwrap();
        assert!(!json.contains("projectInterest"));
    }

    #[test]
    fn test_trimmed() {
        let submission = ContactSubmission {
            name: "  Ayşe ".to_string(),
            project_interest: Some("  ".to_string()),
            ..valid()
        };
        let trimmed = submission.trimmed();
        assert_eq!(trimmed.name, "Ayşe");
        assert_eq!(trimmed.project_interest, None);
    }
}
