use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

pub const CONTACT_EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static CONTACT_EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(CONTACT_EMAIL_PATTERN).unwrap_or_else(|e| panic!("invalid contact email regex: {e}"))
});

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const EMAIL_INVALID: &str = "Valid email is required";
pub const SUBJECT_REQUIRED: &str = "Subject is required";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

/// A contact form exactly as submitted. Nothing is trimmed or escaped yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Reads the four fields from a JSON body. Absent or non-string fields
    /// are empty, as is everything when the body is not an object.
    pub fn from_json(body: &Value) -> Self {
        let field = |key: &str| {
            body.get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            name: field("name"),
            email: field("email"),
            subject: field("subject"),
            message: field("message"),
        }
    }

    /// Every broken rule, in field order. Lengths count characters of the
    /// raw input.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.name.chars().count() < MIN_NAME_CHARS {
            errors.push(NAME_TOO_SHORT.to_string());
        }
        if !CONTACT_EMAIL_RE.is_match(&self.email) {
            errors.push(EMAIL_INVALID.to_string());
        }
        if self.subject.is_empty() {
            errors.push(SUBJECT_REQUIRED.to_string());
        }
        if self.message.chars().count() < MIN_MESSAGE_CHARS {
            errors.push(MESSAGE_TOO_SHORT.to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
