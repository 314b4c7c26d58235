use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::contact_form::ContactForm;

pub const UNKNOWN_USER_AGENT: &str = "unknown";

/// A validated form, made safe to embed in HTML and stamped with its
/// arrival.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// RFC 3339, UTC, millisecond precision.
    pub timestamp: String,
    pub user_agent: String,
}

impl ContactSubmission {
    pub fn new(form: &ContactForm, received_at: DateTime<Utc>, user_agent: Option<&str>) -> Self {
        Self {
            name: sanitize(&form.name),
            email: sanitize(&form.email),
            subject: sanitize(&form.subject),
            message: sanitize(&form.message),
            timestamp: received_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            user_agent: user_agent
                .filter(|ua| !ua.is_empty())
                .unwrap_or(UNKNOWN_USER_AGENT)
                .to_string(),
        }
    }
}

/// Escapes `<`, `>`, `"` and `'`, then trims.
pub fn sanitize(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sanitize_escapes_markup_and_quotes() {
        assert_eq!(
            sanitize(r#"  <script>alert("hi")</script> it's  "#),
            "&lt;script&gt;alert(&quot;hi&quot;)&lt;/script&gt; it&#x27;s"
        );
    }

    #[test]
    fn test_sanitize_leaves_ampersands_alone() {
        assert_eq!(sanitize("R&D"), "R&D");
    }

    #[test]
    fn test_submission_fields() {
        let form = ContactForm::new(" Bob ", "bob@example.com", "<b>Hi</b>", "Let's build it.");
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();

        let submission = ContactSubmission::new(&form, at, Some("curl/8.4"));

        assert_eq!(submission.name, "Bob");
        assert_eq!(submission.subject, "&lt;b&gt;Hi&lt;/b&gt;");
        assert_eq!(submission.message, "Let&#x27;s build it.");
        assert_eq!(submission.timestamp, "2024-03-01T09:30:00.000Z");
        assert_eq!(submission.user_agent, "curl/8.4");
    }

    #[test]
    fn test_missing_user_agent_is_unknown() {
        let form = ContactForm::new("Bob", "bob@example.com", "Hi", "Hello there, Jane!");
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();

        assert_eq!(ContactSubmission::new(&form, at, None).user_agent, "unknown");
        assert_eq!(ContactSubmission::new(&form, at, Some("")).user_agent, "unknown");
    }
}
