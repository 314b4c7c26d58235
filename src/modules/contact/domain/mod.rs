pub mod contact_form;
pub mod contact_submission;

pub use contact_form::ContactForm;
pub use contact_submission::{sanitize, ContactSubmission};
