pub mod email_notifier;
pub mod logging_notifier;

pub use email_notifier::EmailContactNotifier;
pub use logging_notifier::LoggingContactNotifier;
