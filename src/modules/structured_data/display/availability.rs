use std::str::FromStr;

use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::content::domain::AvailabilityStatus;

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityDisplay {
    #[schema(example = "🟢")]
    pub emoji: String,
    #[schema(example = "text-green-400")]
    pub color_class: String,
    #[schema(example = "Available for Work")]
    pub label: String,
}

impl AvailabilityDisplay {
    fn new(emoji: &str, color_class: &str, label: &str) -> Self {
        Self {
            emoji: emoji.to_string(),
            color_class: color_class.to_string(),
            label: label.to_string(),
        }
    }

    pub fn unknown() -> Self {
        Self::new("⚪", "text-gray-400", "Status Unknown")
    }
}

pub fn availability_display(status: AvailabilityStatus) -> AvailabilityDisplay {
    match status {
        AvailabilityStatus::Available => {
            AvailabilityDisplay::new("🟢", "text-green-400", "Available for Work")
        }
        AvailabilityStatus::OpenToDiscuss => {
            AvailabilityDisplay::new("🟡", "text-yellow-400", "Open to Discuss")
        }
        AvailabilityStatus::Busy => AvailabilityDisplay::new("🔴", "text-red-400", "Currently Busy"),
    }
}

/// For labels that never went through validation.
pub fn availability_display_for(raw: &str) -> AvailabilityDisplay {
    AvailabilityStatus::from_str(raw)
        .map(availability_display)
        .unwrap_or_else(|_| AvailabilityDisplay::unknown())
}
