use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantNames};
use utoipa::ToSchema;

//
// ──────────────────────────────────────────────────────────
// Profile
// ──────────────────────────────────────────────────────────
//

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    Display,
    VariantNames,
    ToSchema,
)]
pub enum AvailabilityStatus {
    #[serde(rename = "Available")]
    #[strum(serialize = "Available")]
    Available,
    #[serde(rename = "Open to Discuss")]
    #[strum(serialize = "Open to Discuss")]
    OpenToDiscuss,
    #[serde(rename = "Busy")]
    #[strum(serialize = "Busy")]
    Busy,
}

/// Engagement types a profile is open to. Each one becomes a Schema.org Offer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    Display,
    VariantNames,
    ToSchema,
)]
pub enum OpenTo {
    #[serde(rename = "Full-time")]
    #[strum(serialize = "Full-time")]
    FullTime,
    #[serde(rename = "Contract")]
    #[strum(serialize = "Contract")]
    Contract,
    #[serde(rename = "Freelance")]
    #[strum(serialize = "Freelance")]
    Freelance,
    #[serde(rename = "Advisory")]
    #[strum(serialize = "Advisory")]
    Advisory,
}

/// Shared by profile preferences and project records.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    Display,
    VariantNames,
    ToSchema,
)]
pub enum WorkMode {
    Remote,
    Hybrid,
    Onsite,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    Display,
    VariantNames,
    ToSchema,
)]
pub enum AspirationTimeline {
    Immediate,
    Strategic,
    Visionary,
}

//
// ──────────────────────────────────────────────────────────
// Project
// ──────────────────────────────────────────────────────────
//

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    Display,
    VariantNames,
    ToSchema,
)]
pub enum EngagementType {
    Permanent,
    Contract,
}

//
// ──────────────────────────────────────────────────────────
// Blog
// ──────────────────────────────────────────────────────────
//

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    Display,
    VariantNames,
    ToSchema,
)]
pub enum BlogCategory {
    #[serde(rename = "AI Engineering")]
    #[strum(serialize = "AI Engineering")]
    AiEngineering,
    #[serde(rename = "Offensive Security")]
    #[strum(serialize = "Offensive Security")]
    OffensiveSecurity,
    #[serde(rename = "System Design")]
    #[strum(serialize = "System Design")]
    SystemDesign,
    #[serde(rename = "Leadership")]
    #[strum(serialize = "Leadership")]
    Leadership,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    Display,
    VariantNames,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BlogStatus {
    #[default]
    Draft,
    Published,
    Archived,
}
