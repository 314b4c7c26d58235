pub mod dates;
pub mod entities;
pub mod enums;

pub use dates::{ProjectEnd, YearMonth};
pub use entities::{Aspiration, BlogPost, Profile, Project, Series, SkillRating, SocialLinks, Testimonial};
pub use enums::{
    AspirationTimeline, AvailabilityStatus, BlogCategory, BlogStatus, EngagementType, OpenTo,
    WorkMode,
};
