//! Validators turning untyped JSON records into content entities.

pub mod blog_post;
pub mod profile;
pub mod project;
pub mod record;
pub mod testimonial;
pub mod violations;

pub use blog_post::validate_blog_post;
pub use profile::validate_profile;
pub use project::validate_project;
pub use testimonial::validate_testimonial;
pub use violations::{Bounds, Constraint, ContentKind, FieldViolation, ValidationError};
