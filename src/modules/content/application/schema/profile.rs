use serde_json::Value;

use super::record::{Record, Violations};
use super::violations::{Bounds, ContentKind, ValidationError};
use crate::modules::content::domain::{
    Aspiration, AspirationTimeline, AvailabilityStatus, OpenTo, Profile, SocialLinks, WorkMode,
};

pub fn validate_profile(raw: &Value) -> Result<Profile, ValidationError> {
    let mut v = Violations::new();
    let profile = Record::root(raw, &mut v).and_then(|record| read_profile(&record, &mut v));
    v.finish(ContentKind::Profile, profile)
}

fn read_profile(r: &Record<'_>, v: &mut Violations) -> Option<Profile> {
    let name = r.text(v, "name", Bounds::between(1, 100));
    let title = r.text(v, "title", Bounds::between(1, 150));
    let tagline = r.text(v, "tagline", Bounds::between(1, 300));
    let email = r.email(v, "email");
    let phone = r.optional_text(v, "phone", None);
    let avatar_image = r.optional_text(v, "avatarImage", None);
    let location = r.text(v, "location", Bounds::between(1, 100));
    let timezone = r.text(v, "timezone", Bounds::between(1, 50));
    let availability_status = r.choice::<AvailabilityStatus>(v, "availabilityStatus");
    let open_to = r.choices::<OpenTo>(v, "openTo", Bounds::at_least(1));
    let work_modes = r.choices::<WorkMode>(v, "workModes", Bounds::at_least(1));
    let social_links = read_social_links(r, v);
    let aspirations = r
        .records(v, "aspirations", Bounds::between(1, 10))
        .and_then(|items| {
            let parsed: Vec<_> = items.iter().map(|item| read_aspiration(item, v)).collect();
            parsed.into_iter().collect::<Option<Vec<_>>>()
        });
    let bio = r.optional_text(v, "bio", None);

    Some(Profile {
        name: name?,
        title: title?,
        tagline: tagline?,
        email: email?,
        phone,
        avatar_image,
        location: location?,
        timezone: timezone?,
        availability_status: availability_status?,
        open_to: open_to?,
        work_modes: work_modes?,
        social_links: social_links?,
        aspirations: aspirations?,
        bio,
    })
}

/// A missing `socialLinks` object means no links at all.
fn read_social_links(r: &Record<'_>, v: &mut Violations) -> Option<SocialLinks> {
    let Some(links) = r.optional_record(v, "socialLinks") else {
        return Some(SocialLinks::default());
    };
    Some(SocialLinks {
        linkedin: links.optional_url(v, "linkedin"),
        github: links.optional_url(v, "github"),
        twitter: links.optional_url(v, "twitter"),
        medium: links.optional_url(v, "medium"),
    })
}

fn read_aspiration(r: &Record<'_>, v: &mut Violations) -> Option<Aspiration> {
    let goal = r.text(v, "goal", Bounds::between(1, 200));
    let timeline = r.choice::<AspirationTimeline>(v, "timeline");
    let icon = r.optional_text(v, "icon", None);

    Some(Aspiration {
        goal: goal?,
        timeline: timeline?,
        icon,
    })
}
