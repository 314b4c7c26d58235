use serde_json::Value;

use super::record::{Record, Violations};
use super::violations::{Bounds, ContentKind, ValidationError};
use crate::modules::content::domain::Testimonial;

pub fn validate_testimonial(raw: &Value) -> Result<Testimonial, ValidationError> {
    let mut v = Violations::new();
    let testimonial =
        Record::root(raw, &mut v).and_then(|record| read_testimonial(&record, &mut v));
    v.finish(ContentKind::Testimonial, testimonial)
}

fn read_testimonial(r: &Record<'_>, v: &mut Violations) -> Option<Testimonial> {
    let slug = r.slug(v, "slug");
    let screenshot = r.text(v, "screenshot", Bounds::at_least(1));
    let author_name = r.text(v, "authorName", Bounds::between(1, 100));
    let author_role = r.text(v, "authorRole", Bounds::between(1, 150));
    let author_company = r.text(v, "authorCompany", Bounds::between(1, 150));
    let date = r.calendar_date(v, "date");
    let text_content = r.text(v, "textContent", Bounds::at_least(1));
    let related_project = r.optional_text(v, "relatedProject", None);

    Some(Testimonial {
        slug: slug?,
        screenshot: screenshot?,
        author_name: author_name?,
        author_role: author_role?,
        author_company: author_company?,
        date: date?,
        text_content: text_content?,
        related_project,
    })
}
