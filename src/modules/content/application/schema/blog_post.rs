use serde_json::Value;

use super::record::{Record, Violations};
use super::violations::{Bounds, ContentKind, ValidationError};
use crate::modules::content::domain::{BlogCategory, BlogPost, BlogStatus, Series};

pub fn validate_blog_post(raw: &Value) -> Result<BlogPost, ValidationError> {
    let mut v = Violations::new();
    let post = Record::root(raw, &mut v).and_then(|record| read_blog_post(&record, &mut v));
    v.finish(ContentKind::BlogPost, post)
}

fn read_blog_post(r: &Record<'_>, v: &mut Violations) -> Option<BlogPost> {
    let slug = r.slug(v, "slug");
    let title = r.text(v, "title", Bounds::between(1, 200));
    let publish_date = r.calendar_date(v, "publishDate");
    let updated_date = r.optional_calendar_date(v, "updatedDate");
    let seo_description = r.text(v, "seoDescription", Bounds::between(50, 160));
    let cover_image = r.optional_text(v, "coverImage", None);
    let category = r.choice::<BlogCategory>(v, "category");
    let tags = r.strings(v, "tags", Bounds::between(1, 10));
    let series = match r.optional_record(v, "series") {
        Some(series) => read_series(&series, v).map(Some),
        None => Some(None),
    };
    let status = r.choice_or(v, "status", BlogStatus::default());
    let reading_time = r.optional_integer(v, "readingTime", 1, Some(i64::from(u32::MAX)));
    let content = r.optional_text(v, "content", None).unwrap_or_default();

    Some(BlogPost {
        slug: slug?,
        title: title?,
        publish_date: publish_date?,
        updated_date,
        seo_description: seo_description?,
        cover_image,
        category: category?,
        tags: tags?,
        series: series?,
        status: status?,
        reading_time: reading_time.and_then(|n| u32::try_from(n).ok()),
        content,
    })
}

fn read_series(r: &Record<'_>, v: &mut Violations) -> Option<Series> {
    let series_name = r.text(v, "seriesName", Bounds::between(1, 100));
    let part_number = r.integer(v, "partNumber", 1, Some(i64::from(u32::MAX)));

    Some(Series {
        series_name: series_name?,
        part_number: u32::try_from(part_number?).ok()?,
    })
}
