use chrono::NaiveDate;

use crate::modules::content::domain::dates::PRESENT;
use crate::modules::content::domain::{ProjectEnd, YearMonth};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// `2020-01` as `Jan 2020`.
pub fn format_month(month: YearMonth) -> String {
    let index = (month.month() - 1) as usize;
    format!("{} {}", MONTH_ABBREVIATIONS[index], month.year())
}

/// `Jan 2020 – Present`, with an en dash.
pub fn format_date_range(start: YearMonth, end: ProjectEnd) -> String {
    let end = match end {
        ProjectEnd::Month(month) => format_month(month),
        ProjectEnd::Present => PRESENT.to_string(),
    };
    format!("{} – {}", format_month(start), end)
}

/// Whole calendar months between start and end, never less than one.
pub fn calculate_duration(start: YearMonth, end: ProjectEnd, today: NaiveDate) -> u32 {
    let months = start.months_until(end.resolve(YearMonth::of(today)));
    u32::try_from(months.max(1)).unwrap_or(u32::MAX)
}

pub fn format_duration(months: u32) -> String {
    if months < 12 {
        return format!("{months} {}", plural(months, "month", "months"));
    }

    let years = months / 12;
    let remaining = months % 12;
    if remaining == 0 {
        format!("{years} {}", plural(years, "year", "years"))
    } else {
        format!("{years} {} {remaining} mo", plural(years, "yr", "yrs"))
    }
}

fn plural<'a>(n: u32, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}
