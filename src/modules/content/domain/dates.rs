use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ASCII digits only.
pub const YEAR_MONTH_PATTERN: &str = r"^[0-9]{4}-[0-9]{2}$";
pub const PROJECT_END_PATTERN: &str = r"^([0-9]{4}-[0-9]{2}|Present)$";
pub const CALENDAR_DATE_PATTERN: &str = r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$";
pub const PRESENT: &str = "Present";

static YEAR_MONTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(YEAR_MONTH_PATTERN).unwrap_or_else(|e| panic!("invalid year-month regex: {e}"))
});
static CALENDAR_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(CALENDAR_DATE_PATTERN).unwrap_or_else(|e| panic!("invalid date regex: {e}"))
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateParseError {
    #[error("expected format {pattern}")]
    Shape { pattern: &'static str },

    #[error("month must be between 01 and 12")]
    MonthOutOfRange,

    #[error("not a calendar date")]
    NotACalendarDate,
}

//
// ──────────────────────────────────────────────────────────
// YearMonth (YYYY-MM)
// ──────────────────────────────────────────────────────────
//

/// A `YYYY-MM` month. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-based month.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Signed calendar-month distance from `self` to `later`.
    pub fn months_until(&self, later: YearMonth) -> i64 {
        (i64::from(later.year) - i64::from(self.year)) * 12
            + (i64::from(later.month) - i64::from(self.month))
    }
}

impl FromStr for YearMonth {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !YEAR_MONTH_RE.is_match(s) {
            return Err(DateParseError::Shape {
                pattern: YEAR_MONTH_PATTERN,
            });
        }

        let shape = || DateParseError::Shape {
            pattern: YEAR_MONTH_PATTERN,
        };
        let year: i32 = s.get(..4).and_then(|y| y.parse().ok()).ok_or_else(shape)?;
        let month: u32 = s.get(5..).and_then(|m| m.parse().ok()).ok_or_else(shape)?;

        Self::new(year, month).ok_or(DateParseError::MonthOutOfRange)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

//
// ──────────────────────────────────────────────────────────
// ProjectEnd (YYYY-MM | Present)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectEnd {
    Month(YearMonth),
    Present,
}

impl ProjectEnd {
    /// The concrete month this end stands for, with `Present` meaning `today`.
    pub fn resolve(&self, today: YearMonth) -> YearMonth {
        match self {
            ProjectEnd::Month(month) => *month,
            ProjectEnd::Present => today,
        }
    }
}

impl FromStr for ProjectEnd {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == PRESENT {
            return Ok(ProjectEnd::Present);
        }
        s.parse().map(ProjectEnd::Month).map_err(|e| match e {
            DateParseError::Shape { .. } => DateParseError::Shape {
                pattern: PROJECT_END_PATTERN,
            },
            other => other,
        })
    }
}

impl fmt::Display for ProjectEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectEnd::Month(month) => write!(f, "{month}"),
            ProjectEnd::Present => f.write_str(PRESENT),
        }
    }
}

impl Serialize for ProjectEnd {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ProjectEnd {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

//
// ──────────────────────────────────────────────────────────
// Calendar dates (YYYY-MM-DD)
// ──────────────────────────────────────────────────────────
//

pub fn parse_calendar_date(s: &str) -> Result<NaiveDate, DateParseError> {
    if !CALENDAR_DATE_RE.is_match(s) {
        return Err(DateParseError::Shape {
            pattern: CALENDAR_DATE_PATTERN,
        });
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| DateParseError::NotACalendarDate)
}
