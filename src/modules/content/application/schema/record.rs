use std::collections::HashSet;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveDate;
use email_address::EmailAddress;
use regex::Regex;
use serde_json::{Map, Value};
use strum::VariantNames;

use super::violations::{Bounds, Constraint, ContentKind, FieldViolation, ValidationError};
use crate::modules::content::domain::dates::{
    parse_calendar_date, DateParseError, ProjectEnd, YearMonth,
};

pub const SLUG_PATTERN: &str = r"^[a-z0-9-]+$";

static SLUG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(SLUG_PATTERN).unwrap_or_else(|e| panic!("invalid slug regex: {e}"))
});
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^\s/?#]+[^\s]*$")
        .unwrap_or_else(|e| panic!("invalid url regex: {e}"))
});

//
// ──────────────────────────────────────────────────────────
// Violations
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default)]
pub struct Violations {
    items: Vec<FieldViolation>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, constraint: Constraint, actual: Option<&Value>) {
        self.items.push(FieldViolation {
            field: field.into(),
            constraint,
            actual: actual.cloned(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `Ok` only when nothing was recorded and the record could be assembled.
    pub fn finish<T>(self, kind: ContentKind, value: Option<T>) -> Result<T, ValidationError> {
        match value {
            Some(value) if self.items.is_empty() => Ok(value),
            _ => Err(ValidationError {
                kind,
                violations: self.items,
            }),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Record
// ──────────────────────────────────────────────────────────
//

/// Read-only view over one JSON object. Every accessor records what it finds
/// wrong and keeps going, so a single pass reports all violations.
///
/// `null` counts as absent. Blank optional strings count as absent too.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    object: &'a Map<String, Value>,
    path: String,
}

impl<'a> Record<'a> {
    pub fn root(value: &'a Value, v: &mut Violations) -> Option<Self> {
        Self::at(value, String::new(), v)
    }

    fn at(value: &'a Value, path: String, v: &mut Violations) -> Option<Self> {
        match value.as_object() {
            Some(object) => Some(Self { object, path }),
            None => {
                v.push(
                    path,
                    Constraint::WrongType {
                        expected: "an object",
                    },
                    Some(value),
                );
                None
            }
        }
    }

    pub fn path_of(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    fn lookup(&self, key: &str) -> Option<&'a Value> {
        self.object.get(key).filter(|value| !value.is_null())
    }

    fn required(&self, v: &mut Violations, key: &str) -> Option<&'a Value> {
        let value = self.lookup(key);
        if value.is_none() {
            v.push(self.path_of(key), Constraint::Required, None);
        }
        value
    }

    // ── strings ───────────────────────────────────────────

    pub fn text(&self, v: &mut Violations, key: &str, bounds: Bounds) -> Option<String> {
        let value = self.required(v, key)?;
        let path = self.path_of(key);
        let s = expect_str(v, &path, value)?;
        check_length(v, &path, value, s, bounds).then(|| s.to_string())
    }

    /// Collection key, also used verbatim in page URLs.
    pub fn slug(&self, v: &mut Violations, key: &str) -> Option<String> {
        let value = self.required(v, key)?;
        let path = self.path_of(key);
        let s = expect_str(v, &path, value)?;
        if !check_length(v, &path, value, s, Bounds::between(1, 100)) {
            return None;
        }
        if !SLUG_RE.is_match(s) {
            v.push(path, Constraint::Pattern { pattern: SLUG_PATTERN }, Some(value));
            return None;
        }
        Some(s.to_string())
    }

    pub fn optional_text(
        &self,
        v: &mut Violations,
        key: &str,
        bounds: Option<Bounds>,
    ) -> Option<String> {
        let value = self.lookup(key)?;
        let path = self.path_of(key);
        let s = expect_str(v, &path, value)?;
        if s.trim().is_empty() {
            return None;
        }
        match bounds {
            Some(bounds) => check_length(v, &path, value, s, bounds).then(|| s.to_string()),
            None => Some(s.to_string()),
        }
    }

    pub fn email(&self, v: &mut Violations, key: &str) -> Option<String> {
        let value = self.required(v, key)?;
        let path = self.path_of(key);
        let s = expect_str(v, &path, value)?;
        if EmailAddress::is_valid(s) {
            Some(s.to_string())
        } else {
            v.push(path, Constraint::Email, Some(value));
            None
        }
    }

    pub fn optional_url(&self, v: &mut Violations, key: &str) -> Option<String> {
        let value = self.lookup(key)?;
        let path = self.path_of(key);
        let s = expect_str(v, &path, value)?;
        if s.trim().is_empty() {
            return None;
        }
        if URL_RE.is_match(s) {
            Some(s.to_string())
        } else {
            v.push(path, Constraint::Url, Some(value));
            None
        }
    }

    // ── enums ─────────────────────────────────────────────

    pub fn choice<E>(&self, v: &mut Violations, key: &str) -> Option<E>
    where
        E: FromStr + VariantNames,
    {
        let value = self.required(v, key)?;
        parse_choice(v, &self.path_of(key), value)
    }

    /// Like [`Record::choice`] but an absent field takes `default`.
    pub fn choice_or<E>(&self, v: &mut Violations, key: &str, default: E) -> Option<E>
    where
        E: FromStr + VariantNames,
    {
        match self.lookup(key) {
            Some(value) => parse_choice(v, &self.path_of(key), value),
            None => Some(default),
        }
    }

    /// A set of enum values: no repeats, element count within `bounds`.
    pub fn choices<E>(&self, v: &mut Violations, key: &str, bounds: Bounds) -> Option<Vec<E>>
    where
        E: FromStr + VariantNames,
    {
        let items = self.array(v, key, bounds, true)?;
        let path = self.path_of(key);

        let mut seen = HashSet::new();
        let mut parsed = Vec::with_capacity(items.len());
        let mut ok = true;
        for (i, item) in items.iter().enumerate() {
            let item_path = format!("{path}[{i}]");
            if let Some(s) = item.as_str() {
                if !seen.insert(s) {
                    v.push(item_path, Constraint::Unique, Some(item));
                    ok = false;
                    continue;
                }
            }
            match parse_choice::<E>(v, &item_path, item) {
                Some(choice) => parsed.push(choice),
                None => ok = false,
            }
        }
        ok.then_some(parsed)
    }

    // ── scalars ───────────────────────────────────────────

    /// Absent means `false`.
    pub fn flag(&self, v: &mut Violations, key: &str) -> bool {
        match self.lookup(key) {
            None => false,
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                v.push(
                    self.path_of(key),
                    Constraint::WrongType {
                        expected: "a boolean",
                    },
                    Some(other),
                );
                false
            }
        }
    }

    pub fn integer(
        &self,
        v: &mut Violations,
        key: &str,
        min: i64,
        max: Option<i64>,
    ) -> Option<i64> {
        let value = self.required(v, key)?;
        check_integer(v, &self.path_of(key), value, min, max)
    }

    pub fn optional_integer(
        &self,
        v: &mut Violations,
        key: &str,
        min: i64,
        max: Option<i64>,
    ) -> Option<i64> {
        let value = self.lookup(key)?;
        check_integer(v, &self.path_of(key), value, min, max)
    }

    // ── dates ─────────────────────────────────────────────

    pub fn year_month(&self, v: &mut Violations, key: &str) -> Option<YearMonth> {
        self.parsed(v, key, |s| s.parse::<YearMonth>())
    }

    pub fn project_end(&self, v: &mut Violations, key: &str) -> Option<ProjectEnd> {
        self.parsed(v, key, |s| s.parse::<ProjectEnd>())
    }

    pub fn calendar_date(&self, v: &mut Violations, key: &str) -> Option<NaiveDate> {
        self.parsed(v, key, parse_calendar_date)
    }

    pub fn optional_calendar_date(&self, v: &mut Violations, key: &str) -> Option<NaiveDate> {
        self.lookup(key)?;
        self.calendar_date(v, key)
    }

    fn parsed<T>(
        &self,
        v: &mut Violations,
        key: &str,
        parse: impl FnOnce(&str) -> Result<T, DateParseError>,
    ) -> Option<T> {
        let value = self.required(v, key)?;
        let path = self.path_of(key);
        let s = expect_str(v, &path, value)?;
        match parse(s) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                let constraint = match e {
                    DateParseError::Shape { pattern } => Constraint::Pattern { pattern },
                    DateParseError::MonthOutOfRange => Constraint::MonthRange,
                    DateParseError::NotACalendarDate => Constraint::CalendarDate,
                };
                v.push(path, constraint, Some(value));
                None
            }
        }
    }

    // ── arrays & nested objects ───────────────────────────

    pub fn strings(&self, v: &mut Violations, key: &str, bounds: Bounds) -> Option<Vec<String>> {
        let items = self.array(v, key, bounds, true)?;
        self.collect_strings(v, key, items)
    }

    /// Absent means empty.
    pub fn optional_strings(&self, v: &mut Violations, key: &str) -> Option<Vec<String>> {
        match self.array(v, key, Bounds::at_least(0), false) {
            Some(items) => self.collect_strings(v, key, items),
            None if self.lookup(key).is_none() => Some(Vec::new()),
            None => None,
        }
    }

    fn collect_strings(
        &self,
        v: &mut Violations,
        key: &str,
        items: &'a [Value],
    ) -> Option<Vec<String>> {
        let path = self.path_of(key);
        let mut out = Vec::with_capacity(items.len());
        let mut ok = true;
        for (i, item) in items.iter().enumerate() {
            match expect_str(v, &format!("{path}[{i}]"), item) {
                Some(s) => out.push(s.to_string()),
                None => ok = false,
            }
        }
        ok.then_some(out)
    }

    /// Each element of an array of objects as its own record.
    pub fn records(&self, v: &mut Violations, key: &str, bounds: Bounds) -> Option<Vec<Record<'a>>> {
        let items = self.array(v, key, bounds, true)?;
        let path = self.path_of(key);
        let mut out = Vec::with_capacity(items.len());
        let mut ok = true;
        for (i, item) in items.iter().enumerate() {
            match Record::at(item, format!("{path}[{i}]"), v) {
                Some(record) => out.push(record),
                None => ok = false,
            }
        }
        ok.then_some(out)
    }

    /// `None` when absent or not an object (the latter is recorded).
    pub fn optional_record(&self, v: &mut Violations, key: &str) -> Option<Record<'a>> {
        let value = self.lookup(key)?;
        Record::at(value, self.path_of(key), v)
    }

    fn array(
        &self,
        v: &mut Violations,
        key: &str,
        bounds: Bounds,
        required: bool,
    ) -> Option<&'a [Value]> {
        let value = if required {
            self.required(v, key)?
        } else {
            self.lookup(key)?
        };
        let path = self.path_of(key);
        let Some(items) = value.as_array() else {
            v.push(
                path,
                Constraint::WrongType {
                    expected: "an array",
                },
                Some(value),
            );
            return None;
        };
        if !bounds.contains(items.len()) {
            v.push(path, Constraint::Items { bounds }, Some(value));
            return None;
        }
        Some(items.as_slice())
    }
}

//
// ──────────────────────────────────────────────────────────
// Helpers
// ──────────────────────────────────────────────────────────
//

fn expect_str<'v>(v: &mut Violations, path: &str, value: &'v Value) -> Option<&'v str> {
    let s = value.as_str();
    if s.is_none() {
        v.push(
            path,
            Constraint::WrongType {
                expected: "a string",
            },
            Some(value),
        );
    }
    s
}

fn check_length(v: &mut Violations, path: &str, value: &Value, s: &str, bounds: Bounds) -> bool {
    let ok = bounds.contains(s.chars().count());
    if !ok {
        v.push(path, Constraint::Length { bounds }, Some(value));
    }
    ok
}

fn parse_choice<E>(v: &mut Violations, path: &str, value: &Value) -> Option<E>
where
    E: FromStr + VariantNames,
{
    let s = expect_str(v, path, value)?;
    let parsed = E::from_str(s).ok();
    if parsed.is_none() {
        v.push(
            path,
            Constraint::OneOf {
                allowed: E::VARIANTS,
            },
            Some(value),
        );
    }
    parsed
}

fn check_integer(
    v: &mut Violations,
    path: &str,
    value: &Value,
    min: i64,
    max: Option<i64>,
) -> Option<i64> {
    let integer = value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    });

    match integer {
        Some(n) if n >= min && max.map_or(true, |max| n <= max) => Some(n),
        Some(_) => {
            v.push(path, Constraint::Range { min, max }, Some(value));
            None
        }
        None => {
            v.push(
                path,
                Constraint::WrongType {
                    expected: "an integer",
                },
                Some(value),
            );
            None
        }
    }
}
