use std::fmt;

use serde::Serialize;
use serde_json::Value;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    #[strum(serialize = "profile")]
    Profile,
    #[strum(serialize = "project")]
    Project,
    #[strum(serialize = "testimonial")]
    Testimonial,
    #[strum(serialize = "blog post")]
    BlogPost,
}

/// Inclusive element or character count bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub min: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
}

impl Bounds {
    pub const fn between(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    pub const fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    pub fn contains(&self, count: usize) -> bool {
        count >= self.min && self.max.map_or(true, |max| count <= max)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}..={}", self.min, max),
            None => write!(f, ">= {}", self.min),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Constraint {
    Required,
    WrongType { expected: &'static str },
    Length { bounds: Bounds },
    OneOf { allowed: &'static [&'static str] },
    Unique,
    Items { bounds: Bounds },
    Pattern { pattern: &'static str },
    MonthRange,
    CalendarDate,
    Email,
    Url,
    Range { min: i64, max: Option<i64> },
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Required => write!(f, "is required"),
            Constraint::WrongType { expected } => write!(f, "must be {expected}"),
            Constraint::Length { bounds } => write!(f, "length must be {bounds} characters"),
            Constraint::OneOf { allowed } => write!(f, "must be one of {}", allowed.join(", ")),
            Constraint::Unique => write!(f, "must not repeat an earlier value"),
            Constraint::Items { bounds } => write!(f, "must contain {bounds} items"),
            Constraint::Pattern { pattern } => write!(f, "must match {pattern}"),
            Constraint::MonthRange => write!(f, "month must be between 01 and 12"),
            Constraint::CalendarDate => write!(f, "must be a real calendar date"),
            Constraint::Email => write!(f, "must be a valid email address"),
            Constraint::Url => write!(f, "must be a valid URL"),
            Constraint::Range { min, max: Some(max) } => {
                write!(f, "must be an integer between {min} and {max}")
            }
            Constraint::Range { min, max: None } => write!(f, "must be an integer >= {min}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub constraint: Constraint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<Value>,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = if self.field.is_empty() {
            "<record>"
        } else {
            self.field.as_str()
        };
        match &self.actual {
            Some(actual) => write!(f, "{field} {} (got {actual})", self.constraint),
            None => write!(f, "{field} {}", self.constraint),
        }
    }
}

/// Every constraint a record violated, never only the first one.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("{kind} failed validation: {}", summarize(.violations))]
pub struct ValidationError {
    pub kind: ContentKind,
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn has_violation_on(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    pub fn constraint_on(&self, field: &str) -> Option<&Constraint> {
        self.violations
            .iter()
            .find(|v| v.field == field)
            .map(|v| &v.constraint)
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
