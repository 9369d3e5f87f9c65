//! Field rules for video input.
//!
//! Request bodies arrive loosely typed (`serde_json::Value`). Each rule turns
//! one raw field into its typed value or a [`FieldError`]; callers run the
//! rules in a fixed order and keep every error in a [`ValidationErrors`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::resolution::Resolution;
use crate::domain::timestamp;

pub const TITLE_MAX_LEN: usize = 40;
pub const AUTHOR_MAX_LEN: usize = 20;
pub const MIN_AGE_RESTRICTION: u8 = 1;
pub const MAX_AGE_RESTRICTION: u8 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Title,
    Author,
    AvailableResolutions,
    CanBeDownloaded,
    MinAgeRestriction,
    PublicationDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub message: String,
    pub field: Field,
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field,
        }
    }
}

/// Ordered list of rule violations, serialized as `{"errorsMessages": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{} field(s) failed validation", .errors_messages.len())]
pub struct ValidationErrors {
    errors_messages: Vec<FieldError>,
}

impl ValidationErrors {
    /// Records the error of a failed rule and returns the value of a passed one.
    pub fn collect<T>(&mut self, outcome: Result<T, FieldError>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(error) => {
                self.errors_messages.push(error);
                None
            }
        }
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors_messages.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors_messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors_messages.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors_messages
    }

    pub fn fields(&self) -> Vec<Field> {
        self.errors_messages.iter().map(|e| e.field).collect()
    }
}

pub fn title(value: Option<&Value>) -> Result<String, FieldError> {
    required_text(value, TITLE_MAX_LEN).ok_or_else(|| {
        FieldError::new(
            Field::Title,
            format!("Title is required and should be less than {TITLE_MAX_LEN} characters"),
        )
    })
}

pub fn author(value: Option<&Value>) -> Result<String, FieldError> {
    required_text(value, AUTHOR_MAX_LEN).ok_or_else(|| {
        FieldError::new(
            Field::Author,
            format!("Author is required and should be less than {AUTHOR_MAX_LEN} characters"),
        )
    })
}

/// A non-empty string whose trimmed length fits `max_len`.
///
/// Length is counted in UTF-16 code units, so a character outside the Basic
/// Multilingual Plane (most emoji) counts as two. Only the empty string counts
/// as missing; a whitespace-only value passes. The text is stored untrimmed.
fn required_text(value: Option<&Value>, max_len: usize) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() && s.trim().encode_utf16().count() <= max_len => {
            Some(s.clone())
        }
        _ => None,
    }
}

/// The list must be a non-empty array. Entries are then checked against
/// [`Resolution`] and only the first unknown entry is reported.
pub fn available_resolutions(value: Option<&Value>) -> Result<Vec<Resolution>, FieldError> {
    let entries = match value {
        Some(Value::Array(entries)) if !entries.is_empty() => entries,
        _ => {
            return Err(FieldError::new(
                Field::AvailableResolutions,
                "At least one resolution should be added",
            ))
        }
    };

    entries
        .iter()
        .map(|entry| {
            entry
                .as_str()
                .and_then(|label| label.parse::<Resolution>().ok())
                .ok_or_else(|| {
                    FieldError::new(
                        Field::AvailableResolutions,
                        format!("Invalid resolution: {}", display_raw(entry)),
                    )
                })
        })
        .collect()
}

pub fn can_be_downloaded(value: Option<&Value>) -> Result<bool, FieldError> {
    match value {
        Some(Value::Bool(flag)) => Ok(*flag),
        _ => Err(FieldError::new(
            Field::CanBeDownloaded,
            "canBeDownloaded must be a boolean",
        )),
    }
}

/// Absent and `null` both mean "no restriction".
pub fn min_age_restriction(value: Option<&Value>) -> Result<Option<u8>, FieldError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        // whole floats such as `5.0` count as integers
        Some(Value::Number(n)) => n
            .as_f64()
            .filter(|age| age.fract() == 0.0)
            .filter(|age| {
                (f64::from(MIN_AGE_RESTRICTION)..=f64::from(MAX_AGE_RESTRICTION)).contains(age)
            })
            .map(|age| Some(age as u8))
            .ok_or_else(min_age_error),
        Some(_) => Err(min_age_error()),
    }
}

fn min_age_error() -> FieldError {
    FieldError::new(
        Field::MinAgeRestriction,
        format!(
            "minAgeRestriction must be between {MIN_AGE_RESTRICTION} and {MAX_AGE_RESTRICTION} or null"
        ),
    )
}

pub fn publication_date(value: Option<&Value>) -> Result<DateTime<Utc>, FieldError> {
    value
        .and_then(Value::as_str)
        .and_then(timestamp::parse)
        .ok_or_else(|| {
            FieldError::new(
                Field::PublicationDate,
                "publicationDate must be a valid date string",
            )
        })
}

fn display_raw(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
