//! Field-level parsing shared by every entity.
//!
//! Create requests collect every missing field before failing, so a client
//! sees the whole list at once. Format errors (bad UUID, bad date) fail fast.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::ValidationError;

/// Accumulates missing required fields for a create request.
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Required string: absent, null and blank all count as missing.
    pub fn text(&mut self, field: &'static str, value: Option<String>) -> String {
        match value.filter(|v| !v.trim().is_empty()) {
            Some(v) => v,
            None => {
                self.missing.push(field);
                String::new()
            }
        }
    }

    /// Required number (or any other non-string value).
    pub fn value<T: Default>(&mut self, field: &'static str, value: Option<T>) -> T {
        match value {
            Some(v) => v,
            None => {
                self.missing.push(field);
                T::default()
            }
        }
    }

    /// Required identifier referencing another entity.
    pub fn id(
        &mut self,
        field: &'static str,
        value: Option<String>,
    ) -> Result<Uuid, ValidationError> {
        let raw = self.text(field, value);
        if raw.is_empty() {
            return Ok(Uuid::nil());
        }
        parse_uuid(field, &raw)
    }

    /// Required calendar date.
    pub fn date(
        &mut self,
        field: &'static str,
        value: Option<String>,
    ) -> Result<NaiveDate, ValidationError> {
        let raw = self.text(field, value);
        if raw.is_empty() {
            return Ok(NaiveDate::MIN);
        }
        parse_date(field, &raw)
    }

    /// Fail with every missing field, in the order they were checked.
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Missing {
                fields: self.missing,
            })
        }
    }
}

/// Parse the key of an update/delete request.
pub fn require_id(field: &'static str, value: Option<String>) -> Result<Uuid, ValidationError> {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(raw) => parse_uuid(field, &raw),
        None => Err(ValidationError::MissingId { field }),
    }
}

/// Parse an optional identifier on an update request.
pub fn optional_id(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<Uuid>, ValidationError> {
    value.map(|raw| parse_uuid(field, &raw)).transpose()
}

/// Parse an optional date on an update request.
pub fn optional_date(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<NaiveDate>, ValidationError> {
    value.map(|raw| parse_date(field, &raw)).transpose()
}

fn parse_uuid(field: &'static str, raw: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ValidationError::InvalidFormat {
        field,
        reason: "invalid UUID format",
    })
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp (its UTC date is kept).
pub fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|_| ValidationError::InvalidFormat {
            field,
            reason: "expected YYYY-MM-DD or an RFC 3339 timestamp",
        })
}
