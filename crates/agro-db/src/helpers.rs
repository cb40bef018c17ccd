//! Row-to-entity parsing helpers.
//!
//! Timestamps written by this crate are RFC 3339; rows created with the
//! column defaults use `SQLite`'s `datetime('now')` format. Both are accepted.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::DatabaseError;

/// Parse a TEXT column as `DateTime<Utc>`.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a `YYYY-MM-DD` TEXT column.
pub fn parse_date(s: &str) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}")))
}

pub fn parse_optional_date(s: Option<&str>) -> Result<Option<NaiveDate>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_date(s)?)),
        _ => Ok(None),
    }
}

/// Format a date the way [`parse_date`] reads it.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a TEXT column into a `snake_case` serde enum.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column is an error, not `""`.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Optional text as a bindable value.
#[must_use]
pub fn opt_text(value: Option<&str>) -> libsql::Value {
    value.map_or(libsql::Value::Null, |s| libsql::Value::Text(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use agro_core::enums::Species;

    #[test]
    fn datetime_accepts_both_formats() {
        let rfc = parse_datetime("2024-06-01T12:00:00+00:00").unwrap();
        let sqlite = parse_datetime("2024-06-01 12:00:00").unwrap();
        assert_eq!(rfc, sqlite);
        assert!(parse_datetime("June 1st").is_err());
    }

    #[test]
    fn dates_round_trip_through_text() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(parse_date(&format_date(date)).unwrap(), date);
        assert_eq!(parse_optional_date(Some("")).unwrap(), None);
        assert!(parse_date("29/02/2024").is_err());
    }

    #[test]
    fn enums_parse_from_snake_case() {
        let species: Species = parse_enum("goats").unwrap();
        assert_eq!(species, Species::Goats);
        assert!(parse_enum::<Species>("unicorns").is_err());
    }
}
