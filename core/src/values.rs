//! Conversions from raw form strings to document values

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone};
use serde_json::{json, Map, Number, Value};

use crate::error::ValueError;

const LOCAL_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Split a multi-value input on commas and newlines, dropping blanks.
pub fn split_multi(raw: &str) -> Vec<String> {
    raw.split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

pub fn parse_integer(raw: &str) -> Result<Value, ValueError> {
    raw.trim()
        .parse::<i64>()
        .map(Value::from)
        .map_err(|_| ValueError::Integer(raw.to_string()))
}

pub fn parse_number(raw: &str) -> Result<Value, ValueError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| ValueError::Number(raw.to_string()))
}

/// Parse author text into a list of Person objects.
///
/// Accepts a JSON array, a single object or a single string. Strings are
/// taken as names. Objects without an `@type` become Persons. An empty
/// array yields an empty list.
pub fn parse_authors(raw: &str) -> Result<Vec<Value>, ValueError> {
    let parsed: Value =
        serde_json::from_str(raw).map_err(|e| ValueError::Authors(e.to_string()))?;

    let items = match parsed {
        Value::Array(items) => items,
        single @ (Value::Object(_) | Value::String(_)) => vec![single],
        other => {
            return Err(ValueError::Authors(format!(
                "expected a list of authors, found {}",
                json_kind(&other)
            )))
        }
    };

    items.into_iter().map(person).collect()
}

fn person(item: Value) -> Result<Value, ValueError> {
    match item {
        Value::String(name) if !name.trim().is_empty() => {
            Ok(json!({ "@type": "Person", "name": name.trim() }))
        }
        Value::Object(map) if map.contains_key("@type") => Ok(Value::Object(map)),
        Value::Object(map) => {
            let mut with_type = Map::new();
            with_type.insert("@type".to_string(), json!("Person"));
            with_type.extend(map);
            Ok(Value::Object(with_type))
        }
        other => Err(ValueError::Authors(format!(
            "each author must be a name or an object, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "an empty string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Normalise a date input to `YYYY-MM-DD`.
pub fn normalize_date(raw: &str) -> Result<String, ValueError> {
    let raw = raw.trim();
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| parse_local_datetime(raw).map(|dt| dt.date()))
        .ok_or_else(|| ValueError::Date(raw.to_string()))?;
    Ok(date.format("%Y-%m-%d").to_string())
}

/// Normalise a date-time input to an RFC 3339 timestamp.
///
/// Inputs without an offset (HTML `datetime-local`, bare dates) are read
/// in `offset`.
pub fn normalize_datetime(raw: &str, offset: FixedOffset) -> Result<String, ValueError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(format_timestamp(dt));
    }

    let local = parse_local_datetime(raw)
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| ValueError::DateTime(raw.to_string()))?;

    offset
        .from_local_datetime(&local)
        .single()
        .map(format_timestamp)
        .ok_or_else(|| ValueError::DateTime(raw.to_string()))
}

/// RFC 3339 at second precision, `Z` for UTC.
pub fn format_timestamp(dt: DateTime<FixedOffset>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn parse_local_datetime(raw: &str) -> Option<NaiveDateTime> {
    LOCAL_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_multi() {
        assert_eq!(split_multi("a, b ,, c"), vec!["a", "b", "c"]);
        assert_eq!(
            split_multi("https://a.example\n https://b.example\r\n"),
            vec!["https://a.example", "https://b.example"]
        );
        assert!(split_multi("").is_empty());
        assert!(split_multi(" ,\n, ").is_empty());
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer(" 42 ").unwrap(), json!(42));
        assert_eq!(
            parse_integer("4.5"),
            Err(ValueError::Integer("4.5".to_string()))
        );
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("19.99").unwrap(), json!(19.99));
        assert!(parse_number("NaN").is_err());
        assert!(parse_number("cheap").is_err());
    }

    #[test]
    fn test_parse_authors_mixed_entries() {
        let authors =
            parse_authors(r#"["Ada Lovelace", {"name": "Alan Turing", "url": "https://example.com/alan"}]"#)
                .unwrap();

        assert_eq!(authors.len(), 2);
        assert_eq!(authors[0], json!({ "@type": "Person", "name": "Ada Lovelace" }));
        let keys: Vec<&String> = authors[1].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["@type", "name", "url"]);
    }

    #[test]
    fn test_parse_authors_keeps_explicit_type() {
        let authors = parse_authors(r#"{"@type": "Organization", "name": "Newsroom"}"#).unwrap();
        assert_eq!(authors, vec![json!({ "@type": "Organization", "name": "Newsroom" })]);
    }

    #[test]
    fn test_parse_authors_rejects_malformed() {
        assert!(matches!(parse_authors("[{\"name\": "), Err(ValueError::Authors(_))));
        assert!(matches!(parse_authors("42"), Err(ValueError::Authors(_))));
        assert!(matches!(parse_authors("[1, 2]"), Err(ValueError::Authors(_))));
        assert!(parse_authors("[]").unwrap().is_empty());
    }

    #[test]
    fn test_normalize_date() {
        assert_eq!(normalize_date("2024-03-05").unwrap(), "2024-03-05");
        assert_eq!(normalize_date("2024-03-05T22:10").unwrap(), "2024-03-05");
        assert_eq!(normalize_date("2024-03-05T22:10:00+02:00").unwrap(), "2024-03-05");
        assert!(normalize_date("March 5th").is_err());
    }

    #[test]
    fn test_normalize_datetime() {
        let utc = FixedOffset::east_opt(0).unwrap();
        let est = FixedOffset::west_opt(5 * 3600).unwrap();

        assert_eq!(
            normalize_datetime("2024-03-05T09:30", utc).unwrap(),
            "2024-03-05T09:30:00Z"
        );
        assert_eq!(
            normalize_datetime("2024-03-05T09:30", est).unwrap(),
            "2024-03-05T09:30:00-05:00"
        );
        assert_eq!(
            normalize_datetime("2024-03-05", est).unwrap(),
            "2024-03-05T00:00:00-05:00"
        );
        assert_eq!(
            normalize_datetime("2024-03-05T09:30:12.345+01:00", utc).unwrap(),
            "2024-03-05T09:30:12+01:00"
        );
        assert!(normalize_datetime("tomorrow", utc).is_err());
    }
}
