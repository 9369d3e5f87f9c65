//! Timestamp encoding shared by every video record.
//!
//! Timestamps go over the wire as UTC with millisecond precision and a `Z`
//! suffix, e.g. `2023-10-05T14:30:00.000Z`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

pub fn format(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses a caller-supplied date string.
///
/// Accepts:
/// - ISO 8601 date-times with an offset (`Z`, `+02:00` or `+0200`), to
///   minute or sub-second precision
/// - zone-less ISO 8601 date-times, read as UTC
/// - RFC 2822 (`Thu, 12 Jan 2023 08:12:39 GMT`)
/// - calendar dates `YYYY-MM-DD`, `YYYY/MM/DD`, `YYYY-MM` and `YYYY`, at
///   midnight UTC on the first day they name
pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    // %#z also takes `Z` and offsets with or without a colon
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"] {
        if let Ok(dt) = DateTime::parse_from_str(raw, pattern) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(naive.and_utc());
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    parse_calendar_date(raw)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    for pattern in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, pattern) {
            return Some(date);
        }
    }

    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match raw.split_once('-') {
        Some((year, month)) if year.len() == 4 && month.len() == 2 => {
            if !is_digits(year) || !is_digits(month) {
                return None;
            }
            NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
        }
        None if raw.len() == 4 && is_digits(raw) => NaiveDate::from_ymd_opt(raw.parse().ok()?, 1, 1),
        _ => None,
    }
}

/// `#[serde(with = "iso8601")]` adapter for `DateTime<Utc>` fields.
pub mod iso8601 {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_with_exactly_three_fraction_digits() {
        let whole = Utc.with_ymd_and_hms(2023, 10, 5, 14, 30, 0).unwrap();
        assert_eq!(format(&whole), "2023-10-05T14:30:00.000Z");

        let parsed = parse("2023-01-12T08:12:39.261Z").unwrap();
        assert_eq!(format(&parsed), "2023-01-12T08:12:39.261Z");
    }

    #[test]
    fn parses_offsets_into_utc() {
        let parsed = parse("2023-01-12T10:12:39+02:00").unwrap();
        assert_eq!(format(&parsed), "2023-01-12T08:12:39.000Z");
    }

    #[test]
    fn parses_zoneless_and_date_only_forms() {
        assert_eq!(
            parse("2024-02-29T12:00:00").unwrap(),
            Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap()
        );
        assert_eq!(
            parse("2024-02-29").unwrap(),
            Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn parses_minute_precision_and_colonless_offsets() {
        assert_eq!(
            format(&parse("2023-01-12T08:12Z").unwrap()),
            "2023-01-12T08:12:00.000Z"
        );
        assert_eq!(
            format(&parse("2023-01-12T10:12+02:00").unwrap()),
            "2023-01-12T08:12:00.000Z"
        );
        assert_eq!(
            format(&parse("2023-01-12T08:12:39.261+0200").unwrap()),
            "2023-01-12T06:12:39.261Z"
        );
        assert_eq!(
            format(&parse("2023-01-12T08:12:39-0500").unwrap()),
            "2023-01-12T13:12:39.000Z"
        );
    }

    #[test]
    fn parses_rfc2822() {
        assert_eq!(
            format(&parse("Thu, 12 Jan 2023 08:12:39 GMT").unwrap()),
            "2023-01-12T08:12:39.000Z"
        );
    }

    #[test]
    fn parses_partial_and_slashed_dates() {
        assert_eq!(
            parse("2023-01").unwrap(),
            Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            parse("2023").unwrap(),
            Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            parse("2023/01/12").unwrap(),
            Utc.with_ymd_and_hms(2023, 1, 12, 0, 0, 0).unwrap()
        );
        assert!(parse("2023-13").is_none());
        assert!(parse("20x3").is_none());
        assert!(parse("-2023").is_none());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse("").is_none());
        assert!(parse("   ").is_none());
        assert!(parse("yesterday").is_none());
        assert!(parse("2023-13-40").is_none());
    }
}
