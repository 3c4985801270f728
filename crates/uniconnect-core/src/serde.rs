use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parses a reference time given either as `YYYY-MM-DD` (midnight) or as a
/// local date-time.
pub fn parse_reference_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

pub fn deserialize_optional_reference_time<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_reference_time(&s).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid reference time '{s}', expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS"
            ))
        }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Params {
        #[serde(default, deserialize_with = "deserialize_optional_reference_time")]
        at: Option<NaiveDateTime>,
    }

    #[test]
    fn test_parse_plain_date_is_midnight() {
        let parsed = parse_reference_time("2025-08-01").unwrap();
        assert_eq!(parsed.to_string(), "2025-08-01 00:00:00");
    }

    #[test]
    fn test_parse_date_time_variants() {
        assert_eq!(
            parse_reference_time("2025-03-15T10:30:00").unwrap().to_string(),
            "2025-03-15 10:30:00"
        );
        assert_eq!(
            parse_reference_time("2025-03-15 10:30:00").unwrap().to_string(),
            "2025-03-15 10:30:00"
        );
        assert!(parse_reference_time("2025-03-15T10:30:00.250").is_some());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_reference_time("yesterday").is_none());
        assert!(parse_reference_time("2025-02-30").is_none());
    }

    #[test]
    fn test_deserialize_empty_and_missing_as_none() {
        let missing: Params = serde_json::from_str("{}").unwrap();
        assert!(missing.at.is_none());

        let empty: Params = serde_json::from_str(r#"{"at": ""}"#).unwrap();
        assert!(empty.at.is_none());
    }

    #[test]
    fn test_deserialize_invalid_is_error() {
        let result: Result<Params, _> = serde_json::from_str(r#"{"at": "soon"}"#);
        assert!(result.is_err());
    }
}
