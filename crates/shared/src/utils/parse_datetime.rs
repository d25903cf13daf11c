use chrono::{DateTime, NaiveDateTime, Utc};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Backend timestamps arrive either as RFC 3339 or as naive UTC strings.
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Date part for display; unparseable input is shown as received.
pub fn display_date(value: &str) -> String {
    parse_datetime(value)
        .map(|dt| dt.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| value.to_string())
}
