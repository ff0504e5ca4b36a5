/// Formatters operating on multiple types
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::value::Value;

use crate::context::ValueRender;

/// Same set as javascript's `encodeURIComponent`
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Date layouts accepted on top of RFC3339
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%d %B %Y"];

/// A date that may only be known to the year or the month, which is common
/// for bibliographic records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PartialDate {
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
}

impl PartialDate {
    fn new(year: i32, month: Option<u32>, day: Option<u32>) -> Option<PartialDate> {
        if day.is_some() && month.is_none() {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month.unwrap_or(1), day.unwrap_or(1))?;
        Some(PartialDate { year, month, day })
    }

    fn from_naive(date: NaiveDate) -> PartialDate {
        use chrono::Datelike;
        PartialDate { year: date.year(), month: Some(date.month()), day: Some(date.day()) }
    }

    fn naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.unwrap_or(1), self.day.unwrap_or(1))
    }

    fn format(&self, style: &str) -> Option<String> {
        let naive = self.naive()?;
        let out = match (style, self.month, self.day) {
            ("year", _, _) => self.year.to_string(),
            ("month", m, _) => m.map(|m| m.to_string()).unwrap_or_default(),
            ("day", _, d) => d.map(|d| d.to_string()).unwrap_or_default(),
            ("short", Some(_), Some(_)) => naive.format("%-m/%-d/%Y").to_string(),
            ("short", Some(m), None) => format!("{}/{}", m, self.year),
            ("long", Some(_), Some(_)) => naive.format("%B %-d, %Y").to_string(),
            ("long", Some(_), None) => naive.format("%B %Y").to_string(),
            ("short", None, _) | ("long", None, _) => self.year.to_string(),
            (_, Some(_), Some(_)) => naive.format("%Y-%m-%d").to_string(),
            (_, Some(m), None) => format!("{:04}-{:02}", self.year, m),
            (_, None, _) => format!("{:04}", self.year),
        };
        Some(out)
    }
}

fn parse_date_str(s: &str) -> Option<PartialDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(PartialDate::from_naive(dt.naive_local().date()));
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(PartialDate::from_naive(dt.date()));
        }
    }
    for format in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, format) {
            return Some(PartialDate::from_naive(d));
        }
    }

    // `2020` or `2020-05`
    let parts: Vec<&str> = s.split(|c: char| c == '-' || c == '/').collect();
    if parts.len() > 2 || parts[0].len() != 4 || !parts.iter().all(|p| is_digits(p)) {
        return None;
    }
    let year = parts[0].parse().ok()?;
    let month = match parts.get(1) {
        Some(m) => Some(m.parse().ok()?),
        None => None,
    };
    PartialDate::new(year, month, None)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

fn date_part(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// `[2020, 5, 1]`, `[2020, 5]` or `[2020]`
fn parse_date_parts(parts: &[Value]) -> Option<PartialDate> {
    let mut nums = parts.iter().map(date_part);
    let year = i32::try_from(nums.next()??).ok()?;
    let month = match nums.next() {
        Some(m) => Some(u32::try_from(m?).ok()?),
        None => None,
    };
    let day = match nums.next() {
        Some(d) => Some(u32::try_from(d?).ok()?),
        None => None,
    };
    PartialDate::new(year, month, day)
}

fn parse_date(value: &Value) -> Option<PartialDate> {
    match value {
        Value::String(s) => parse_date_str(s),
        Value::Number(n) => {
            let year = i32::try_from(n.as_i64()?).ok()?;
            if !(1..=9999).contains(&year) {
                return None;
            }
            PartialDate::new(year, None, None)
        }
        Value::Array(parts) => parse_date_parts(parts),
        // CSL-JSON: {"date-parts": [[2020, 5, 1]]} with an optional "raw" fallback
        Value::Object(map) => {
            let from_parts = map
                .get("date-parts")
                .and_then(Value::as_array)
                .and_then(|outer| outer.first())
                .and_then(Value::as_array)
                .and_then(|parts| parse_date_parts(parts));
            from_parts.or_else(|| map.get("raw").and_then(Value::as_str).and_then(parse_date_str))
        }
        _ => None,
    }
}

/// Formats a date with one of `iso`, `short`, `long`, `year`, `month` or `day`.
///
/// Values that don't look like a date are returned as they would render
/// without a formatter.
pub fn date(value: &Value, style: &str) -> String {
    let style = style.trim();
    if !matches!(style, "iso" | "short" | "long" | "year" | "month" | "day") {
        tracing::debug!("Formatter `date` got unknown style `{}`, using iso", style);
    }
    match parse_date(value).and_then(|d| d.format(style)) {
        Some(formatted) => formatted,
        None => {
            tracing::debug!("Formatter `date` could not parse {}", value);
            value.render().into_owned()
        }
    }
}

/// Encodes a value of any type into compact json
pub fn json_encode(value: &Value) -> String {
    value.to_string()
}

/// Percent-encodes reserved URI characters
pub fn urlencode(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT_ENCODE_SET).to_string()
}

/// Decodes percent-encoded text; text that doesn't decode to UTF-8 is kept.
pub fn urldecode(s: &str) -> String {
    match percent_decode_str(s).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => s.to_string(),
    }
}
