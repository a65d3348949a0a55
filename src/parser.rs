use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// `created_at` as found in the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawTimestamp {
    Text(String),
    /// Any other JSON scalar or structure, kept as JSON text for diagnostics.
    NotText(String),
}

impl RawTimestamp {
    pub fn as_str(&self) -> &str {
        match self {
            RawTimestamp::Text(s) | RawTimestamp::NotText(s) => s,
        }
    }
}

/// One chat line pulled out of the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub timestamp: Option<RawTimestamp>, // None when absent or null
    pub body: String,
}

impl Message {
    /// Only string timestamps are parsed; other JSON values are rejected.
    pub fn parse_timestamp(&self) -> Result<DateTime<FixedOffset>, TimestampError> {
        match &self.timestamp {
            None => Err(TimestampError::Missing),
            Some(RawTimestamp::Text(s)) => parse_timestamp(Some(s)),
            Some(RawTimestamp::NotText(json)) => Err(TimestampError::NotAString(json.clone())),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CommentRecord {
    #[serde(default)]
    created_at: Value,
    #[serde(default)]
    message: Value,
}

impl From<CommentRecord> for Message {
    fn from(rec: CommentRecord) -> Self {
        let timestamp = match rec.created_at {
            Value::Null => None,
            Value::String(s) => Some(RawTimestamp::Text(s)),
            other => Some(RawTimestamp::NotText(other.to_string())),
        };
        let body = match rec.message {
            Value::Object(mut m) => match m.remove("body") {
                Some(Value::String(s)) => s,
                _ => String::new(),
            },
            _ => String::new(),
        };
        Message { timestamp, body }
    }
}

/// The `comments` array of an export; empty when missing or not an array.
pub fn comments(document: &Value) -> &[Value] {
    document
        .get("comments")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Keeps every object-shaped comment, in input order. Anything else is skipped.
pub fn extract_messages(comments: &[Value]) -> Vec<Message> {
    comments.iter().filter_map(comment_record).map(Message::from).collect()
}

fn comment_record(entry: &Value) -> Option<CommentRecord> {
    // arrays would otherwise deserialize positionally into the struct
    entry.as_object()?;
    CommentRecord::deserialize(entry).ok()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("missing timestamp")]
    Missing,
    #[error("empty timestamp string")]
    Empty,
    #[error("unrecognized timestamp format: {0:?}")]
    Unrecognized(String),
    #[error("timestamp is not a string: {0}")]
    NotAString(String),
}

/// Parses the common textual timestamp shapes found in chat exports.
///
/// The offset is kept as written. Values without an offset, and epoch
/// numbers, are read as UTC.
pub fn parse_timestamp(raw: Option<&str>) -> Result<DateTime<FixedOffset>, TimestampError> {
    let raw = raw.ok_or(TimestampError::Missing)?;
    let s = raw.trim();
    if s.is_empty() {
        return Err(TimestampError::Empty);
    }
    parse_with_offset(s)
        .or_else(|| parse_naive(s))
        .or_else(|| parse_epoch(s))
        .ok_or_else(|| TimestampError::Unrecognized(raw.to_string()))
}

fn parse_with_offset(s: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }
    // %#z accepts Z, +HH, +HHMM and +HH:MM
    let fmts = [
        "%Y-%m-%dT%H:%M:%S%.f%#z",
        "%Y-%m-%dT%H:%M:%S%#z",
        "%Y-%m-%d %H:%M:%S%.f%#z",
        "%Y-%m-%d %H:%M:%S%#z",
        "%Y-%m-%d %H:%M:%S%.f %#z",
        "%Y-%m-%d %H:%M:%S %#z",
        "%Y-%m-%dT%H:%M%#z",
        "%Y%m%dT%H%M%S%#z",
    ];
    for f in fmts.iter() {
        if let Ok(dt) = DateTime::parse_from_str(s, f) {
            return Some(dt);
        }
    }
    DateTime::parse_from_rfc2822(s).ok()
}

fn parse_naive(s: &str) -> Option<DateTime<FixedOffset>> {
    let fmts = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S%.f",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
        "%Y%m%dT%H%M%S",
    ];
    for f in fmts.iter() {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, f) {
            return Some(as_utc(&ndt));
        }
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    date.and_hms_opt(0, 0, 0).map(|ndt| as_utc(&ndt))
}

fn as_utc(ndt: &NaiveDateTime) -> DateTime<FixedOffset> {
    Utc.from_utc_datetime(ndt).into()
}

static RE_EPOCH: Lazy<Regex> = Lazy::new(|| {
    // seconds, milliseconds or microseconds since the epoch
    Regex::new(r"^(?:\d{10}|\d{13}|\d{16})$").unwrap()
});

fn parse_epoch(s: &str) -> Option<DateTime<FixedOffset>> {
    if !RE_EPOCH.is_match(s) {
        return None;
    }
    let n: i64 = s.parse().ok()?;
    let dt = match s.len() {
        10 => DateTime::<Utc>::from_timestamp(n, 0),
        13 => DateTime::<Utc>::from_timestamp(n / 1_000, ((n % 1_000) * 1_000_000) as u32),
        _ => DateTime::<Utc>::from_timestamp(n / 1_000_000, ((n % 1_000_000) * 1_000) as u32),
    }?;
    Some(dt.into())
}
