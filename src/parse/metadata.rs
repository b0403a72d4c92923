use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::model::track::{Track, UNKNOWN};

/// Error type for metadata.json parsing and serialization
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("invalid metadata JSON: {0}")]
    InvalidFormat(#[source] serde_json::Error),
    #[error("could not serialize metadata: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// On-disk shape of metadata.json, in key order
#[derive(Debug, Serialize)]
struct MetadataFile<'a> {
    track_id: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    status: &'a str,
    description: &'a str,
    created_at: String,
    updated_at: String,
}

/// Parse metadata.json bytes into a Track.
///
/// Only non-JSON input is an error. Missing or mistyped fields fall back to
/// defaults, `type`/`status` to `"unknown"`, and timestamps that are not
/// RFC 3339 are dropped. The returned track has no phases, no directory and
/// an empty `track_id` when the file omits one.
pub fn load_metadata(bytes: &[u8]) -> Result<Track, MetadataError> {
    let value: Value = serde_json::from_slice(bytes).map_err(MetadataError::InvalidFormat)?;

    let text = |key: &str| {
        value
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let non_empty = |s: String| if s.is_empty() { UNKNOWN.to_string() } else { s };

    Ok(Track {
        track_id: text("track_id"),
        kind: non_empty(text("type")),
        status: non_empty(text("status")),
        description: text("description"),
        created_at: parse_timestamp(&text("created_at")),
        updated_at: parse_timestamp(&text("updated_at")),
        ..Track::default()
    })
}

/// Serialize a track's metadata, stamping `updated_at` with `now`.
///
/// Emits exactly the six metadata keys, pretty-printed with a trailing
/// newline. `created_at` is written as an empty string when unset.
pub fn serialize_metadata(track: &Track, now: DateTime<Utc>) -> Result<String, MetadataError> {
    let file = MetadataFile {
        track_id: &track.track_id,
        kind: &track.kind,
        status: &track.status,
        description: &track.description,
        created_at: track.created_at.map(format_timestamp).unwrap_or_default(),
        updated_at: format_timestamp(now),
    };
    let mut out = serde_json::to_string_pretty(&file).map_err(MetadataError::Serialize)?;
    out.push('\n');
    Ok(out)
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}
