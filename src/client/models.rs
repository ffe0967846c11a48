//! Wire models for the shortener backend and the metadata preview service
//!
//! The backend speaks camelCase JSON. Fields the backend sometimes omits (or
//! sends as `null`) fall back to their defaults instead of failing the decode.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

pub const PREVIEW_FALLBACK_TITLE: &str = "Unable to load preview";
pub const PREVIEW_FALLBACK_DESCRIPTION: &str = "Could not fetch metadata for this URL.";
pub const PREVIEW_NO_TITLE: &str = "No title available";
pub const PREVIEW_NO_DESCRIPTION: &str = "No description available";

/// Link preview card content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewResult {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
}

impl PreviewResult {
    /// The card shown when metadata cannot be fetched
    pub fn unavailable() -> Self {
        Self {
            title: PREVIEW_FALLBACK_TITLE.to_string(),
            description: PREVIEW_FALLBACK_DESCRIPTION.to_string(),
            image: None,
        }
    }
}

/// A place clicks came from, with how many
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub latitude: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub longitude: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
}

/// Click statistics for one short link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatsResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_clicks: u64,
    #[serde(default)]
    pub latest_geo_location: Option<GeoPoint>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub locations: Vec<GeoPoint>,
}

impl StatsResult {
    /// What the stats card shows when the backend cannot be reached
    pub fn zeroed() -> Self {
        Self::default()
    }
}

/// One previously shortened link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub click_count: u64,
}

impl HistoryEntry {
    /// `YYYY-MM-DD` of `created_at`, whatever timestamp flavour the backend sent
    pub fn created_date(&self) -> String {
        let raw = self.created_at.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return dt.format("%Y-%m-%d").to_string();
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
            return dt.format("%Y-%m-%d").to_string();
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return dt.format("%Y-%m-%d").to_string();
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return date.format("%Y-%m-%d").to_string();
        }
        raw.chars().take(10).collect()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest<'a> {
    pub original_url: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
}

// ========== preview service ==========

#[derive(Debug, Deserialize)]
pub struct PreviewEnvelope {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub data: Option<PreviewData>,
}

#[derive(Debug, Deserialize)]
pub struct PreviewData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<PreviewImage>,
}

#[derive(Debug, Deserialize)]
pub struct PreviewImage {
    #[serde(default)]
    pub url: Option<String>,
}

impl PreviewEnvelope {
    /// `None` unless the service reported `"success"`
    pub fn into_preview(self) -> Option<PreviewResult> {
        if self.status != "success" {
            return None;
        }
        let data = self.data?;
        let non_blank = |s: Option<String>| s.filter(|v| !v.trim().is_empty());

        Some(PreviewResult {
            title: non_blank(data.title).unwrap_or_else(|| PREVIEW_NO_TITLE.to_string()),
            description: non_blank(data.description)
                .unwrap_or_else(|| PREVIEW_NO_DESCRIPTION.to_string()),
            image: data.image.and_then(|img| non_blank(img.url)),
        })
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_decode_camel_case() {
        let json = r#"{
            "totalClicks": 5,
            "latestGeoLocation": {"country": "Germany", "city": "Berlin", "latitude": 52.5, "longitude": 13.4, "count": 3},
            "locations": [
                {"country": "Germany", "city": "Berlin", "latitude": 52.5, "longitude": 13.4, "count": 3},
                {"country": "France", "city": null, "latitude": 48.8, "longitude": 2.3, "count": 2}
            ]
        }"#;
        let stats: StatsResult = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_clicks, 5);
        assert_eq!(stats.locations.len(), 2);
        assert_eq!(stats.locations[1].city, "");
        assert_eq!(
            stats.latest_geo_location.as_ref().map(|g| g.city.as_str()),
            Some("Berlin")
        );
    }

    #[test]
    fn test_stats_decode_sparse() {
        let stats: StatsResult = serde_json::from_str(r#"{"totalClicks": 0}"#).unwrap();
        assert_eq!(stats, StatsResult::zeroed());

        let stats: StatsResult =
            serde_json::from_str(r#"{"totalClicks": 1, "locations": null}"#).unwrap();
        assert!(stats.locations.is_empty());
    }

    #[test]
    fn test_preview_envelope_success() {
        let json = r#"{"status":"success","data":{"title":"Example","description":"An example","image":{"url":"https://example.com/a.png"}}}"#;
        let env: PreviewEnvelope = serde_json::from_str(json).unwrap();
        let preview = env.into_preview().unwrap();
        assert_eq!(preview.title, "Example");
        assert_eq!(preview.image.as_deref(), Some("https://example.com/a.png"));
    }

    #[test]
    fn test_preview_envelope_missing_fields() {
        let json = r#"{"status":"success","data":{"title":null}}"#;
        let env: PreviewEnvelope = serde_json::from_str(json).unwrap();
        let preview = env.into_preview().unwrap();
        assert_eq!(preview.title, PREVIEW_NO_TITLE);
        assert_eq!(preview.description, PREVIEW_NO_DESCRIPTION);
        assert!(preview.image.is_none());
    }

    #[test]
    fn test_preview_envelope_fail_status() {
        let json = r#"{"status":"fail","data":{"title":"ignored"}}"#;
        let env: PreviewEnvelope = serde_json::from_str(json).unwrap();
        assert!(env.into_preview().is_none());
    }

    #[test]
    fn test_history_created_date() {
        let mut entry = HistoryEntry {
            id: 1,
            original_url: "https://example.com".into(),
            short_code: "abc".into(),
            created_at: "2024-03-05T10:20:30.000Z".into(),
            click_count: 0,
        };
        assert_eq!(entry.created_date(), "2024-03-05");

        entry.created_at = "2024-03-05 10:20:30".into();
        assert_eq!(entry.created_date(), "2024-03-05");

        entry.created_at = "2024-03-05T10:20:30.123456".into();
        assert_eq!(entry.created_date(), "2024-03-05");

        entry.created_at = "garbage-value".into();
        assert_eq!(entry.created_date(), "garbage-va");
    }

    #[test]
    fn test_shorten_request_wire_name() {
        let body = serde_json::to_string(&ShortenRequest {
            original_url: "https://example.com",
        })
        .unwrap();
        assert_eq!(body, r#"{"originalUrl":"https://example.com"}"#);
    }
}
