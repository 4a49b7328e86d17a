//! Wire models for the CRM backend
//!
//! Response types are decoded explicitly (see [`decode`]) so that a payload
//! of the wrong shape surfaces as [`ApiError::Decode`] instead of silently
//! becoming an empty list.

use super::ApiError;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Backend customer identifier
pub type CustomerId = i64;

/// A customer record
///
/// `GET /customers` returns id, name and email only; `GET /customers/{id}`
/// adds the purchase history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub purchase_history: Option<String>,
}

/// One entry of a customer's interaction log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub details: Option<String>,
    pub timestamp: String,
}

impl Interaction {
    /// Render the timestamp in local time as `YYYY-MM-DD HH:MM`
    ///
    /// The backend emits ISO-8601, with or without an offset. Naive values are
    /// taken as local time. Anything unparseable is shown verbatim.
    pub fn display_timestamp(&self) -> String {
        const FORMAT: &str = "%Y-%m-%d %H:%M";

        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.timestamp) {
            return dt.with_timezone(&Local).format(FORMAT).to_string();
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(&self.timestamp, "%Y-%m-%dT%H:%M:%S%.f")
        {
            return match Local.from_local_datetime(&naive).earliest() {
                Some(local) => local.format(FORMAT).to_string(),
                None => naive.format(FORMAT).to_string(),
            };
        }
        self.timestamp.clone()
    }
}

/// Interaction count for one customer name (`GET /analytics/interactions`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEntry {
    pub name: String,
    pub interaction_count: u64,
}

/// Successful login payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginGrant {
    pub token: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// `GET /recommendations/{id}` envelope
#[derive(Debug, Deserialize)]
struct RecommendationsPayload {
    recommendations: Vec<String>,
}

/// Error envelope used by the backend for non-2xx responses
#[derive(Debug, Default, Deserialize)]
struct ErrorPayload {
    message: Option<String>,
    error: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Request bodies
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Registration<'a> {
    pub username: &'a str,
    pub password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub purchase_history: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewInteraction {
    pub interaction_type: String,
    pub details: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Decoding
// ─────────────────────────────────────────────────────────────────────────────

/// Decode a 2xx body into `T`, naming the endpoint on failure
pub fn decode<T: DeserializeOwned>(endpoint: &str, body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::decode(endpoint, e))
}

/// Decode the recommendations envelope
///
/// A missing or non-array `recommendations` field is a decode error; an empty
/// array is a valid "nothing to recommend" answer.
pub fn decode_recommendations(endpoint: &str, body: &[u8]) -> Result<Vec<String>, ApiError> {
    let payload: RecommendationsPayload = decode(endpoint, body)?;
    Ok(payload
        .recommendations
        .into_iter()
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .collect())
}

/// Pull the human-readable message out of an error body, if any
pub fn error_message(body: &[u8]) -> Option<String> {
    let payload: ErrorPayload = serde_json::from_slice(body).unwrap_or_default();
    payload
        .message
        .or(payload.error)
        .filter(|m| !m.trim().is_empty())
}
