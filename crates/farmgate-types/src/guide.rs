use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A crop-processing question/response log entry.
///
/// Append-only: entries are written once when the bot answers a question
/// and never updated or deleted. Same referential shape as
/// [`crate::booking::Booking`] -- `user_id` is not enforced by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingGuide {
    pub id: i64,
    pub user_id: Option<i64>,
    pub question: Option<String>,
    pub response: Option<String>,
    /// Category label ("drying", "storage", ...). `type` on the wire.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Write payload for a new processing guide entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGuide {
    pub user_id: Option<i64>,
    pub question: Option<String>,
    pub response: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}
