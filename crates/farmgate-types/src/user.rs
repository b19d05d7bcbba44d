use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user of the farm-services bot.
///
/// `telegram_id` is the client-supplied chat-platform account id, unique
/// across all rows when present. `id` is the internal surrogate key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub telegram_id: Option<String>,
    pub name: String,
    pub phone: String,
    pub location: Option<String>,
    pub registered_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Write payload for registration.
///
/// Registration is a full-row replace keyed on `telegram_id`: a field the
/// caller leaves out is cleared on the stored row, not preserved. Every
/// field is optional so requests pass through to the store unvalidated;
/// a missing NOT NULL column fails there and surfaces as a storage error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUser {
    pub telegram_id: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}
