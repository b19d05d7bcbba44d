//! Envelope response format for all API responses.
//!
//! Every handler responds with the same shape:
//! ```json
//! { "success": true, "userId": 1, "message": "Registration successful" }
//! { "success": true, "data": ... }
//! { "success": false, "error": "..." }
//! ```
//! The failure variant lives in [`crate::http::error`].

use serde::Serialize;
use serde_json::{Value, json};

/// Success envelope for a write, carrying the new row id under `id_key`.
pub fn created(id_key: &str, id: i64, message: &str) -> Value {
    json!({
        "success": true,
        id_key: id,
        "message": message,
    })
}

/// Success envelope for a read. `data` is `null` when the lookup found
/// nothing -- absence is not an error.
pub fn fetched<T: Serialize>(data: T) -> Value {
    json!({
        "success": true,
        "data": data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_envelope_shape() {
        let value = created("userId", 1, "Registration successful");
        assert_eq!(value["success"], true);
        assert_eq!(value["userId"], 1);
        assert_eq!(value["message"], "Registration successful");
    }

    #[test]
    fn test_fetched_envelope_with_none_is_null_data() {
        let value = fetched(None::<i64>);
        assert_eq!(value["success"], true);
        assert!(value["data"].is_null());
    }

    #[test]
    fn test_fetched_envelope_with_list() {
        let value = fetched(vec![1, 2, 3]);
        assert_eq!(value["data"], json!([1, 2, 3]));
    }
}
