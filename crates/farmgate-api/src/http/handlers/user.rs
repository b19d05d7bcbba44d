//! Registration and profile handlers.

use axum::Json;
use axum::extract::{Path, State};

use farmgate_core::repository::user::UserRepository;
use farmgate_types::user::UpsertUser;

use crate::http::error::ApiError;
use crate::http::response;
use crate::state::AppState;

/// POST /api/register - Insert or fully replace a user keyed on telegramId.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<UpsertUser>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let user_id = state.users.upsert(&body).await?;
    Ok(Json(response::created(
        "userId",
        user_id,
        "Registration successful",
    )))
}

/// GET /api/user/{telegramId} - Fetch a user profile; data is null when
/// the id was never registered.
pub async fn get_user(
    State(state): State<AppState>,
    Path(telegram_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let user = state.users.get_by_telegram_id(&telegram_id).await?;
    Ok(Json(response::fetched(user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::test_state;

    #[tokio::test]
    async fn test_register_returns_user_id_envelope() {
        let state = test_state().await;

        let body: UpsertUser = serde_json::from_str(
            r#"{"telegramId":"u1","name":"Ann","phone":"555","location":"X"}"#,
        )
        .unwrap();

        let Json(value) = register(State(state), Json(body)).await.unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["userId"], 1);
        assert_eq!(value["message"], "Registration successful");
    }

    #[tokio::test]
    async fn test_get_unknown_user_returns_null_data() {
        let state = test_state().await;

        let Json(value) = get_user(State(state), Path("ghost".to_string()))
            .await
            .unwrap();
        assert_eq!(value["success"], true);
        assert!(value["data"].is_null());
    }

    #[tokio::test]
    async fn test_register_twice_keeps_one_row_with_latest_values() {
        let state = test_state().await;

        let first: UpsertUser =
            serde_json::from_str(r#"{"telegramId":"u1","name":"Ann","phone":"555"}"#).unwrap();
        let second: UpsertUser =
            serde_json::from_str(r#"{"telegramId":"u1","name":"Anna","phone":"777"}"#).unwrap();

        register(State(state.clone()), Json(first)).await.unwrap();
        register(State(state.clone()), Json(second)).await.unwrap();

        let Json(value) = get_user(State(state), Path("u1".to_string()))
            .await
            .unwrap();
        assert_eq!(value["data"]["name"], "Anna");
        assert_eq!(value["data"]["phone"], "777");
    }

    #[tokio::test]
    async fn test_register_without_phone_is_a_storage_error() {
        let state = test_state().await;

        let body: UpsertUser =
            serde_json::from_str(r#"{"telegramId":"u1","name":"Ann"}"#).unwrap();

        // The handler does not validate; the NOT NULL constraint fails at
        // the store and surfaces as ApiError.
        let err = register(State(state.clone()), Json(body)).await.unwrap_err();
        assert!(err.0.to_string().contains("phone"));

        // The process keeps serving afterwards.
        let Json(value) = get_user(State(state), Path("u1".to_string()))
            .await
            .unwrap();
        assert_eq!(value["success"], true);
    }
}
