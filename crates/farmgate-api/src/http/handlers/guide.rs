//! Processing guide (question/response log) handlers.

use axum::Json;
use axum::extract::{Path, State};

use farmgate_core::repository::guide::GuideRepository;
use farmgate_types::guide::NewGuide;

use crate::http::error::ApiError;
use crate::http::response;
use crate::state::AppState;

/// POST /api/processing - Append a question/response entry.
pub async fn create_guide(
    State(state): State<AppState>,
    Json(body): Json<NewGuide>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let guide_id = state.guides.create(&body).await?;
    Ok(Json(response::created(
        "guideId",
        guide_id,
        "Processing guide saved",
    )))
}

/// GET /api/processing/{userId} - A user's question/response history, most
/// recent first.
pub async fn list_guides(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let guides = state.guides.list_for_user(user_id).await?;
    Ok(Json(response::fetched(guides)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::test_state;

    #[tokio::test]
    async fn test_create_guide_returns_guide_id_envelope() {
        let state = test_state().await;

        let body: NewGuide = serde_json::from_str(
            r#"{"userId":1,"question":"How do I dry maize?","response":"Thin layers.","type":"drying"}"#,
        )
        .unwrap();

        let Json(value) = create_guide(State(state), Json(body)).await.unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["guideId"], 1);
        assert_eq!(value["message"], "Processing guide saved");
    }

    #[tokio::test]
    async fn test_list_guides_round_trips_type_field() {
        let state = test_state().await;

        let body: NewGuide = serde_json::from_str(
            r#"{"userId":1,"question":"q","response":"r","type":"storage"}"#,
        )
        .unwrap();
        create_guide(State(state.clone()), Json(body)).await.unwrap();

        let Json(value) = list_guides(State(state), Path(1)).await.unwrap();
        assert_eq!(value["data"][0]["type"], "storage");
        assert_eq!(value["data"][0]["question"], "q");
    }
}
