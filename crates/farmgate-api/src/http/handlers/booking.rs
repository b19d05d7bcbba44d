//! Service booking handlers.

use axum::Json;
use axum::extract::{Path, State};

use farmgate_core::repository::booking::BookingRepository;
use farmgate_types::booking::NewBooking;

use crate::http::error::ApiError;
use crate::http::response;
use crate::state::AppState;

/// POST /api/bookings - Record a service booking. The referenced user is
/// not checked for existence.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(body): Json<NewBooking>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let booking_id = state.bookings.create(&body).await?;
    Ok(Json(response::created(
        "bookingId",
        booking_id,
        "Booking created successfully",
    )))
}

/// GET /api/bookings/{userId} - All bookings for a user, most recent first.
pub async fn list_bookings(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let bookings = state.bookings.list_for_user(user_id).await?;
    Ok(Json(response::fetched(bookings)))
}
