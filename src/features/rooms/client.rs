//! Client helpers for the rooms endpoints.

use crate::{
    app_lib::{endpoints, get_json, AppError},
    features::rooms::types::{AvailableRooms, Room},
};

/// Fetches every room.
pub async fn list_rooms() -> Result<Vec<Room>, AppError> {
    get_json(endpoints::ROOMS).await
}

/// Fetches the currently free rooms together with their count.
pub async fn available_rooms() -> Result<AvailableRooms, AppError> {
    get_json(endpoints::ROOMS_AVAILABLE).await
}
