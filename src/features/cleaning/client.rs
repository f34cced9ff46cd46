//! Client helpers for the cleaning-rota endpoints.

use crate::{
    app_lib::{endpoints, get_json, get_json_with_query, AppError},
    features::cleaning::types::{CleaningRecord, CleaningSlot},
};

/// Fetches the full cleaning rota.
pub async fn list_schedule() -> Result<Vec<CleaningSlot>, AppError> {
    get_json(endpoints::CLEANING).await
}

/// Who cleaned the given client's room on a weekday (`mon`..`sun`).
pub async fn who_cleaned_client_room(
    client_id: &str,
    day: &str,
) -> Result<Vec<CleaningRecord>, AppError> {
    let client_id = client_id.trim();
    if client_id.is_empty() {
        return Err(AppError::Config("Client id is required.".to_string()));
    }

    get_json_with_query(
        endpoints::WHO_CLEANED_CLIENT_ROOM,
        &[("client_id", client_id), ("day", day)],
    )
    .await
}
