//! Client helpers for the hotel-clients endpoints, including the two
//! period-overlap queries.

use crate::{
    app_lib::{endpoints, get_json, post_json, AppError},
    features::clients::types::{
        ClientsInPeriodRequest, HotelClient, SamePeriodRequest, StayOverlap,
    },
};

/// Fetches every registered client.
pub async fn list_clients() -> Result<Vec<HotelClient>, AppError> {
    get_json(endpoints::CLIENTS).await
}

/// Clients who stayed in the given room during the period.
pub async fn clients_in_period(
    room_id: i64,
    start_date: &str,
    end_date: &str,
) -> Result<Vec<HotelClient>, AppError> {
    let body = ClientsInPeriodRequest {
        room_id,
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
    };
    post_json(endpoints::CLIENTS_IN_PERIOD, &body).await
}

/// Clients whose stays overlapped the given client's within the period.
pub async fn same_period_clients(
    client_id: i64,
    start_date: &str,
    end_date: &str,
) -> Result<Vec<StayOverlap>, AppError> {
    let body = SamePeriodRequest {
        client_id,
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
    };
    post_json(endpoints::SAME_PERIOD_CLIENTS, &body).await
}
