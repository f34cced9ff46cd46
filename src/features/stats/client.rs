//! Client helpers for the statistics and report endpoints.

use crate::{
    app_lib::{endpoints, get_json, AppError},
    features::stats::types::{ClientStatistics, HotelStatistics, QuarterlyReport},
};

/// Occupancy, client, and staffing totals.
pub async fn hotel_statistics() -> Result<HotelStatistics, AppError> {
    get_json(endpoints::STATS_HOTEL).await
}

/// Client breakdowns by city and room type.
pub async fn client_statistics() -> Result<ClientStatistics, AppError> {
    get_json(endpoints::STATS_CLIENTS).await
}

/// The quarterly report; the period is baked into the endpoint path.
pub async fn quarterly_report() -> Result<QuarterlyReport, AppError> {
    get_json(endpoints::REPORT).await
}
