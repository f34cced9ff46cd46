//! Aggregate shapes for the statistics and report endpoints. The backend
//! emits ORM-flattened keys like `room__number`; serde renames keep the Rust
//! side readable.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct RoomOccupancy {
    pub total: i64,
    pub available: i64,
    pub occupied: i64,
    /// Preformatted percentage, e.g. `"62.5%"`.
    pub occupancy_rate: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ClientTally {
    pub total: i64,
    pub current: i64,
    pub checked_out: i64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EmployeeTally {
    pub total: i64,
    pub active: i64,
    pub inactive: i64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct HotelStatistics {
    pub rooms: RoomOccupancy,
    pub clients: ClientTally,
    pub employees: EmployeeTally,
    pub timestamp: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CityCount {
    pub city: String,
    pub count: i64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RoomTypeCount {
    #[serde(rename = "room__room_type")]
    pub room_type: String,
    pub count: i64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ClientStatistics {
    pub by_city: Vec<CityCount>,
    pub by_room_type: Vec<RoomTypeCount>,
    pub average_stay_days: f64,
    pub current_clients: i64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ClientsByRoom {
    #[serde(rename = "room__number")]
    pub room_number: String,
    #[serde(rename = "room__room_type")]
    pub room_type: String,
    pub client_count: i64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RoomsByFloor {
    pub floor: u32,
    pub room_count: i64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RoomIncome {
    pub room_number: String,
    pub room_type: String,
    pub floor: u32,
    pub income: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct QuarterlyReport {
    pub period: String,
    pub start_date: String,
    pub end_date: String,
    pub clients_by_room: Vec<ClientsByRoom>,
    pub rooms_by_floor: Vec<RoomsByFloor>,
    pub income_by_room: Vec<RoomIncome>,
    pub total_income: f64,
    pub generated_at: String,
}

#[cfg(test)]
mod tests {
    use super::{ClientStatistics, QuarterlyReport};

    #[test]
    fn client_statistics_map_flattened_keys() {
        let json = r#"{
            "by_city": [{"city": "Pskov", "count": 3}],
            "by_room_type": [{"room__room_type": "double", "count": 2}],
            "average_stay_days": 4.5,
            "current_clients": 2
        }"#;
        let stats: ClientStatistics = serde_json::from_str(json).expect("Failed to parse");
        assert_eq!(stats.by_room_type[0].room_type, "double");
        assert_eq!(stats.by_city[0].count, 3);
    }

    #[test]
    fn quarterly_report_parses_all_sections() {
        let json = r#"{
            "period": "2024 Q4",
            "start_date": "2024-10-01",
            "end_date": "2024-12-31",
            "clients_by_room": [{"room__number": "204", "room__room_type": "double", "client_count": 2}],
            "rooms_by_floor": [{"floor": 2, "room_count": 10}],
            "income_by_room": [{"room_number": "204", "room_type": "Double", "floor": 2, "income": 90000.0}],
            "total_income": 90000.0,
            "generated_at": "2024-12-31T23:59:59Z"
        }"#;
        let report: QuarterlyReport = serde_json::from_str(json).expect("Failed to parse");
        assert_eq!(report.period, "2024 Q4");
        assert_eq!(report.clients_by_room[0].room_number, "204");
        assert_eq!(report.income_by_room[0].income, 90000.0);
    }
}
