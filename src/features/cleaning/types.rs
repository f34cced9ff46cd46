use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// One rota slot: an employee cleans one floor on one weekday.
pub struct CleaningSlot {
    pub id: i64,
    pub employee: i64,
    pub floor: u32,
    pub day_of_week: String,
    #[serde(default)]
    pub employee_name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CleanedRoomClient {
    pub id: i64,
    pub name: String,
    pub room_number: String,
    pub room_floor: u32,
}

#[derive(Clone, Debug, Deserialize)]
/// Answer row for "who cleaned this client's room on that weekday".
pub struct CleaningRecord {
    pub employee_id: i64,
    pub employee_name: String,
    pub floor: u32,
    pub day_of_week: String,
    pub client: CleanedRoomClient,
}

/// Weekday codes accepted by the who-cleaned query.
pub const DAY_CODES: &[&str] = &["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

#[cfg(test)]
mod tests {
    use super::{CleaningRecord, DAY_CODES};

    #[test]
    fn cleaning_record_parses_nested_client() {
        let json = r#"{
            "employee_id": 4,
            "employee_name": "Petrov Igor",
            "floor": 2,
            "day_of_week": "Monday",
            "client": {"id": 5, "name": "Ivanova Anna", "room_number": "204", "room_floor": 2}
        }"#;
        let record: CleaningRecord = serde_json::from_str(json).expect("Failed to parse");
        assert_eq!(record.client.room_number, "204");
        assert_eq!(record.floor, record.client.room_floor);
    }

    #[test]
    fn day_codes_cover_the_week() {
        assert_eq!(DAY_CODES.len(), 7);
        assert!(DAY_CODES.contains(&"mon"));
        assert!(DAY_CODES.contains(&"sun"));
    }
}
