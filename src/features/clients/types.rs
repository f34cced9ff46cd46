use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize)]
pub struct HotelClient {
    pub id: i64,
    pub passport: String,
    pub last_name: String,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    pub city: String,
    pub check_in_date: String,
    pub check_out_date: Option<String>,
    pub room: i64,
    #[serde(default)]
    pub room_number: String,
}

impl HotelClient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }
}

#[derive(Clone, Debug, Serialize)]
/// Query body: who stayed in a room during a period.
pub struct ClientsInPeriodRequest {
    pub room_id: i64,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Clone, Debug, Serialize)]
/// Query body: who stayed at the same time as a given client.
pub struct SamePeriodRequest {
    pub client_id: i64,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Clone, Debug, Deserialize)]
/// Overlapping-stay row returned by the same-period query.
pub struct StayOverlap {
    pub id: i64,
    pub full_name: String,
    pub city: String,
    pub check_in: String,
    pub check_out: Option<String>,
    pub room: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_row_parses_with_open_stay() {
        let json = r#"{
            "id": 5,
            "passport": "4017 123456",
            "last_name": "Ivanova",
            "first_name": "Anna",
            "middle_name": "",
            "city": "Pskov",
            "check_in_date": "2024-11-02",
            "check_out_date": null,
            "room": 3,
            "room_number": "204"
        }"#;
        let client: HotelClient = serde_json::from_str(json).expect("Failed to parse");
        assert_eq!(client.full_name(), "Ivanova Anna");
        assert!(client.check_out_date.is_none());
    }

    #[test]
    fn period_queries_serialize_their_ids() {
        let body = ClientsInPeriodRequest {
            room_id: 3,
            start_date: "2024-10-01".to_string(),
            end_date: "2024-12-31".to_string(),
        };
        let json = serde_json::to_value(&body).expect("Failed to serialize");
        assert_eq!(json["room_id"], 3);
        assert_eq!(json["end_date"], "2024-12-31");
    }
}
