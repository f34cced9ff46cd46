use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Room {
    pub id: i64,
    pub number: String,
    pub floor: u32,
    pub room_type: String,
    /// Decimal serialized as a string by the backend.
    pub price_per_day: String,
    pub phone: String,
    pub is_available: bool,
}

#[derive(Clone, Debug, Deserialize)]
/// Envelope returned by the availability endpoint.
pub struct AvailableRooms {
    pub count: i64,
    pub results: Vec<Room>,
}

#[cfg(test)]
mod tests {
    use super::AvailableRooms;

    #[test]
    fn availability_envelope_parses() {
        let json = r#"{
            "count": 1,
            "results": [{
                "id": 3,
                "number": "204",
                "floor": 2,
                "room_type": "double",
                "price_per_day": "4500.00",
                "phone": "204",
                "is_available": true
            }]
        }"#;
        let available: AvailableRooms = serde_json::from_str(json).expect("Failed to parse");
        assert_eq!(available.count, 1);
        assert_eq!(available.results[0].price_per_day, "4500.00");
    }
}
