use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    pub is_active: bool,
    #[serde(default)]
    pub user: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        if self.middle_name.is_empty() {
            format!("{} {}", self.last_name, self.first_name)
        } else {
            format!("{} {} {}", self.last_name, self.first_name, self.middle_name)
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ScheduleEmployee {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ScheduleEntry {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub floor: u32,
    pub day_of_week: String,
    pub day_code: String,
}

#[derive(Clone, Debug, Deserialize)]
/// Per-employee cleaning rota returned by the schedule lookup.
pub struct EmployeeSchedule {
    pub employee: ScheduleEmployee,
    pub schedules: Vec<ScheduleEntry>,
}

#[cfg(test)]
mod tests {
    use super::Employee;

    #[test]
    fn full_name_skips_blank_middle_name() {
        let json = r#"{"id":1,"last_name":"Petrov","first_name":"Igor","middle_name":"","is_active":true,"user":null,"username":null}"#;
        let employee: Employee = serde_json::from_str(json).expect("Failed to parse");
        assert_eq!(employee.full_name(), "Petrov Igor");
    }

    #[test]
    fn full_name_includes_middle_name_when_set() {
        let json = r#"{"id":2,"last_name":"Petrov","first_name":"Igor","middle_name":"Olegovich","is_active":false}"#;
        let employee: Employee = serde_json::from_str(json).expect("Failed to parse");
        assert_eq!(employee.full_name(), "Petrov Igor Olegovich");
        assert!(employee.username.is_none());
    }
}
