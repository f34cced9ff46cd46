//! Registry of backend paths consumed by this frontend. The table is fixed
//! at compile time; referencing a path that does not exist here is a build
//! error, not something to recover from at runtime. Semantics of every
//! endpoint belong to the backend.

// auth (djoser)
pub const LOGIN: &str = "/auth/token/login/";
pub const REGISTER: &str = "/auth/users/";
pub const ME: &str = "/auth/users/me/";

// core CRUD
pub const ROOMS: &str = "/api/rooms/";
pub const ROOMS_AVAILABLE: &str = "/api/rooms/available/";
pub const CLIENTS: &str = "/api/clients/";
pub const EMPLOYEES: &str = "/api/employees/";
pub const CLEANING: &str = "/api/cleaning/";

// custom read queries
pub const CLIENTS_IN_PERIOD: &str = "/api/clients_in_period/";
pub const WHO_CLEANED_CLIENT_ROOM: &str = "/api/who_cleaned_client_room/";
pub const SAME_PERIOD_CLIENTS: &str = "/api/same_period_clients/";
pub const UNJOB_EMPLOYEES: &str = "/api/unjob_employees/";
pub const GETJOB_EMPLOYEES: &str = "/api/getjob_employees/";
pub const EMPLOYEE_SCHEDULE: &str = "/api/employee-schedule/";

// report and statistics; the report period is fixed server-side contract
pub const REPORT: &str = "/api/report/?quarter=4&year=2024";
pub const STATS_HOTEL: &str = "/api/statistics/hotel/";
pub const STATS_CLIENTS: &str = "/api/statistics/clients/";

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[&str] = &[
        LOGIN,
        REGISTER,
        ME,
        ROOMS,
        ROOMS_AVAILABLE,
        CLIENTS,
        EMPLOYEES,
        CLEANING,
        CLIENTS_IN_PERIOD,
        WHO_CLEANED_CLIENT_ROOM,
        SAME_PERIOD_CLIENTS,
        UNJOB_EMPLOYEES,
        GETJOB_EMPLOYEES,
        EMPLOYEE_SCHEDULE,
        REPORT,
        STATS_HOTEL,
        STATS_CLIENTS,
    ];

    #[test]
    fn every_path_is_rooted() {
        for path in ALL {
            assert!(path.starts_with('/'), "{path} must be absolute");
        }
    }

    #[test]
    fn auth_paths_live_under_auth() {
        for path in [LOGIN, REGISTER, ME] {
            assert!(path.starts_with("/auth/"), "{path}");
        }
    }

    #[test]
    fn report_embeds_fixed_period() {
        assert!(REPORT.contains("quarter=4"));
        assert!(REPORT.contains("year=2024"));
    }
}
