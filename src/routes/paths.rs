//! Route paths and the public/protected table consumed by the navigation
//! guard. The table is fixed at startup; order matters only for readability
//! since the paths are disjoint literals.

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const HEALTH: &str = "/health";
pub const ROOMS: &str = "/rooms";
pub const CLIENTS: &str = "/clients";
pub const EMPLOYEES: &str = "/employees";
pub const CLEANING: &str = "/cleaning";
pub const REPORT: &str = "/report";
pub const STATS: &str = "/stats";

/// Binding of a path to its access level. Views are bound in `AppRoutes`.
pub struct RouteDescriptor {
    pub path: &'static str,
    pub public: bool,
}

pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor { path: HOME, public: false },
    RouteDescriptor { path: LOGIN, public: true },
    RouteDescriptor { path: REGISTER, public: true },
    RouteDescriptor { path: HEALTH, public: true },
    RouteDescriptor { path: ROOMS, public: false },
    RouteDescriptor { path: CLIENTS, public: false },
    RouteDescriptor { path: EMPLOYEES, public: false },
    RouteDescriptor { path: CLEANING, public: false },
    RouteDescriptor { path: REPORT, public: false },
    RouteDescriptor { path: STATS, public: false },
];

/// True iff the path is bound and marked public. Unknown paths fall through
/// to the protected branch, like a route with no public marker.
pub fn is_public(path: &str) -> bool {
    ROUTES
        .iter()
        .find(|route| route.path == path)
        .is_some_and(|route| route.public)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_paths_are_unique_and_rooted() {
        for (index, route) in ROUTES.iter().enumerate() {
            assert!(route.path.starts_with('/'));
            assert!(
                ROUTES[index + 1..].iter().all(|other| other.path != route.path),
                "duplicate path {}",
                route.path
            );
        }
    }

    #[test]
    fn only_login_register_and_health_are_public() {
        let public: Vec<_> = ROUTES
            .iter()
            .filter(|route| route.public)
            .map(|route| route.path)
            .collect();
        assert_eq!(public, vec![LOGIN, REGISTER, HEALTH]);
    }

    #[test]
    fn unknown_paths_are_not_public() {
        assert!(!is_public("/missing"));
        assert!(!is_public(""));
    }
}
