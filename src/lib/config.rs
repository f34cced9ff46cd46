//! Build-time configuration for the API origin. The deployment talks to a
//! single backend, so the origin is fixed when the bundle is built; set
//! `FRONTDESK_API_BASE_URL` to point staging builds elsewhere.

/// Origin used when no override is provided at build time.
const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Loads the configuration, falling back to the default origin when the
    /// override is unset or blank.
    pub fn load() -> Self {
        let api_base_url = option_env!("FRONTDESK_API_BASE_URL").unwrap_or("");

        Self {
            api_base_url: normalize_base_url(api_base_url),
        }
    }
}

fn normalize_base_url(value: &str) -> String {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_base_url, DEFAULT_API_BASE_URL};

    #[test]
    fn normalize_base_url_falls_back_on_empty() {
        assert_eq!(normalize_base_url(""), DEFAULT_API_BASE_URL);
        assert_eq!(normalize_base_url("   "), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn normalize_base_url_trims_and_strips_trailing_slash() {
        assert_eq!(
            normalize_base_url(" http://10.0.0.5:8000/ "),
            "http://10.0.0.5:8000"
        );
        assert_eq!(
            normalize_base_url("https://desk.example.com"),
            "https://desk.example.com"
        );
    }
}
