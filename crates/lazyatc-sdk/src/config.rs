//! Routes API configuration.

/// Base URL used when `LAZYATC_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://api.pilotassist.dev";

/// Where the routes API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without the `/routes` path (e.g. `https://api.pilotassist.dev`).
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Build the configuration from environment variables.
    ///
    /// | Variable          | Default                        | Description               |
    /// |-------------------|--------------------------------|---------------------------|
    /// | `LAZYATC_API_URL` | `https://api.pilotassist.dev`  | Base URL of the routes API |
    pub fn from_env() -> Self {
        let base_url = std::env::var("LAZYATC_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { base_url }
    }

    /// Use an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Full URL of the routes endpoint.
    pub fn routes_url(&self) -> String {
        format!("{}/routes", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_public_api() {
        assert_eq!(
            ApiConfig::default().routes_url(),
            "https://api.pilotassist.dev/routes"
        );
    }

    #[test]
    fn trailing_slash_is_ignored() {
        let cfg = ApiConfig::with_base_url("http://127.0.0.1:8080/");
        assert_eq!(cfg.routes_url(), "http://127.0.0.1:8080/routes");
    }
}
