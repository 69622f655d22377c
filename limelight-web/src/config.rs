//! Frontend configuration.
//!
//! The session API is same-origin; the accounts service lives at an
//! absolute base URL that can be baked in at build time.

/// Frontend configuration for service locations.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the accounts service.
    pub accounts_service_url: String,

    /// Organization whose accounts the dashboard manages.
    pub org_id: i64,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            accounts_service_url: option_env!("LIMELIGHT_ACCOUNTS_URL")
                .unwrap_or("http://localhost:3000")
                .to_string(),
            org_id: 1,
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_accounts_service() {
        let config = FrontendConfig::new();
        assert!(config.accounts_service_url.starts_with("http"));
        assert_eq!(config.org_id, 1);
    }
}
