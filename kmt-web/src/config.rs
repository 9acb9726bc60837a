//! Frontend configuration module
//!
//! Build-time configuration for the API endpoint the console talks to.

/// Frontend configuration for backend URLs.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL every API request is resolved against.
    pub api_base_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("KMT_API_BASE_URL").unwrap_or("/api").to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_the_api_prefix() {
        let config = FrontendConfig::default();
        assert!(!config.api_base_url.is_empty());
    }

    #[test]
    fn clone_preserves_the_url() {
        let config1 = FrontendConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1.api_base_url(), config2.api_base_url());
    }
}
