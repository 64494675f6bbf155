//! App Configuration
//!
//! Values baked in at build time from the environment (`OPS_HUB_API_URL`,
//! `OPS_HUB_LOG`). A browser bundle has no runtime environment to read.

use log::LevelFilter;

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_REVIEW_DAYS: u32 = 7;

/// Selectable review windows, in days
pub const REVIEW_WINDOWS: [u32; 3] = [7, 14, 30];

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend origin, without trailing slash
    pub api_base_url: String,
    /// Default review window for the reviews view
    pub review_days: u32,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("OPS_HUB_API_URL"), option_env!("OPS_HUB_LOG"))
    }

    pub fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        Self {
            api_base_url,
            review_days: DEFAULT_REVIEW_DAYS,
            log_level: log_level.map(console_logger::parse_level).unwrap_or(LevelFilter::Info),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.review_days, 7);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = AppConfig::from_values(Some("https://ops.example.com/"), Some("debug"));
        assert_eq!(config.api_base_url, "https://ops.example.com");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_blank_url_uses_default() {
        let config = AppConfig::from_values(Some("  "), None);
        assert_eq!(config.api_base_url, "http://localhost:8000");
    }
}
