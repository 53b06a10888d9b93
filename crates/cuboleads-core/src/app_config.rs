pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/";

pub const DEFAULT_SITE_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Clone)]
pub struct AppConfig {
    pub google_api_key: String,
    pub log_level: String,
    pub places_base_url: String,
    pub places_timeout_secs: u64,
    pub site_timeout_secs: u64,
    pub site_user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("google_api_key", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("places_base_url", &self.places_base_url)
            .field("places_timeout_secs", &self.places_timeout_secs)
            .field("site_timeout_secs", &self.site_timeout_secs)
            .field("site_user_agent", &self.site_user_agent)
            .finish()
    }
}
