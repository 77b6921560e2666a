use log::LevelFilter;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Base URL of the scoring server (STUMPS_SERVER).
    pub server_url: String,
    pub full_screen: bool,
    pub log_level: Option<LevelFilter>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_owned(),
            full_screen: false,
            log_level: None,
        }
    }
}

impl AppSettings {
    pub fn load() -> Self {
        Self {
            server_url: std::env::var("STUMPS_SERVER")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SERVER_URL.to_owned()),
            full_screen: false,
            log_level: std::env::var("STUMPS_LOG")
                .ok()
                .and_then(|v| v.parse::<LevelFilter>().ok()),
        }
    }
}
