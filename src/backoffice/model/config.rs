use std::path::PathBuf;
use std::time::Duration;

/// Client configs
#[derive(Debug, Clone)]
pub(crate) struct AppConfig {
    pub api_base_url: String,
    pub session_file: PathBuf,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn new(api_base_url: String, session_file: PathBuf, request_timeout: Duration) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            session_file,
            request_timeout,
        }
    }
}
