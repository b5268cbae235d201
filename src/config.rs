use std::env;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub server_url: String,
    pub request_timeout_secs: u64,
    pub log_level: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            server_url: env::var("CONVERT_SERVER_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}
