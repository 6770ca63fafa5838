use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub session_file: PathBuf,
    pub timeout_secs: u64,
    pub log_level: String,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, String> {
        let api_base_url = env_or("PROPDESK_API_BASE_URL", "http://localhost:3000");
        let api_base_url = normalize_base_url(&api_base_url)?;

        let session_file: PathBuf = env_or("PROPDESK_SESSION_FILE", "propdesk-session.json").into();

        let timeout_secs: u64 = env_or("PROPDESK_TIMEOUT_SECS", "30")
            .parse()
            .map_err(|e| format!("Invalid PROPDESK_TIMEOUT_SECS: {e}"))?;

        let log_level = env_or("PROPDESK_LOG_LEVEL", "info");

        Ok(ClientConfig {
            api_base_url,
            session_file,
            timeout_secs,
            log_level,
        })
    }

    pub fn new(api_base_url: &str) -> Result<Self, String> {
        Ok(ClientConfig {
            api_base_url: normalize_base_url(api_base_url)?,
            session_file: "propdesk-session.json".into(),
            timeout_secs: 30,
            log_level: "info".to_string(),
        })
    }
}

fn normalize_base_url(url: &str) -> Result<String, String> {
    let url = url.trim_end_matches('/');
    if url.is_empty() {
        return Err("API base URL cannot be empty".to_string());
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(format!(
            "Invalid API base URL '{url}': must start with http:// or https://"
        ));
    }
    Ok(url.to_string())
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
