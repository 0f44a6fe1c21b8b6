use crate::models::profile::DEFAULT_AVATAR_URL;
use serde::{Deserialize, Serialize};

/// Build-time override via `KICK_API_BASE` (see build.rs).
pub const DEFAULT_API_BASE: &str = match option_env!("KICK_API_BASE") {
    Some(base) => base,
    None => "https://kick.com",
};

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub api_base: String,
    pub user_agent: String,
    /// None keeps the transport's own timeout behaviour.
    pub request_timeout_secs: Option<u64>,
    pub default_avatar_url: String,
    pub diagnostics_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: None,
            default_avatar_url: DEFAULT_AVATAR_URL.to_string(),
            diagnostics_enabled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "api_base": "http://127.0.0.1:9000" }"#).unwrap();

        assert_eq!(settings.api_base, "http://127.0.0.1:9000");
        assert_eq!(settings.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(settings.request_timeout_secs, None);
        assert_eq!(settings.default_avatar_url, DEFAULT_AVATAR_URL);
        assert!(!settings.diagnostics_enabled);
    }
}
