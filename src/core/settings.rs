use serde::{Deserialize, Serialize};
use std::fs;

use super::api::DEFAULT_BASE_URL;
use super::paths::get_trailtrack_dir;

// ── Settings (~/.trailtrack/settings.json) ───────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Base URL of the Trailhead API; override to point at a mirror.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

pub fn read_settings() -> Result<Settings, String> {
    let path = get_trailtrack_dir()?.join("settings.json");
    if !path.exists() {
        return Ok(Settings::default());
    }
    let raw = fs::read_to_string(&path).map_err(|e| e.to_string())?;
    Ok(serde_json::from_str(&raw).unwrap_or_default())
}

pub fn write_settings(settings: &Settings) -> Result<(), String> {
    let path = get_trailtrack_dir()?.join("settings.json");
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
    }
    let raw = serde_json::to_string_pretty(settings).map_err(|e| e.to_string())?;
    fs::write(&path, raw).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.request_timeout_secs, 10);
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let settings: Settings =
            serde_json::from_str("{\"api_base_url\":\"https://mirror.example/api\"}")
                .unwrap_or_default();
        assert_eq!(settings.api_base_url, "https://mirror.example/api");
        // Missing fields fall back to defaults.
        assert_eq!(settings.request_timeout_secs, 10);
    }

    #[test]
    fn test_corrupt_document_falls_back_to_defaults() {
        let settings: Settings = serde_json::from_str("garbage").unwrap_or_default();
        assert_eq!(settings, Settings::default());
    }
}
