//! Engine settings read from the environment.
//!
//! `main` loads `.env.local` and `.env` through dotenvy before calling
//! [`EngineSettings::from_env`]. Unparseable values fall back to defaults with
//! a warning rather than aborting startup.

use std::str::FromStr;

use impostor_domain::HiddenEvidenceSelection;

use crate::infrastructure::gemini::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_TIMEOUT_SECS};
use crate::infrastructure::resilient_llm::RetryConfig;

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_MAX_RETRIES: u32 = 1;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1000;
pub const DEFAULT_SESSION_IDLE_TTL_SECS: u64 = 60 * 60;

#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub dialogue_timeout_secs: u64,
    pub dialogue_max_retries: u32,
    pub dialogue_retry_delay_ms: u64,
    /// Fixed seed for reproducible cases; system randomness when absent.
    pub game_seed: Option<u64>,
    pub hidden_evidence_selection: HiddenEvidenceSelection,
    pub server_host: String,
    pub server_port: u16,
    pub cors_allowed_origins: Option<String>,
    /// Sessions untouched for this long are swept from memory.
    pub session_idle_ttl_secs: u64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl EngineSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            gemini_api_key: get("GEMINI_API_KEY"),
            gemini_model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: get("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            dialogue_timeout_secs: parse_or("DIALOGUE_TIMEOUT_SECS", get("DIALOGUE_TIMEOUT_SECS"), DEFAULT_TIMEOUT_SECS),
            dialogue_max_retries: parse_or("DIALOGUE_MAX_RETRIES", get("DIALOGUE_MAX_RETRIES"), DEFAULT_MAX_RETRIES),
            dialogue_retry_delay_ms: parse_or(
                "DIALOGUE_RETRY_DELAY_MS",
                get("DIALOGUE_RETRY_DELAY_MS"),
                DEFAULT_RETRY_DELAY_MS,
            ),
            game_seed: get("GAME_SEED").and_then(|raw| match raw.parse() {
                Ok(seed) => Some(seed),
                Err(e) => {
                    tracing::warn!(value = %raw, error = %e, "Ignoring invalid GAME_SEED");
                    None
                }
            }),
            hidden_evidence_selection: parse_or(
                "HIDDEN_EVIDENCE_SELECTION",
                get("HIDDEN_EVIDENCE_SELECTION"),
                HiddenEvidenceSelection::default(),
            ),
            server_host: get("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port: parse_or(
                "SERVER_PORT",
                get("SERVER_PORT").or_else(|| get("PORT")),
                DEFAULT_SERVER_PORT,
            ),
            cors_allowed_origins: get("CORS_ALLOWED_ORIGINS"),
            session_idle_ttl_secs: parse_or(
                "SESSION_IDLE_TTL_SECS",
                get("SESSION_IDLE_TTL_SECS"),
                DEFAULT_SESSION_IDLE_TTL_SECS,
            ),
        }
    }

    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig {
            max_retries: self.dialogue_max_retries,
            base_delay_ms: self.dialogue_retry_delay_ms,
            ..RetryConfig::default()
        }
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            tracing::warn!(key, value = %raw, error = %e, "Invalid setting, using default");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> EngineSettings {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EngineSettings::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let s = settings(&[]);
        assert!(s.gemini_api_key.is_none());
        assert_eq!(s.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(s.dialogue_timeout_secs, 30);
        assert_eq!(s.dialogue_max_retries, 1);
        assert_eq!(s.dialogue_retry_delay_ms, 1000);
        assert_eq!(s.game_seed, None);
        assert_eq!(s.hidden_evidence_selection, HiddenEvidenceSelection::Leading);
        assert_eq!(s.server_port, 3000);
        assert!(s.cors_allowed_origins.is_none());
        assert_eq!(s.session_idle_ttl_secs, 3600);
    }

    #[test]
    fn reads_overrides() {
        let s = settings(&[
            ("GEMINI_API_KEY", " secret "),
            ("GAME_SEED", "7"),
            ("HIDDEN_EVIDENCE_SELECTION", "sampled"),
            ("PORT", "8080"),
            ("DIALOGUE_MAX_RETRIES", "0"),
            ("SESSION_IDLE_TTL_SECS", "120"),
        ]);
        assert_eq!(s.gemini_api_key.as_deref(), Some("secret"));
        assert_eq!(s.game_seed, Some(7));
        assert_eq!(s.hidden_evidence_selection, HiddenEvidenceSelection::Sampled);
        assert_eq!(s.server_port, 8080);
        assert_eq!(s.retry_config().max_retries, 0);
        assert_eq!(s.session_idle_ttl_secs, 120);
    }

    #[test]
    fn invalid_values_fall_back() {
        let s = settings(&[
            ("SERVER_PORT", "not-a-port"),
            ("GAME_SEED", "abc"),
            ("GEMINI_API_KEY", "   "),
        ]);
        assert_eq!(s.server_port, 3000);
        assert_eq!(s.game_seed, None);
        assert!(s.gemini_api_key.is_none());
    }
}
