//! Runtime configuration, read from the environment.
//!
//! | variable | default |
//! |---|---|
//! | `PORT` | `8080` |
//! | `WISDOM_PREFS_DB` | `wisdom_prefs.db` (`:memory:` for a throwaway store) |
//! | `WISDOM_CHAT_LATENCY_MS` | `1000` |
//! | `WISDOM_SUBMIT_LATENCY_MS` | `1000` |
//! | `WISDOM_SUBMIT_FAIL` | unset; any non-empty value makes every submission fail with it |
//! | `WISDOM_MAX_SESSIONS` | `1000`; the least recently active chat is dropped beyond it |

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::chat::DEFAULT_REPLY_LATENCY;
use crate::form::submission::DEFAULT_SUBMIT_LATENCY;

pub const IN_MEMORY_DB: &str = ":memory:";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub port: u16,
    pub prefs_db: String,
    pub chat_latency: Duration,
    pub submit_latency: Duration,
    pub submit_failure: Option<String>,
    pub max_chat_sessions: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            prefs_db: "wisdom_prefs.db".to_string(),
            chat_latency: DEFAULT_REPLY_LATENCY,
            submit_latency: DEFAULT_SUBMIT_LATENCY,
            submit_failure: None,
            max_chat_sessions: 1000,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unparseable values fall back
    /// to the default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let millis = |key: &str, default: Duration| {
            parse_or(&lookup, key, default.as_millis() as u64).map_or(default, Duration::from_millis)
        };

        Self {
            port: parse_or(&lookup, "PORT", defaults.port).unwrap_or(defaults.port),
            prefs_db: lookup("WISDOM_PREFS_DB")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.prefs_db),
            chat_latency: millis("WISDOM_CHAT_LATENCY_MS", defaults.chat_latency),
            submit_latency: millis("WISDOM_SUBMIT_LATENCY_MS", defaults.submit_latency),
            submit_failure: lookup("WISDOM_SUBMIT_FAIL").filter(|v| !v.trim().is_empty()),
            max_chat_sessions: parse_or(&lookup, "WISDOM_MAX_SESSIONS", defaults.max_chat_sessions)
                .filter(|max| *max > 0)
                .unwrap_or(defaults.max_chat_sessions),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn uses_in_memory_prefs(&self) -> bool {
        self.prefs_db == IN_MEMORY_DB
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Option<T> {
    match lookup(key) {
        None => Some(default),
        Some(raw) => match raw.trim().parse() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring invalid {}={:?}", key, raw);
                None
            }
        },
    }
}
