use std::time::Duration;

use crate::domain::DEFAULT_SENDER_NAME;

/// Runtime settings, read from the environment and overridable from the CLI.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Sender identity a fresh form starts with (default: "Joking Shopping Proxy")
    pub sender_name: String,
    /// How long the simulated forwarder takes (default: 1500 ms)
    pub forward_delay: Duration,
    /// Make the simulated forwarder fail every send (default: false)
    pub simulate_failure: bool,
    /// Form service mailbox capacity (default: 32)
    pub mailbox_size: usize,
    /// Fallback tracing filter when RUST_LOG is unset (default: "info")
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sender_name: DEFAULT_SENDER_NAME.to_string(),
            forward_delay: Duration::from_millis(1500),
            simulate_failure: false,
            mailbox_size: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            sender_name: lookup("FORM_SENDER_NAME").unwrap_or(defaults.sender_name),
            forward_delay: lookup("FORWARD_DELAY_MS")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.forward_delay),
            simulate_failure: lookup("FORWARD_SIMULATE_FAILURE")
                .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.simulate_failure),
            mailbox_size: lookup("FORM_MAILBOX_SIZE")
                .and_then(|s| s.parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(defaults.mailbox_size),
            log_filter: lookup("LOG_FILTER").unwrap_or(defaults.log_filter),
        }
    }
}
