//! Insight webhook configuration.

use std::env;
use std::time::Duration;

const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Webhook endpoint settings.
///
/// With no URL configured the client never leaves demo mode and every
/// request resolves locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightConfig {
    /// Endpoint receiving insight requests. `None` forces demo mode.
    pub webhook_url: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
    /// When set, skip the network entirely and answer locally.
    pub demo_mode: bool,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            demo_mode: true,
        }
    }
}

impl InsightConfig {
    /// Read configuration from the environment.
    ///
    /// `CALWIZ_AI_WEBHOOK_URL` sets the endpoint (and turns demo mode off),
    /// `CALWIZ_AI_TIMEOUT_MS` overrides the 30 s timeout, and
    /// `CALWIZ_AI_DEMO=1` forces demo mode back on.
    pub fn from_env() -> Self {
        let webhook_url = env::var("CALWIZ_AI_WEBHOOK_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());
        let timeout_ms = env::var("CALWIZ_AI_TIMEOUT_MS")
            .ok()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        let demo_forced = matches!(
            env::var("CALWIZ_AI_DEMO").ok().as_deref(),
            Some("1") | Some("true")
        );
        let demo_mode = demo_forced || webhook_url.is_none();
        Self {
            webhook_url,
            timeout: Duration::from_millis(timeout_ms),
            demo_mode,
        }
    }

    /// Config pointing at a concrete endpoint, demo mode off.
    pub fn with_webhook(url: impl Into<String>) -> Self {
        Self {
            webhook_url: Some(url.into()),
            demo_mode: false,
            ..Self::default()
        }
    }
}
