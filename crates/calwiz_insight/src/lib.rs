//! Optional AI-insight webhook client with a local fallback narrative.
//!
//! The webhook is a capability interface: the core never depends on network
//! availability, and every failure path (missing URL, network error,
//! non-success status, timeout) degrades to a locally generated narrative
//! built from the same day data. `insight_or_fallback` therefore never
//! fails.

pub mod client;
pub mod config;
pub mod fallback;
pub mod payload;

pub use client::{DemoSource, InsightError, InsightSource, WebhookClient, insight_or_fallback};
pub use config::InsightConfig;
pub use fallback::fallback_insight;
pub use payload::{InsightData, InsightMode, InsightRequest};
