//! Webhook client and the always-succeeding fallback path.

use std::fmt;

use calwiz_numerology::DayNumerology;
use calwiz_time::CalendarDate;
use log::{debug, warn};

use crate::config::InsightConfig;
use crate::fallback::fallback_insight;
use crate::payload::{InsightMode, InsightRequest};

/// Errors on the webhook path. None of these escape
/// [`insight_or_fallback`], which degrades to a local narrative.
#[derive(Debug)]
#[non_exhaustive]
pub enum InsightError {
    /// No webhook URL configured.
    MissingWebhook,
    /// Transport-level failure, including timeouts.
    Http(reqwest::Error),
    /// The endpoint answered with a non-success HTTP status.
    Status(u16),
}

impl fmt::Display for InsightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingWebhook => write!(f, "no insight webhook configured"),
            Self::Http(err) => write!(f, "insight webhook request failed: {err}"),
            Self::Status(code) => write!(f, "insight webhook returned status {code}"),
        }
    }
}

impl std::error::Error for InsightError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for InsightError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

/// A source of insight text for a request.
pub trait InsightSource {
    fn fetch_insight(&self, request: &InsightRequest) -> Result<String, InsightError>;
}

/// Real webhook-backed source. Posts the request as JSON and reads the
/// response body as plain text.
pub struct WebhookClient {
    config: InsightConfig,
    http: reqwest::blocking::Client,
}

impl WebhookClient {
    pub fn new(config: InsightConfig) -> Result<Self, InsightError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, http })
    }
}

impl InsightSource for WebhookClient {
    fn fetch_insight(&self, request: &InsightRequest) -> Result<String, InsightError> {
        let url = self
            .config
            .webhook_url
            .as_deref()
            .ok_or(InsightError::MissingWebhook)?;
        debug!("insight_request mode={} date={}", request.mode.name(), request.date);
        let response = self.http.post(url).json(request).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(InsightError::Status(status.as_u16()));
        }
        Ok(response.text()?)
    }
}

/// Source that never touches the network; it answers every request with
/// the local fallback narrative. Used when demo mode is on.
pub struct DemoSource {
    numbers: DayNumerology,
    date: CalendarDate,
}

impl DemoSource {
    pub fn new(date: CalendarDate, numbers: DayNumerology) -> Self {
        Self { numbers, date }
    }
}

impl InsightSource for DemoSource {
    fn fetch_insight(&self, request: &InsightRequest) -> Result<String, InsightError> {
        Ok(fallback_insight(request.mode, self.date, self.numbers))
    }
}

/// Fetch an insight, degrading to the local narrative on any failure.
///
/// This is the only entry point callers need; it cannot fail.
pub fn insight_or_fallback(
    source: &dyn InsightSource,
    request: &InsightRequest,
    date: CalendarDate,
    numbers: DayNumerology,
) -> String {
    match source.fetch_insight(request) {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            warn!("insight_fallback reason=empty_response date={}", request.date);
            fallback_insight(request.mode, date, numbers)
        }
        Err(err) => {
            warn!("insight_fallback reason=\"{err}\" date={}", request.date);
            fallback_insight(request.mode, date, numbers)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    impl InsightSource for FailingSource {
        fn fetch_insight(&self, _request: &InsightRequest) -> Result<String, InsightError> {
            Err(InsightError::Status(502))
        }
    }

    struct EchoSource;

    impl InsightSource for EchoSource {
        fn fetch_insight(&self, _request: &InsightRequest) -> Result<String, InsightError> {
            Ok("the stars say yes".to_string())
        }
    }

    fn fixtures() -> (CalendarDate, DayNumerology, InsightRequest) {
        let date = CalendarDate::new(2024, 11, 1);
        let numbers = DayNumerology { primary: 7, secondary: Some(16), personal: None };
        let request = InsightRequest::numerology(date, numbers, None);
        (date, numbers, request)
    }

    #[test]
    fn success_passes_through() {
        let (date, numbers, request) = fixtures();
        let text = insight_or_fallback(&EchoSource, &request, date, numbers);
        assert_eq!(text, "the stars say yes");
    }

    #[test]
    fn failure_degrades_to_fallback() {
        let (date, numbers, request) = fixtures();
        let text = insight_or_fallback(&FailingSource, &request, date, numbers);
        assert!(text.contains("energy of 7"));
    }

    #[test]
    fn demo_source_never_fails() {
        let (date, numbers, request) = fixtures();
        let source = DemoSource::new(date, numbers);
        let text = source.fetch_insight(&request).unwrap();
        assert!(!text.is_empty());
    }

    #[test]
    fn missing_webhook_is_reported() {
        let client = WebhookClient::new(InsightConfig::default()).unwrap();
        let (_, _, request) = fixtures();
        let err = client.fetch_insight(&request).unwrap_err();
        assert!(matches!(err, InsightError::MissingWebhook));
    }
}
