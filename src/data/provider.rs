use async_trait::async_trait;
use reqwest::{StatusCode, Url};

use crate::config::BACKEND;
use crate::data::AnalysisError;
use crate::domain::Ticker;
use crate::models::AnalysisResult;

#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

/// Abstract source of analysis payloads.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait AnalysisProvider {
    async fn analyze(&self, ticker: &Ticker) -> Result<AnalysisResult, AnalysisError>;
}

/// HTTP client for `GET {base_url}/api/v1/analyze/{ticker}`.
pub struct BackendClient {
    client: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    /// Fails if `base_url` is not an absolute http(s)-style URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, AnalysisError> {
        let base_url = parse_base_url(&base_url.into())?;
        let builder = reqwest::Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_millis(BACKEND.request_timeout_ms));

        let client = builder
            .build()
            .map_err(|e| AnalysisError::Runtime(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl AnalysisProvider for BackendClient {
    async fn analyze(&self, ticker: &Ticker) -> Result<AnalysisResult, AnalysisError> {
        let url = analyze_url(&self.base_url, ticker);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AnalysisError::Network {
                ticker: ticker.to_string(),
                detail: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(http_error(ticker, status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AnalysisError::Network {
                ticker: ticker.to_string(),
                detail: e.to_string(),
            })?;

        decode_response(ticker, status, &body)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, AnalysisError> {
    let url = Url::parse(raw)
        .map_err(|e| AnalysisError::Runtime(format!("invalid backend URL {}: {}", raw, e)))?;
    if url.cannot_be_a_base() {
        return Err(AnalysisError::Runtime(format!(
            "invalid backend URL {}: not a base URL",
            raw
        )));
    }
    Ok(url)
}

/// `{base}/api/v1/analyze/{ticker}` with the ticker percent-encoded as a single
/// path segment, so `/`, `?` and `#` in a symbol never change the endpoint.
pub(crate) fn analyze_url(base_url: &Url, ticker: &Ticker) -> Url {
    let mut url = base_url.clone();
    url.set_query(None);
    url.set_fragment(None);
    // Only fails for cannot-be-a-base URLs, which `parse_base_url` rejects
    if let Ok(mut segments) = url.path_segments_mut() {
        segments
            .pop_if_empty()
            .extend(BACKEND.analyze_path.split('/').filter(|s| !s.is_empty()))
            .push(ticker.as_str());
    }
    url
}

/// Canonical reason phrase, or the bare code when the status has none.
pub(crate) fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}

fn http_error(ticker: &Ticker, status: StatusCode) -> AnalysisError {
    AnalysisError::Http {
        ticker: ticker.to_string(),
        status: status.as_u16(),
        status_text: status_text(status),
    }
}

/// Turn a status + body into a payload. Non-2xx statuses never reach the parser.
pub(crate) fn decode_response(
    ticker: &Ticker,
    status: StatusCode,
    body: &[u8],
) -> Result<AnalysisResult, AnalysisError> {
    if !status.is_success() {
        return Err(http_error(ticker, status));
    }
    serde_json::from_slice(body).map_err(|e| AnalysisError::InvalidPayload {
        ticker: ticker.to_string(),
        detail: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::SAMPLE_JSON;

    fn ticker(s: &str) -> Ticker {
        Ticker::parse(s).unwrap()
    }

    fn url_for(base: &str, raw: &str) -> Url {
        analyze_url(&parse_base_url(base).unwrap(), &ticker(raw))
    }

    #[test]
    fn analyze_url_appends_ticker_segment() {
        assert_eq!(
            url_for("https://example.com", "aapl").as_str(),
            "https://example.com/api/v1/analyze/AAPL"
        );
    }

    #[test]
    fn analyze_url_ignores_trailing_slash_and_keeps_prefix() {
        assert_eq!(
            url_for("http://localhost:8000/", "MSFT").as_str(),
            "http://localhost:8000/api/v1/analyze/MSFT"
        );
        assert_eq!(
            url_for("http://localhost:8000/proxy/", "MSFT").as_str(),
            "http://localhost:8000/proxy/api/v1/analyze/MSFT"
        );
    }

    #[test]
    fn ticker_punctuation_stays_inside_one_segment() {
        let cases = [
            ("brk/b", "BRK%2FB"),
            ("aapl?x=1", "AAPL%3FX=1"),
            ("a#b", "A%23B"),
            ("../health", "..%2FHEALTH"),
        ];
        for (raw, encoded) in cases {
            let url = url_for("https://h.example", raw);
            assert_eq!(url.path(), format!("/api/v1/analyze/{}", encoded), "{}", raw);
            assert_eq!(url.query(), None, "{}", raw);
            assert_eq!(url.fragment(), None, "{}", raw);
            assert_eq!(url.path_segments().map(|s| s.count()), Some(4), "{}", raw);
        }
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            BackendClient::new("not a url"),
            Err(AnalysisError::Runtime(_))
        ));
        assert!(matches!(
            BackendClient::new("mailto:ops@example.com"),
            Err(AnalysisError::Runtime(_))
        ));
        assert!(BackendClient::new("https://example.com").is_ok());
    }

    #[test]
    fn not_found_reports_ticker_and_status_text() {
        let err = decode_response(&ticker("ZZZZ"), StatusCode::NOT_FOUND, b"{}").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("ZZZZ"));
        assert!(msg.contains("Not Found"));
        assert!(matches!(err, AnalysisError::Http { status: 404, .. }));
    }

    #[test]
    fn server_error_is_http_error_even_with_valid_body() {
        let err = decode_response(
            &ticker("AAPL"),
            StatusCode::INTERNAL_SERVER_ERROR,
            SAMPLE_JSON.as_bytes(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Failed to analyze AAPL: Internal Server Error");
    }

    #[test]
    fn unknown_status_falls_back_to_code() {
        let status = StatusCode::from_u16(599).unwrap();
        assert_eq!(status_text(status), "599");
    }

    #[test]
    fn ok_with_complete_payload_decodes() {
        let result = decode_response(&ticker("aapl"), StatusCode::OK, SAMPLE_JSON.as_bytes())
            .unwrap();
        assert_eq!(result.ticker, "AAPL");
        assert_eq!(result.market_correlation.beta, 1.07);
    }

    #[test]
    fn ok_with_partial_payload_is_invalid() {
        let body = br#"{ "ticker": "AAPL", "current_price": 1.0 }"#;
        let err = decode_response(&ticker("AAPL"), StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidPayload { .. }));
    }

    #[test]
    fn ok_with_non_json_body_is_invalid() {
        let err = decode_response(&ticker("AAPL"), StatusCode::OK, b"<html>").unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidPayload { .. }));
    }
}
