use std::{error::Error, fmt};

/// Everything that can go wrong between submitting a ticker and holding a
/// usable analysis payload. The `Display` text is shown verbatim in the
/// error banner.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Backend answered with a non-2xx status.
    Http {
        ticker: String,
        status: u16,
        status_text: String,
    },
    /// Request never produced a response (DNS, TLS, timeout, CORS...).
    Network { ticker: String, detail: String },
    /// Response body was not a complete analysis payload.
    InvalidPayload { ticker: String, detail: String },
    /// Local failure before the request could start.
    Runtime(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::Http {
                ticker,
                status_text,
                ..
            } => write!(f, "Failed to analyze {}: {}", ticker, status_text),
            AnalysisError::Network { ticker, detail } => {
                write!(f, "Failed to analyze {}: network error ({})", ticker, detail)
            }
            AnalysisError::InvalidPayload { ticker, detail } => write!(
                f,
                "Failed to analyze {}: unexpected response from analysis service ({})",
                ticker, detail
            ),
            AnalysisError::Runtime(msg) => write!(f, "Analysis could not start: {}", msg),
        }
    }
}

impl Error for AnalysisError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_names_ticker_and_status_text() {
        let err = AnalysisError::Http {
            ticker: "ZZZZ".to_string(),
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to analyze ZZZZ: Not Found");
    }

    #[test]
    fn payload_error_keeps_detail() {
        let err = AnalysisError::InvalidPayload {
            ticker: "AAPL".to_string(),
            detail: "missing field `rsi`".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("AAPL"));
        assert!(msg.contains("missing field `rsi`"));
    }
}
