/// Remote analysis backend settings.
pub struct BackendConfig {
    /// Scheme + host. A path prefix is kept, a trailing slash is ignored
    pub base_url: &'static str,
    /// Path prefix; the ticker is appended as one encoded segment
    pub analyze_path: &'static str,
    /// Native only. The browser fetch API has no per-request timeout.
    pub request_timeout_ms: u64,
}

pub const BACKEND: BackendConfig = BackendConfig {
    base_url: "https://traderai-r9iz.onrender.com",
    analyze_path: "/api/v1/analyze",
    request_timeout_ms: 30_000, // render.com free tier cold starts are slow
};
