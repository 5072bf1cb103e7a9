//! Runs analysis requests off the UI thread and posts results back over a channel.

use std::sync::{
    Arc,
    mpsc::{self, Receiver, Sender},
};

use eframe::egui::Context;

use crate::data::{AnalysisError, AnalysisProvider};
use crate::domain::Ticker;
use crate::models::AnalysisResult;
use crate::utils::AppInstant;

#[cfg(debug_assertions)]
use crate::config::DF;

/// Outcome of one dispatched request, tagged with the id the session issued.
#[derive(Debug)]
pub struct Completion {
    pub request_id: u64,
    pub ticker: Ticker,
    pub outcome: Result<AnalysisResult, AnalysisError>,
    pub elapsed_ms: u128,
}

#[cfg(not(target_arch = "wasm32"))]
pub trait DispatchProvider: AnalysisProvider + Send + Sync + 'static {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: AnalysisProvider + Send + Sync + 'static> DispatchProvider for T {}

#[cfg(target_arch = "wasm32")]
pub trait DispatchProvider: AnalysisProvider + 'static {}
#[cfg(target_arch = "wasm32")]
impl<T: AnalysisProvider + 'static> DispatchProvider for T {}

pub struct RequestDispatcher<P> {
    provider: Arc<P>,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
    repaint: Option<Context>,
    #[cfg(not(target_arch = "wasm32"))]
    runtime: tokio::runtime::Runtime,
}

async fn run_request<P: AnalysisProvider + ?Sized>(
    provider: &P,
    request_id: u64,
    ticker: Ticker,
) -> Completion {
    let start = AppInstant::now();
    let outcome = provider.analyze(&ticker).await;
    Completion {
        request_id,
        ticker,
        outcome,
        elapsed_ms: start.elapsed().as_millis(),
    }
}

fn deliver(tx: &Sender<Completion>, repaint: Option<&Context>, completion: Completion) {
    #[cfg(debug_assertions)]
    if DF.log_requests {
        log::info!(
            "Request #{} for {} finished in {}ms (ok: {})",
            completion.request_id,
            completion.ticker,
            completion.elapsed_ms,
            completion.outcome.is_ok()
        );
    }
    // Receiver only disappears when the app is shutting down.
    if tx.send(completion).is_err() {
        log::warn!("Dropped analysis result: dispatcher receiver is gone");
    }
    if let Some(ctx) = repaint {
        ctx.request_repaint();
    }
}

impl<P: DispatchProvider> RequestDispatcher<P> {
    /// `repaint` wakes the UI when a result lands; `None` for headless use.
    pub fn new(provider: P, repaint: Option<Context>) -> Result<Self, AnalysisError> {
        let (tx, rx) = mpsc::channel();

        #[cfg(not(target_arch = "wasm32"))]
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("analysis-worker")
            .enable_all()
            .build()
            .map_err(|e| AnalysisError::Runtime(format!("tokio runtime: {}", e)))?;

        Ok(Self {
            provider: Arc::new(provider),
            tx,
            rx,
            repaint,
            #[cfg(not(target_arch = "wasm32"))]
            runtime,
        })
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// NATIVE: runs on the dispatcher's tokio runtime.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn dispatch(&self, request_id: u64, ticker: Ticker) {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();
        self.runtime.spawn(async move {
            let completion = run_request(provider.as_ref(), request_id, ticker).await;
            deliver(&tx, repaint.as_ref(), completion);
        });
    }

    /// WASM: runs on the browser event loop.
    #[cfg(target_arch = "wasm32")]
    pub fn dispatch(&self, request_id: u64, ticker: Ticker) {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let completion = run_request(provider.as_ref(), request_id, ticker).await;
            deliver(&tx, repaint.as_ref(), completion);
        });
    }

    /// Non-blocking; call once per frame.
    pub fn drain(&self) -> Vec<Completion> {
        self.rx.try_iter().collect()
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    pub(crate) fn wait_for(&self, timeout: std::time::Duration) -> Option<Completion> {
        self.rx.recv_timeout(timeout).ok()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::models::fixtures::sample;
    use std::time::Duration;

    /// Knows exactly one ticker.
    struct StubProvider;

    #[async_trait::async_trait]
    impl AnalysisProvider for StubProvider {
        async fn analyze(&self, ticker: &Ticker) -> Result<AnalysisResult, AnalysisError> {
            if ticker.as_str() == "AAPL" {
                Ok(sample())
            } else {
                Err(AnalysisError::Http {
                    ticker: ticker.to_string(),
                    status: 404,
                    status_text: "Not Found".to_string(),
                })
            }
        }
    }

    fn ticker(s: &str) -> Ticker {
        Ticker::parse(s).unwrap()
    }

    #[test]
    fn completion_carries_request_id_and_payload() {
        let dispatcher = RequestDispatcher::new(StubProvider, None).unwrap();
        dispatcher.dispatch(7, ticker("aapl"));

        let completion = dispatcher.wait_for(Duration::from_secs(5)).unwrap();
        assert_eq!(completion.request_id, 7);
        assert_eq!(completion.ticker.as_str(), "AAPL");
        assert_eq!(completion.outcome.unwrap().ticker, "AAPL");
    }

    #[test]
    fn failures_are_delivered_not_dropped() {
        let dispatcher = RequestDispatcher::new(StubProvider, None).unwrap();
        dispatcher.dispatch(1, ticker("ZZZZ"));

        let completion = dispatcher.wait_for(Duration::from_secs(5)).unwrap();
        let err = completion.outcome.unwrap_err();
        assert_eq!(err.to_string(), "Failed to analyze ZZZZ: Not Found");
    }

    #[test]
    fn drain_is_empty_without_requests() {
        let dispatcher = RequestDispatcher::new(StubProvider, None).unwrap();
        assert!(dispatcher.drain().is_empty());
    }
}
