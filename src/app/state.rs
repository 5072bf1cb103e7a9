// src/app/state.rs

use std::mem;

use crate::data::Completion;
use crate::domain::Ticker;
use crate::models::{AnalysisResult, ChartPoint};

#[cfg(debug_assertions)]
use crate::config::DF;

/// A rendered analysis: payload plus the chart series built for it.
#[derive(Debug, Clone)]
pub(crate) struct AnalysisView {
    pub(crate) result: AnalysisResult,
    pub(crate) series: Vec<ChartPoint>,
}

#[derive(Debug)]
pub(crate) struct PendingRequest {
    pub(crate) request_id: u64,
    pub(crate) ticker: Ticker,
    // Restored if the request fails
    previous: Option<Box<AnalysisView>>,
}

#[derive(Debug, Default)]
pub(crate) enum ViewState {
    #[default]
    Empty,
    Loading(PendingRequest),
    Ready(Box<AnalysisView>),
}

/// Which of the three mutually exclusive layouts to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenderPhase {
    Empty,
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CompletionStatus {
    Applied,
    Stale,
}

/// Request/response state for one page view. The error banner is independent
/// of the view so a failure can show alongside the previous Empty/Ready layout.
#[derive(Debug)]
pub(crate) struct Session {
    state: ViewState,
    error: Option<String>,
    next_request_id: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            state: ViewState::Empty,
            error: None,
            next_request_id: 1,
        }
    }
}

impl Session {
    pub(crate) fn phase(&self) -> RenderPhase {
        match self.state {
            ViewState::Empty => RenderPhase::Empty,
            ViewState::Loading(_) => RenderPhase::Loading,
            ViewState::Ready(_) => RenderPhase::Ready,
        }
    }

    pub(crate) fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading(_))
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Only set while Ready.
    pub(crate) fn view(&self) -> Option<&AnalysisView> {
        match &self.state {
            ViewState::Ready(view) => Some(view),
            _ => None,
        }
    }

    pub(crate) fn pending_ticker(&self) -> Option<&Ticker> {
        match &self.state {
            ViewState::Loading(pending) => Some(&pending.ticker),
            _ => None,
        }
    }

    /// Start a request. Returns the id to dispatch with, or `None` while a
    /// request is already in flight (overlapping submissions are refused).
    pub(crate) fn submit(&mut self, ticker: Ticker) -> Option<u64> {
        if self.is_loading() {
            log::warn!("Ignoring submit for {}: a request is already in flight", ticker);
            return None;
        }

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.error = None;

        let previous = match mem::take(&mut self.state) {
            ViewState::Ready(view) => Some(view),
            _ => None,
        };

        #[cfg(debug_assertions)]
        if DF.log_state_transitions {
            log::info!(
                "Session: {} -> Loading (request #{} for {})",
                if previous.is_some() { "Ready" } else { "Empty" },
                request_id,
                ticker
            );
        }

        self.state = ViewState::Loading(PendingRequest {
            request_id,
            ticker,
            previous,
        });
        Some(request_id)
    }

    /// Apply a finished request. Completions whose id is not the pending one
    /// are discarded so a late response can never overwrite newer state.
    pub(crate) fn complete<F>(&mut self, completion: Completion, build_series: F) -> CompletionStatus
    where
        F: FnOnce(&AnalysisResult) -> Vec<ChartPoint>,
    {
        let is_current = matches!(
            &self.state,
            ViewState::Loading(pending) if pending.request_id == completion.request_id
        );
        if !is_current {
            log::warn!(
                "Discarding stale result #{} for {}",
                completion.request_id,
                completion.ticker
            );
            return CompletionStatus::Stale;
        }

        let ViewState::Loading(pending) = mem::take(&mut self.state) else {
            return CompletionStatus::Stale;
        };

        self.state = match completion.outcome {
            Ok(result) => {
                let series = build_series(&result);
                ViewState::Ready(Box::new(AnalysisView { result, series }))
            }
            Err(err) => {
                log::error!("Analysis error: {}", err);
                self.error = Some(err.to_string());
                match pending.previous {
                    Some(view) => ViewState::Ready(view),
                    None => ViewState::Empty,
                }
            }
        };

        #[cfg(debug_assertions)]
        if DF.log_state_transitions {
            log::info!("Session: Loading -> {:?}", self.phase());
        }

        CompletionStatus::Applied
    }
}
