mod dispatch;
mod error;
mod provider;

pub use {
    dispatch::{Completion, DispatchProvider, RequestDispatcher},
    error::AnalysisError,
    provider::{AnalysisProvider, BackendClient},
};
