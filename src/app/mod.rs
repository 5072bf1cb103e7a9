mod root;
mod state;

pub(crate) use state::{CompletionStatus, RenderPhase, Session};

pub use root::App;
