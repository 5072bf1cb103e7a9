//! Debugging feature flags.

pub struct LogFlags {
    /// Request dispatch, completion and timing
    pub log_requests: bool,

    /// Every Empty/Loading/Ready transition of the view session
    pub log_state_transitions: bool,

    /// Series lengths and date ranges when a chart is built
    pub log_chart: bool,
}

pub const DF: LogFlags = LogFlags {
    log_requests: true,
    log_state_transitions: false,
    log_chart: false,
};
