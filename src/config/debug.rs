//! Debugging feature flags.

pub struct LogFlags {
    /// Emit a line whenever the ticker track is measured and refilled.
    pub log_ticker_fills: bool,

    /// Emit theme changes.
    pub log_theme_changes: bool,

    /// Log hidden-section gesture progress (counter bumps and resets).
    pub log_gesture: bool,

    /// Activate trace_time macro (for scope-level timing)
    pub log_performance: bool,
}

pub const DF: LogFlags = LogFlags {
    log_ticker_fills: true,

    log_theme_changes: false,
    log_gesture: false,
    log_performance: false,
};
