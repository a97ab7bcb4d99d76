use venewatch_core::models::MeasurementHistory;

/// Artifacts from the last report generation. Kept so a failed email send
/// can be retried without regenerating the document; invalidated when a new
/// record is appended.
pub struct CachedReport {
    pub pdf: Vec<u8>,
    pub body: String,
}

/// One user's in-memory session. Exclusively owned by the command loop,
/// discarded at exit.
#[derive(Default)]
pub struct SessionState {
    pub history: MeasurementHistory,
    pub last_report: Option<CachedReport>,
}
