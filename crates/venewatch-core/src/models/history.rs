use serde::{Deserialize, Serialize};

use crate::models::record::MeasurementRecord;

/// Append-only ordered collection of measurement records.
///
/// Insertion order is entry order. Records are never edited or removed; the
/// history lives for one session and is discarded at exit. Validation of
/// record contents happens upstream in the entry form, so `append` has no
/// error path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeasurementHistory {
    records: Vec<MeasurementRecord>,
}

impl MeasurementHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: MeasurementRecord) {
        self.records.push(record);
    }

    /// The full history in insertion order.
    pub fn all(&self) -> &[MeasurementRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
