use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single entered value for one parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    pub parameter_id: String,
    pub value: f64,
}

/// One day's full set of parameter values.
///
/// `day` is a label (1–30 at entry time), not a key: duplicate and
/// out-of-order day labels are accepted and kept as distinct records, since
/// the system does not model calendar semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementRecord {
    pub id: Uuid,
    pub day: u8,
    pub readings: Vec<Reading>,
    pub recorded_at: jiff::Timestamp,
}

impl MeasurementRecord {
    pub fn new(day: u8, readings: Vec<Reading>) -> Self {
        Self {
            id: Uuid::new_v4(),
            day,
            readings,
            recorded_at: jiff::Timestamp::now(),
        }
    }

    /// The entered value for a parameter, if one was recorded.
    pub fn reading(&self, parameter_id: &str) -> Option<f64> {
        self.readings
            .iter()
            .find(|r| r.parameter_id == parameter_id)
            .map(|r| r.value)
    }
}
