use std::fmt;

use serde::{Deserialize, Serialize};

use venewatch_core::models::ValueRange;

/// One out-of-range finding: a parameter whose recorded value fell outside
/// its clinical reference range in a given record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Anomaly {
    pub parameter_id: String,
    pub label: String,
    pub value: f64,
    pub reference: ValueRange,
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} outside reference range [{}, {}]",
            self.label, self.value, self.reference.min, self.reference.max
        )
    }
}
