//! venewatch-analysis
//!
//! Anomaly evaluation over measurement records: pure range classification
//! against the parameter table. No state is kept between calls; the whole
//! history is re-evaluated on every entry, which is fine at session scale
//! (≤30 practical records).

pub mod anomaly;

pub use anomaly::Anomaly;

use venewatch_core::models::{MeasurementHistory, MeasurementRecord, ParameterDef};

/// Classify one record against the parameter table.
///
/// Walks `defs` in table order, so the output order is deterministic and
/// independent of the order readings were entered in. Inclusive bounds count
/// as normal. Parameters with no reading in the record are skipped — a
/// partially populated record is not an error.
pub fn evaluate(record: &MeasurementRecord, defs: &[ParameterDef]) -> Vec<Anomaly> {
    let mut anomalies = Vec::new();
    for def in defs {
        if let Some(value) = record.reading(def.id)
            && !def.reference_range.contains(value)
        {
            anomalies.push(Anomaly {
                parameter_id: def.id.to_string(),
                label: def.label.to_string(),
                value,
                reference: def.reference_range,
            });
        }
    }
    anomalies
}

/// Classify every record in the history. The result is aligned by position
/// with `history.all()`.
pub fn evaluate_history(history: &MeasurementHistory, defs: &[ParameterDef]) -> Vec<Vec<Anomaly>> {
    history.all().iter().map(|r| evaluate(r, defs)).collect()
}

/// The distinct parameters that were anomalous in at least one record,
/// as display labels in table order. Duplicate findings across records
/// collapse to one entry; an empty result means the whole history is
/// nominal.
pub fn summarize(lists: &[Vec<Anomaly>], defs: &[ParameterDef]) -> Vec<String> {
    defs.iter()
        .filter(|def| {
            lists
                .iter()
                .any(|list| list.iter().any(|a| a.parameter_id == def.id))
        })
        .map(|def| def.label.to_string())
        .collect()
}
