use venewatch_analysis::{evaluate_history, summarize};
use venewatch_core::models::{MeasurementHistory, MeasurementRecord, Reading, PARAMETERS};

fn record(day: u8, readings: &[(&str, f64)]) -> MeasurementRecord {
    MeasurementRecord::new(
        day,
        readings
            .iter()
            .map(|(id, value)| Reading {
                parameter_id: id.to_string(),
                value: *value,
            })
            .collect(),
    )
}

#[test]
fn repeated_anomaly_appears_once() {
    // Fever on days 1 and 3, nominal on day 2.
    let mut history = MeasurementHistory::new();
    history.append(record(1, &[("temperature", 39.0)]));
    history.append(record(2, &[("temperature", 37.0)]));
    history.append(record(3, &[("temperature", 38.7)]));

    let lists = evaluate_history(&history, PARAMETERS);
    assert_eq!(lists.len(), 3);
    assert_eq!(lists[0].len(), 1);
    assert!(lists[1].is_empty());
    assert_eq!(lists[2].len(), 1);

    let summary = summarize(&lists, PARAMETERS);
    assert_eq!(summary, vec!["Température (°C)".to_string()]);
}

#[test]
fn summary_follows_table_order_regardless_of_when_anomalies_occurred() {
    // Creatinine anomaly first in time, temperature anomaly later; the
    // summary still lists temperature first because the table does.
    let mut history = MeasurementHistory::new();
    history.append(record(1, &[("creatinine", 400.0)]));
    history.append(record(2, &[("temperature", 39.0)]));

    let lists = evaluate_history(&history, PARAMETERS);
    let summary = summarize(&lists, PARAMETERS);
    assert_eq!(
        summary,
        vec![
            "Température (°C)".to_string(),
            "Créatinine".to_string(),
        ]
    );
}

#[test]
fn nominal_history_yields_empty_summary() {
    let mut history = MeasurementHistory::new();
    history.append(record(1, &[("temperature", 36.9)]));
    history.append(record(2, &[("potassium", 4.0)]));

    let lists = evaluate_history(&history, PARAMETERS);
    assert!(summarize(&lists, PARAMETERS).is_empty());
}

#[test]
fn empty_history_evaluates_to_nothing() {
    let history = MeasurementHistory::new();
    let lists = evaluate_history(&history, PARAMETERS);
    assert!(lists.is_empty());
    assert!(summarize(&lists, PARAMETERS).is_empty());
}
