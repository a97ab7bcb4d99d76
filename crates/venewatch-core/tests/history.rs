use venewatch_core::models::{MeasurementHistory, MeasurementRecord, Reading};

fn record(day: u8, temperature: f64) -> MeasurementRecord {
    MeasurementRecord::new(
        day,
        vec![Reading {
            parameter_id: "temperature".to_string(),
            value: temperature,
        }],
    )
}

#[test]
fn starts_empty() {
    let history = MeasurementHistory::new();
    assert!(history.is_empty());
    assert_eq!(history.len(), 0);
    assert!(history.all().is_empty());
}

#[test]
fn append_grows_by_exactly_one() {
    let mut history = MeasurementHistory::new();
    for i in 1..=5u8 {
        history.append(record(i, 37.0));
        assert_eq!(history.len(), i as usize);
    }
}

#[test]
fn prior_entries_unchanged_after_later_appends() {
    let mut history = MeasurementHistory::new();
    history.append(record(1, 36.5));
    let first_id = history.all()[0].id;

    history.append(record(2, 39.0));
    history.append(record(3, 37.2));

    let all = history.all();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].id, first_id);
    assert_eq!(all[0].day, 1);
    assert_eq!(all[0].reading("temperature"), Some(36.5));
}

#[test]
fn insertion_order_is_preserved() {
    let mut history = MeasurementHistory::new();
    history.append(record(3, 37.0));
    history.append(record(1, 37.0));
    history.append(record(2, 37.0));

    let days: Vec<u8> = history.all().iter().map(|r| r.day).collect();
    assert_eq!(days, vec![3, 1, 2]);
}

#[test]
fn duplicate_day_labels_are_kept_as_distinct_records() {
    let mut history = MeasurementHistory::new();
    history.append(record(7, 36.8));
    history.append(record(7, 38.9));

    let all = history.all();
    assert_eq!(all.len(), 2);
    assert_ne!(all[0].id, all[1].id);
    assert_eq!(all[0].reading("temperature"), Some(36.8));
    assert_eq!(all[1].reading("temperature"), Some(38.9));
}
