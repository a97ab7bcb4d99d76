use venewatch_core::models::{MeasurementHistory, MeasurementRecord, Reading, PARAMETERS};
use venewatch_export::pdf::generate_pdf;
use venewatch_export::render::render_report;
use venewatch_export::{ExportError, ReportModel};

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

fn sample_history() -> MeasurementHistory {
    let mut history = MeasurementHistory::new();
    history.append(record(
        1,
        &[("temperature", 39.0), ("potassium", 4.2), ("creatinine", 80.0)],
    ));
    history.append(record(
        2,
        &[("temperature", 37.0), ("potassium", 4.0), ("creatinine", 95.0)],
    ));
    history
}

#[test]
fn empty_history_aborts_before_producing_anything() {
    let history = MeasurementHistory::new();
    let err = ReportModel::from_history(&history, PARAMETERS).unwrap_err();
    assert!(matches!(err, ExportError::EmptyHistory));
}

#[test]
fn model_derives_anomalies_per_row_and_in_summary() {
    let model = ReportModel::from_history(&sample_history(), PARAMETERS).unwrap();

    assert_eq!(model.rows.len(), 2);
    assert_eq!(model.rows[0].day, 1);
    assert_eq!(model.rows[0].anomalies, vec!["Température (°C)".to_string()]);
    assert!(model.rows[1].anomalies.is_empty());

    assert!(model.critical);
    assert_eq!(model.summary, vec!["Température (°C)".to_string()]);
}

#[test]
fn model_skips_fields_with_no_reading() {
    let mut history = MeasurementHistory::new();
    history.append(record(1, &[("potassium", 4.0)]));

    let model = ReportModel::from_history(&history, PARAMETERS).unwrap();
    assert_eq!(model.rows[0].fields.len(), 1);
    assert_eq!(model.rows[0].fields[0].label, "Potassium (K+)");
}

#[test]
fn rendered_text_has_one_block_per_record() {
    let model = ReportModel::from_history(&sample_history(), PARAMETERS).unwrap();
    let text = render_report(&model).unwrap();

    assert!(text.contains("Surveillance des Effets Secondaires du Venetoclax"));
    assert!(text.contains("Jour 1"));
    assert!(text.contains("Jour 2"));
    assert!(text.contains("Température (°C): 39"));
    assert!(text.contains("[HORS NORME]"));
    assert!(text.contains("Paramètres critiques détectés : Température (°C)"));
}

#[test]
fn nominal_history_renders_the_all_clear_footer() {
    let mut history = MeasurementHistory::new();
    history.append(record(1, &[("temperature", 37.0)]));

    let model = ReportModel::from_history(&history, PARAMETERS).unwrap();
    assert!(!model.critical);

    let text = render_report(&model).unwrap();
    assert!(text.contains("Aucune anomalie critique détectée."));
    assert!(!text.contains("[HORS NORME]"));
}

#[test]
fn pdf_bytes_are_a_pdf_document() {
    let model = ReportModel::from_history(&sample_history(), PARAMETERS).unwrap();
    let bytes = generate_pdf(&model).unwrap();

    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 500);
}

#[test]
fn long_histories_paginate_without_panicking() {
    let mut history = MeasurementHistory::new();
    for day in 1..=30u8 {
        history.append(record(
            day,
            &[
                ("temperature", 37.0),
                ("systolic", 120.0),
                ("diastolic", 75.0),
                ("potassium", 4.2),
                ("calcium", 2.4),
                ("phosphorus", 1.1),
                ("creatinine", 80.0),
                ("urine_output", 1500.0),
            ],
        ));
    }

    let model = ReportModel::from_history(&history, PARAMETERS).unwrap();
    let bytes = generate_pdf(&model).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}
