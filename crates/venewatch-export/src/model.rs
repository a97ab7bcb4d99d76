use serde::Serialize;

use venewatch_analysis::{evaluate, summarize};
use venewatch_core::models::{MeasurementHistory, ParameterDef};

use crate::error::ExportError;

/// One rendered parameter value within a report row.
#[derive(Debug, Clone, Serialize)]
pub struct ReportField {
    pub label: String,
    pub unit: String,
    pub value: f64,
    pub anomalous: bool,
}

/// One report row per measurement record, in entry order.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub day: u8,
    pub recorded_at: String,
    pub fields: Vec<ReportField>,
    /// Labels of the parameters out of range in this record, table order.
    pub anomalies: Vec<String>,
}

/// Renderable projection of a full session history. Anomalies are derived
/// here, never stored with the records themselves.
#[derive(Debug, Clone, Serialize)]
pub struct ReportModel {
    pub title: String,
    pub generated_at: String,
    pub rows: Vec<ReportRow>,
    /// Distinct anomalous parameters across the whole history, table order.
    pub summary: Vec<String>,
    pub critical: bool,
}

impl ReportModel {
    /// Build the report projection. An empty history is a user error and
    /// aborts before any document is produced.
    pub fn from_history(
        history: &MeasurementHistory,
        defs: &[ParameterDef],
    ) -> Result<Self, ExportError> {
        if history.is_empty() {
            return Err(ExportError::EmptyHistory);
        }

        let mut rows = Vec::with_capacity(history.len());
        let mut lists = Vec::with_capacity(history.len());
        for record in history.all() {
            let anomalies = evaluate(record, defs);

            let fields = defs
                .iter()
                .filter_map(|def| {
                    record.reading(def.id).map(|value| ReportField {
                        label: def.label.to_string(),
                        unit: def.unit.to_string(),
                        value,
                        anomalous: anomalies.iter().any(|a| a.parameter_id == def.id),
                    })
                })
                .collect();

            rows.push(ReportRow {
                day: record.day,
                recorded_at: record.recorded_at.to_string(),
                fields,
                anomalies: anomalies.iter().map(|a| a.label.clone()).collect(),
            });
            lists.push(anomalies);
        }

        let summary = summarize(&lists, defs);
        let critical = !summary.is_empty();

        Ok(Self {
            title: "Surveillance des Effets Secondaires du Venetoclax".to_string(),
            generated_at: jiff::Timestamp::now().to_string(),
            rows,
            summary,
            critical,
        })
    }
}
