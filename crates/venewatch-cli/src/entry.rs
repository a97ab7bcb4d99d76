use clap::Args;
use thiserror::Error;

use venewatch_core::models::{
    parameter, MeasurementRecord, Reading, ValueRange, DAY_MAX, DAY_MIN,
};

/// One day's entry form: the day label plus one value per panel parameter.
/// All fields are required — the store only ever sees fully-populated,
/// validated records.
#[derive(Debug, Clone, Args)]
pub struct EntryForm {
    /// Jour d'observation (1-30)
    #[arg(long)]
    pub day: u8,

    /// Température (°C)
    #[arg(long)]
    pub temperature: f64,

    /// Tension artérielle systolique (mmHg)
    #[arg(long)]
    pub systolic: f64,

    /// Tension artérielle diastolique (mmHg)
    #[arg(long)]
    pub diastolic: f64,

    /// Potassium (mmol/L)
    #[arg(long)]
    pub potassium: f64,

    /// Calcium (mmol/L)
    #[arg(long)]
    pub calcium: f64,

    /// Phosphore (mmol/L)
    #[arg(long)]
    pub phosphorus: f64,

    /// Créatinine (µmol/L)
    #[arg(long)]
    pub creatinine: f64,

    /// Diurèse (mL/24h)
    #[arg(long = "urine-output")]
    pub urine_output: f64,
}

/// A field rejected by the input-validity bounds.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct EntryError {
    pub field: String,
    pub value: f64,
    pub allowed: ValueRange,
    pub message: String,
}

impl EntryForm {
    fn values(&self) -> [(&'static str, f64); 8] {
        [
            ("temperature", self.temperature),
            ("systolic", self.systolic),
            ("diastolic", self.diastolic),
            ("potassium", self.potassium),
            ("calcium", self.calcium),
            ("phosphorus", self.phosphorus),
            ("creatinine", self.creatinine),
            ("urine_output", self.urine_output),
        ]
    }

    /// Check every field against its input-validity range. These bounds are
    /// wider than the clinical reference ranges; out-of-reference values are
    /// legitimate entries, out-of-validity values are typos.
    pub fn validate(&self) -> Vec<EntryError> {
        let mut errors = Vec::new();

        if self.day < DAY_MIN || self.day > DAY_MAX {
            errors.push(EntryError {
                field: "day".to_string(),
                value: f64::from(self.day),
                allowed: ValueRange::new(f64::from(DAY_MIN), f64::from(DAY_MAX)),
                message: format!(
                    "Jour {} hors bornes de saisie [{DAY_MIN}, {DAY_MAX}]",
                    self.day
                ),
            });
        }

        for (id, value) in self.values() {
            // The ids here are the panel's own; lookup cannot fail.
            let Some(def) = parameter(id) else { continue };
            if !def.entry_range.contains(value) {
                errors.push(EntryError {
                    field: id.to_string(),
                    value,
                    allowed: def.entry_range,
                    message: format!(
                        "{}: {} hors bornes de saisie [{}, {}]",
                        def.label, value, def.entry_range.min, def.entry_range.max
                    ),
                });
            }
        }

        errors
    }

    /// Build the record. Call only after `validate` returned no errors.
    pub fn to_record(&self) -> MeasurementRecord {
        let readings = self
            .values()
            .iter()
            .map(|(id, value)| Reading {
                parameter_id: (*id).to_string(),
                value: *value,
            })
            .collect();
        MeasurementRecord::new(self.day, readings)
    }
}
