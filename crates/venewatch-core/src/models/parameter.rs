use serde::{Deserialize, Serialize};

/// Inclusive numeric interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Both bounds count as inside.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One monitored clinical parameter.
///
/// `entry_range` is the input-validity interval enforced by the entry form;
/// it is deliberately wider than `reference_range`, the clinical interval
/// outside of which a value is flagged as an anomaly.
#[derive(Debug, Clone, Copy)]
pub struct ParameterDef {
    pub id: &'static str,
    /// Display name as it appears on the clinic's paper forms.
    pub label: &'static str,
    pub unit: &'static str,
    pub entry_range: ValueRange,
    pub reference_range: ValueRange,
}

/// Valid bounds for the day label on a record.
pub const DAY_MIN: u8 = 1;
pub const DAY_MAX: u8 = 30;

/// The surveillance panel, in display order. Evaluation and report output
/// follow this order, not the order readings were entered in.
pub const PARAMETERS: &[ParameterDef] = &[
    ParameterDef {
        id: "temperature",
        label: "Température (°C)",
        unit: "°C",
        entry_range: ValueRange::new(30.0, 42.0),
        reference_range: ValueRange::new(36.0, 38.0),
    },
    ParameterDef {
        id: "systolic",
        label: "Tension artérielle systolique",
        unit: "mmHg",
        entry_range: ValueRange::new(50.0, 200.0),
        reference_range: ValueRange::new(90.0, 140.0),
    },
    ParameterDef {
        id: "diastolic",
        label: "Tension artérielle diastolique",
        unit: "mmHg",
        entry_range: ValueRange::new(30.0, 130.0),
        reference_range: ValueRange::new(60.0, 90.0),
    },
    ParameterDef {
        id: "potassium",
        label: "Potassium (K+)",
        unit: "mmol/L",
        entry_range: ValueRange::new(1.0, 10.0),
        reference_range: ValueRange::new(3.5, 5.0),
    },
    ParameterDef {
        id: "calcium",
        label: "Calcium (Ca++)",
        unit: "mmol/L",
        entry_range: ValueRange::new(0.5, 5.0),
        reference_range: ValueRange::new(2.2, 2.6),
    },
    ParameterDef {
        id: "phosphorus",
        label: "Phosphore (P)",
        unit: "mmol/L",
        entry_range: ValueRange::new(0.5, 5.0),
        reference_range: ValueRange::new(0.8, 1.5),
    },
    ParameterDef {
        id: "creatinine",
        label: "Créatinine",
        unit: "µmol/L",
        entry_range: ValueRange::new(10.0, 1000.0),
        reference_range: ValueRange::new(50.0, 110.0),
    },
    ParameterDef {
        id: "urine_output",
        label: "Diurèse",
        unit: "mL/24h",
        entry_range: ValueRange::new(0.0, 5000.0),
        reference_range: ValueRange::new(800.0, 2000.0),
    },
];

/// Look up a parameter by ID.
pub fn parameter(id: &str) -> Option<&'static ParameterDef> {
    PARAMETERS.iter().find(|p| p.id == id)
}
