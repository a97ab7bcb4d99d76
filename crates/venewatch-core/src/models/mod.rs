pub mod history;
pub mod parameter;
pub mod record;

pub use history::MeasurementHistory;
pub use parameter::{parameter, ParameterDef, ValueRange, DAY_MAX, DAY_MIN, PARAMETERS};
pub use record::{MeasurementRecord, Reading};
