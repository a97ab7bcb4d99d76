//! venewatch-export
//!
//! Report generation from a measurement history: a renderable report model,
//! plain-text rendering via Tera, and PDF generation via printpdf.

pub mod error;
pub mod model;
pub mod pdf;
pub mod render;

pub use error::ExportError;
pub use model::ReportModel;
