use tera::{Context, Tera};

use crate::error::ExportError;
use crate::model::ReportModel;

/// Plain-text report template (Jinja2 syntax). One block per record, one
/// sub-line per parameter field, summary footer with the aggregate alert.
const REPORT_TEMPLATE: &str = "\
{{ title }}
Généré le {{ generated_at }}

{% for row in rows %}Jour {{ row.day }} — saisi le {{ row.recorded_at }}
{% for field in row.fields %}  {{ field.label }}: {{ field.value }} {{ field.unit }}{% if field.anomalous %}  [HORS NORME]{% endif %}
{% endfor %}{% if row.anomalies %}  Anomalies: {{ row.anomalies | join(sep=\", \") }}
{% endif %}
{% endfor %}{% if critical %}Paramètres critiques détectés : {{ summary | join(sep=\", \") }}. Veuillez consulter un médecin.
{% else %}Aucune anomalie critique détectée.
{% endif %}";

/// Render the report model to plain text. Used for the console view and as
/// the email body accompanying the PDF.
pub fn render_report(model: &ReportModel) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template("report.txt", REPORT_TEMPLATE)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    // Convert the model to a Tera context via serde_json
    let value = serde_json::to_value(model)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render("report.txt", &context)?;
    Ok(rendered)
}
