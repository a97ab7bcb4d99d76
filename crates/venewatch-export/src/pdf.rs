use std::io::BufWriter;

use printpdf::*;

use crate::error::ExportError;
use crate::model::ReportModel;

const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const TOP_Y: f32 = 280.0;
const BOTTOM_Y: f32 = 20.0;

/// Writes text top-to-bottom, starting a fresh page when the cursor reaches
/// the bottom margin.
struct Cursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: Mm,
}

impl<'a> Cursor<'a> {
    fn new(doc: &'a PdfDocumentReference, layer: PdfLayerReference) -> Self {
        Self {
            doc,
            layer,
            y: Mm(TOP_Y),
        }
    }

    fn line(&mut self, text: &str, size: f32, x: f32, font: &IndirectFontRef) {
        if self.y < Mm(BOTTOM_Y) {
            let (page, layer) = self.doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = Mm(TOP_Y);
        }
        self.layer.use_text(text, size, Mm(x), self.y, font);
    }

    fn advance(&mut self, dy: f32) {
        self.y -= Mm(dy);
    }
}

/// Generate the PDF report. Sequential layout: title and generation stamp,
/// one block per record with one sub-line per parameter field, then the
/// aggregate summary.
pub fn generate_pdf(model: &ReportModel) -> Result<Vec<u8>, ExportError> {
    tracing::debug!(rows = model.rows.len(), "generating PDF report");

    let (doc, page1, layer1) = PdfDocument::new(&model.title, Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
    let layer = doc.get_page(page1).get_layer(layer1);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(format!("font error: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(format!("font error: {e}")))?;

    let mut cursor = Cursor::new(&doc, layer);

    cursor.line(&model.title, 14.0, 20.0, &bold);
    cursor.advance(6.0);
    cursor.line(&format!("Généré le {}", model.generated_at), 9.0, 20.0, &font);
    cursor.advance(10.0);

    for row in &model.rows {
        let heading = format!("Jour {} — saisi le {}", row.day, row.recorded_at);
        cursor.line(&heading, 11.0, 20.0, &bold);
        cursor.advance(6.0);

        for field in &row.fields {
            let marker = if field.anomalous { "  [HORS NORME]" } else { "" };
            let text = format!("{}: {} {}{}", field.label, field.value, field.unit, marker);
            for line in wrap_text(&text, 90) {
                cursor.line(&line, 9.0, 25.0, &font);
                cursor.advance(4.5);
            }
        }
        cursor.advance(4.0);
    }

    cursor.advance(4.0);
    let footer = if model.critical {
        format!(
            "Paramètres critiques détectés : {}. Veuillez consulter un médecin.",
            model.summary.join(", ")
        )
    } else {
        "Aucune anomalie critique détectée.".to_string()
    };
    for line in wrap_text(&footer, 90) {
        cursor.line(&line, 10.0, 20.0, &bold);
        cursor.advance(5.0);
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ExportError::Pdf(format!("save error: {e}")))?;
    buf.into_inner()
        .map_err(|e| ExportError::Pdf(format!("buffer error: {e}")))
}

/// Greedy word wrap on character count.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
