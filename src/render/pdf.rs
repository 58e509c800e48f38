use printpdf::{BuiltinFont, Mm, PdfDocument};

use super::layout::{LineStyle, PageLayout, LETTER_WIDTH_PT};
use super::RenderContext;
use crate::error::{Result, TrialError};
use crate::model::TrialRecord;

const LEFT_MARGIN_PT: f32 = 40.0;
const TITLE_FONT_SIZE: f32 = 14.0;
const ENTRY_FONT_SIZE: f32 = 12.0;
const LAYER_NAME: &str = "Layer 1";

pub fn document_title(ctx: &RenderContext) -> String {
    format!("Ensayos clínicos - {} / {}", ctx.molecule, ctx.pathology)
}

pub fn entry_lines(records: &[TrialRecord]) -> Vec<String> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{}. {} (ID: {})", i + 1, r.title, r.id))
        .collect()
}

pub fn render(records: &[TrialRecord], ctx: &RenderContext) -> Result<Vec<u8>> {
    render_with_layout(records, ctx, &PageLayout::default())
}

/// Lay the listing out with `layout` and encode one PDF page per layout page.
pub fn render_with_layout(
    records: &[TrialRecord],
    ctx: &RenderContext,
    layout: &PageLayout,
) -> Result<Vec<u8>> {
    let title = document_title(ctx);
    let pages = layout.paginate(&title, &entry_lines(records));

    let width = pt_to_mm(LETTER_WIDTH_PT);
    let height = pt_to_mm(layout.page_height);
    let (doc, first_page, first_layer) = PdfDocument::new(title.as_str(), width, height, LAYER_NAME);
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_error)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_error)?;

    let mut targets = vec![(first_page, first_layer)];
    for _ in 1..pages.len() {
        targets.push(doc.add_page(width, height, LAYER_NAME));
    }

    for (page, (page_idx, layer_idx)) in pages.iter().zip(targets) {
        let layer = doc.get_page(page_idx).get_layer(layer_idx);
        for line in &page.lines {
            let (font, size) = match line.style {
                LineStyle::Title => (&bold, TITLE_FONT_SIZE),
                LineStyle::Entry => (&regular, ENTRY_FONT_SIZE),
            };
            layer.use_text(
                line.text.as_str(),
                size,
                pt_to_mm(LEFT_MARGIN_PT),
                pt_to_mm(line.y),
                font,
            );
        }
    }

    doc.save_to_bytes().map_err(pdf_error)
}

fn pt_to_mm(pt: f32) -> Mm {
    Mm(pt * 25.4 / 72.0)
}

fn pdf_error(e: impl std::fmt::Debug) -> TrialError {
    TrialError::Render {
        format: "pdf",
        message: format!("{:?}", e),
    }
}
