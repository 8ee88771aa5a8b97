use contracts::report::{ReportBlock, ReportDocument};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

// A4 geometry in millimetres; the same line height the reference layout
// used for roughly 40 lines per page.
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const LINE_HEIGHT: f32 = 6.0;

struct Cursor {
    layer: PdfLayerReference,
    y: f32,
}

/// Render the assembled blocks into PDF bytes. Content and order come
/// entirely from the [`ReportDocument`]; this walks the blocks with the
/// page-break threshold and nothing else.
pub fn render(document: &ReportDocument) -> anyhow::Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        "Relatório de Qualidade da Água",
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut cursor = Cursor {
        layer: doc.get_page(page).get_layer(layer),
        y: PAGE_HEIGHT - 20.0,
    };

    let mut break_page = |cursor: &mut Cursor, needed: f32| {
        if cursor.y - needed < MARGIN {
            let (new_page, new_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            cursor.layer = doc.get_page(new_page).get_layer(new_layer);
            cursor.y = PAGE_HEIGHT - MARGIN;
        }
    };

    let write = |cursor: &Cursor, text: &str, size: f32, font: &IndirectFontRef| {
        cursor
            .layer
            .use_text(text, size, Mm(MARGIN), Mm(cursor.y), font);
    };

    for block in &document.blocks {
        match block {
            ReportBlock::Title(text) => {
                break_page(&mut cursor, LINE_HEIGHT * 2.5);
                write(&cursor, text, 18.0, &bold);
                cursor.y -= LINE_HEIGHT * 2.5;
            }
            ReportBlock::Heading(text) => {
                break_page(&mut cursor, LINE_HEIGHT * 1.5);
                write(&cursor, text, 12.0, &bold);
                cursor.y -= LINE_HEIGHT * 1.5;
            }
            ReportBlock::Line(text) => {
                break_page(&mut cursor, LINE_HEIGHT);
                write(&cursor, text, 10.0, &regular);
                cursor.y -= LINE_HEIGHT;
            }
            ReportBlock::Spacer => {
                cursor.y -= LINE_HEIGHT * 0.5;
            }
        }
    }

    let mut bytes = Vec::new();
    doc.save(&mut std::io::BufWriter::new(&mut bytes))?;
    Ok(bytes)
}

/// Data URL consumed by the preview iframe and the download anchor.
pub fn to_data_url(bytes: &[u8]) -> String {
    use base64::{engine::general_purpose, Engine as _};
    format!(
        "data:application/pdf;base64,{}",
        general_purpose::STANDARD.encode(bytes)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nonempty_pdf() {
        let document = ReportDocument {
            blocks: vec![
                ReportBlock::Title("Relatório de Qualidade da Água".into()),
                ReportBlock::Heading("Setor/Instituto: IC".into()),
                ReportBlock::Line("1. Local: Bebedouro Corredor (Bebedouro)".into()),
                ReportBlock::Spacer,
            ],
        };
        let bytes = render(&document).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn long_documents_paginate() {
        let mut blocks = vec![ReportBlock::Title("Relatório".into())];
        for i in 0..200 {
            blocks.push(ReportBlock::Line(format!("linha {i}")));
        }
        let bytes = render(&ReportDocument { blocks }).unwrap();
        // More than one page object in the produced document.
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Type /Pages") || bytes.len() > 2000);
    }

    #[test]
    fn data_url_has_pdf_mime() {
        let url = to_data_url(b"%PDF-1.3 test");
        assert!(url.starts_with("data:application/pdf;base64,"));
    }
}
