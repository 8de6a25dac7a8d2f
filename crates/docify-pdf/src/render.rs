//! PDF rendering of laid out pages

use crate::error::ExportError;
use crate::layout::Page;
use crate::style::{PageGeometry, Rgb, Weight};
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Pt, Rect,
};
use std::io::Write;

const RULE_THICKNESS: f32 = 0.5;

/// Write `pages` as a PDF document to `writer`
pub fn render_pdf<W: Write>(
    pages: &[Page],
    geometry: &PageGeometry,
    title: &str,
    writer: W,
) -> Result<(), ExportError> {
    let width: Mm = Pt(geometry.width).into();
    let height: Mm = Pt(geometry.height).into();

    let (doc, first_page, first_layer) = PdfDocument::new(title, width, height, "Page 1");
    let regular = doc
        .add_builtin_font(BuiltinFont::Courier)
        .map_err(|e| ExportError::Render(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::CourierBold)
        .map_err(|e| ExportError::Render(e.to_string()))?;
    let fonts = Fonts { regular, bold };

    for (index, page) in pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_ref, layer_ref) =
                doc.add_page(width, height, format!("Page {}", index + 1));
            doc.get_page(page_ref).get_layer(layer_ref)
        };
        draw_page(&layer, page, geometry, &fonts);
    }

    let mut writer = std::io::BufWriter::new(writer);
    doc.save(&mut writer)
        .map_err(|e| ExportError::Render(e.to_string()))?;
    writer.flush()?;
    Ok(())
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

fn draw_page(layer: &PdfLayerReference, page: &Page, geometry: &PageGeometry, fonts: &Fonts) {
    // Layout coordinates grow downwards from the top edge
    let flip = |y: f32| -> Mm { Pt(geometry.height - y).into() };
    let x = |x: f32| -> Mm { Pt(x).into() };

    for shade in &page.shades {
        layer.set_fill_color(pdf_color(shade.color));
        let rect = Rect::new(
            x(shade.x),
            flip(shade.bottom()),
            x(shade.x + shade.width),
            flip(shade.top),
        )
        .with_mode(PaintMode::Fill);
        layer.add_rect(rect);
    }

    for rule in &page.rules {
        layer.set_outline_color(pdf_color(rule.color));
        layer.set_outline_thickness(RULE_THICKNESS);
        layer.add_line(Line {
            points: vec![
                (Point::new(x(rule.x1), flip(rule.y)), false),
                (Point::new(x(rule.x2), flip(rule.y)), false),
            ],
            is_closed: false,
        });
    }

    for run in &page.texts {
        if run.text.is_empty() {
            continue;
        }
        let font = match run.style.weight {
            Weight::Regular => &fonts.regular,
            Weight::Bold => &fonts.bold,
        };
        layer.set_fill_color(pdf_color(run.style.color));
        layer.use_text(
            run.text.as_str(),
            geometry.font_size,
            x(run.x),
            flip(run.y),
            font,
        );
    }
}

fn pdf_color(color: Rgb) -> Color {
    let (r, g, b) = color.to_unit();
    Color::Rgb(printpdf::Rgb::new(r, g, b, None))
}
