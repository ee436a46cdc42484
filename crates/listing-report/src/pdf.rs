//! PDF drawing of a computed [`ListingLayout`].

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Polygon,
    Rgb,
};

use crate::error::{ReportError, Result};
use crate::layout::{ListingLayout, PageGeometry, PageLayout, PlacedRow};

/// Description column; the others are centred.
const DESCRIPTION_COLUMN: usize = 1;

fn mm(pt: f32) -> Mm {
    Mm(pt * 25.4 / 72.0)
}

fn point(x: f32, y: f32) -> (Point, bool) {
    (Point::new(mm(x), mm(y)), false)
}

fn rect_points(x: f32, bottom: f32, width: f32, height: f32) -> Vec<(Point, bool)> {
    vec![
        point(x, bottom),
        point(x + width, bottom),
        point(x + width, bottom + height),
        point(x, bottom + height),
    ]
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

fn white() -> Color {
    Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None))
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Draw `layout` and save it to `path`.
pub fn write_pdf(layout: &ListingLayout, geometry: &PageGeometry, path: &Path) -> Result<()> {
    let pdf_error = |message: String| ReportError::Pdf {
        path: path.to_path_buf(),
        message,
    };
    let (doc, first_page, first_layer) = PdfDocument::new(
        layout.title.clone(),
        mm(geometry.width),
        mm(geometry.height),
        "Page 1",
    );
    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| pdf_error(format!("{e}")))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| pdf_error(format!("{e}")))?,
    };

    for (idx, page) in layout.pages.iter().enumerate() {
        let layer = if idx == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_idx, layer_idx) = doc.add_page(
                mm(geometry.width),
                mm(geometry.height),
                format!("Page {}", idx + 1),
            );
            doc.get_page(page_idx).get_layer(layer_idx)
        };
        draw_page(&layer, layout, page, geometry, &fonts);
    }

    let file = File::create(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| pdf_error(format!("{e}")))
}

fn draw_page(
    layer: &PdfLayerReference,
    layout: &ListingLayout,
    page: &PageLayout,
    geometry: &PageGeometry,
    fonts: &Fonts,
) {
    let title_width = geometry.text_width(&layout.title, geometry.title_font_size);
    let title_x = ((geometry.width - title_width) / 2.0).max(geometry.margin_left);
    layer.set_fill_color(black());
    layer.use_text(
        layout.title.clone(),
        geometry.title_font_size,
        mm(title_x),
        mm(geometry.title_baseline()),
        &fonts.bold,
    );

    layer.set_outline_color(black());
    layer.set_outline_thickness(0.25);
    for placed in &page.rows {
        draw_row(layer, layout, placed, geometry, fonts);
    }

    if let Some(footer) = &page.footer {
        layer.set_fill_color(black());
        layer.use_text(
            footer.text.clone(),
            geometry.body_font_size,
            mm(footer.x),
            mm(footer.baseline),
            &fonts.regular,
        );
    }
}

fn draw_row(
    layer: &PdfLayerReference,
    layout: &ListingLayout,
    placed: &PlacedRow,
    geometry: &PageGeometry,
    fonts: &Fonts,
) {
    let row = &placed.row;
    let bottom = placed.bottom();
    if row.is_header {
        layer.set_fill_color(black());
        layer.add_polygon(Polygon {
            rings: vec![rect_points(
                geometry.margin_left,
                bottom,
                geometry.content_width(),
                row.height,
            )],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
    }
    let (font, color) = if row.is_header {
        (&fonts.bold, white())
    } else {
        (&fonts.regular, black())
    };

    let mut x = geometry.margin_left;
    for (col, width) in layout.columns.iter().copied().enumerate() {
        layer.add_line(Line {
            points: rect_points(x, bottom, width, row.height),
            is_closed: true,
        });

        let lines = &row.cells[col];
        let top_offset = if col == DESCRIPTION_COLUMN {
            geometry.cell_padding_y
        } else {
            (row.height - lines.len() as f32 * geometry.leading) / 2.0
        };
        layer.set_fill_color(color.clone());
        for (line_idx, text) in lines.iter().enumerate() {
            let baseline = placed.top
                - top_offset
                - geometry.body_font_size * 0.8
                - line_idx as f32 * geometry.leading;
            let text_x = if col == DESCRIPTION_COLUMN {
                x + geometry.cell_padding_x
            } else {
                let text_width = geometry.text_width(text, geometry.body_font_size);
                (x + (width - text_width) / 2.0).max(x + 1.0)
            };
            layer.use_text(
                text.clone(),
                geometry.body_font_size,
                mm(text_x),
                mm(baseline),
                font,
            );
        }
        x += width;
    }
    layer.set_fill_color(black());
}
