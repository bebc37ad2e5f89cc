//! PDF export

use printpdf::*;
use printpdf::path::{PaintMode, WindingOrder};

use super::{format_date, group_thousands, status_label, ExportError};
use crate::domain::Service;

const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 20.0;

/// Fixed column widths in mm (1.5in, 1in, 1.2in, 1in, 1in, 0.8in)
const COL_WIDTHS: [f64; 6] = [38.1, 25.4, 30.5, 25.4, 25.4, 20.3];
const HEADERS: [&str; 6] = [
    "Hizmet",
    "Tür",
    "Sağlayıcı",
    "Yıllık Ücret",
    "Sonraki Yenileme",
    "Durum",
];

const TABLE_WIDTH: f64 = 165.1;
const TABLE_LEFT: f64 = (PAGE_WIDTH - TABLE_WIDTH) / 2.0;

const TITLE_FONT_SIZE: f64 = 18.0;
const HEADER_FONT_SIZE: f64 = 12.0;
const BODY_FONT_SIZE: f64 = 9.0;
const HEADER_ROW_HEIGHT: f64 = 10.0;
const ROW_HEIGHT: f64 = 7.5;
const CELL_PADDING: f64 = 2.0;

const MM_PER_PT: f64 = 0.352_778;

fn pdf_err(e: impl std::fmt::Display) -> ExportError {
    ExportError::Pdf(e.to_string())
}

fn grey() -> Color {
    Color::Rgb(Rgb::new(0.5, 0.5, 0.5, None))
}

fn white_smoke() -> Color {
    Color::Rgb(Rgb::new(0.96, 0.96, 0.96, None))
}

fn light_grey() -> Color {
    Color::Rgb(Rgb::new(0.83, 0.83, 0.83, None))
}

fn white() -> Color {
    Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None))
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

/// Rough Helvetica width estimate; good enough for centering and
/// truncation with the built-in (non-measurable) fonts.
fn text_width_mm(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * MM_PER_PT * 0.5
}

/// Clip cell content to its fixed column width
fn fit_text(text: &str, col_width: f64, font_size: f64) -> String {
    let available = col_width - 2.0 * CELL_PADDING;
    let max_chars = (available / (font_size * MM_PER_PT * 0.5)) as usize;
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let clipped: String = text.chars().take(max_chars.saturating_sub(2)).collect();
        format!("{}..", clipped)
    }
}

fn rect(x0: f64, y_top: f64, width: f64, height: f64, mode: PaintMode) -> Polygon {
    Polygon {
        rings: vec![vec![
            (Point::new(Mm(x0 as f32), Mm(y_top as f32)), false),
            (Point::new(Mm((x0 + width) as f32), Mm(y_top as f32)), false),
            (Point::new(Mm((x0 + width) as f32), Mm((y_top - height) as f32)), false),
            (Point::new(Mm(x0 as f32), Mm((y_top - height) as f32)), false),
        ]],
        mode,
        winding_order: WindingOrder::NonZero,
    }
}

/// Draw one table row: background band, per-cell grid strokes, then text.
/// Text uses the PDF fill color, so the fill is switched after the band.
fn draw_row(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    y_top: f64,
    height: f64,
    font_size: f64,
    cells: &[String],
    background: Color,
    text_color: Color,
) {
    layer.set_fill_color(background);
    layer.add_polygon(rect(TABLE_LEFT, y_top, TABLE_WIDTH, height, PaintMode::Fill));

    layer.set_outline_color(black());
    layer.set_outline_thickness(0.5);
    let mut x = TABLE_LEFT;
    for width in COL_WIDTHS {
        layer.add_polygon(rect(x, y_top, width, height, PaintMode::Stroke));
        x += width;
    }

    layer.set_fill_color(text_color);
    let baseline = y_top - height + (height - font_size * MM_PER_PT) / 2.0;
    let mut x = TABLE_LEFT;
    for (cell, width) in cells.iter().zip(COL_WIDTHS) {
        layer.use_text(
            fit_text(cell, width, font_size),
            font_size as f32,
            Mm((x + CELL_PADDING) as f32),
            Mm(baseline as f32),
            font,
        );
        x += width;
    }
}

fn header_cells() -> Vec<String> {
    HEADERS.iter().map(|h| h.to_string()).collect()
}

fn service_cells(service: &Service) -> Vec<String> {
    vec![
        service.name.clone(),
        service.service_type.clone(),
        service.provider.clone(),
        format!("₺{}", group_thousands(service.annual_fee)),
        format_date(service.next_renewal_date, "-"),
        status_label(service.status).to_string(),
    ]
}

/// Render the record set as a titled, single-table A4 document.
///
/// Grey bold header band, alternating white/light-grey data rows, black
/// grid. Rows that overflow a page continue on the next one under a
/// repeated header band. An empty record set yields a title plus the bare
/// header band.
pub fn render_pdf(services: &[Service]) -> Result<Vec<u8>, ExportError> {
    let (doc, page, layer) = PdfDocument::new(
        "Hizmet Listesi",
        Mm(PAGE_WIDTH as f32),
        Mm(PAGE_HEIGHT as f32),
        "Layer 1",
    );
    let font = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_err)?;

    let mut layer_ref = doc.get_page(page).get_layer(layer);

    // Centered title
    let title = "Hizmet Listesi";
    layer_ref.set_fill_color(black());
    layer_ref.use_text(
        title,
        TITLE_FONT_SIZE as f32,
        Mm(((PAGE_WIDTH - text_width_mm(title, TITLE_FONT_SIZE)) / 2.0) as f32),
        Mm((PAGE_HEIGHT - MARGIN_TOP - 10.0) as f32),
        &bold,
    );

    let mut y = PAGE_HEIGHT - MARGIN_TOP - 25.0;
    draw_row(
        &layer_ref,
        &bold,
        y,
        HEADER_ROW_HEIGHT,
        HEADER_FONT_SIZE,
        &header_cells(),
        grey(),
        white_smoke(),
    );
    y -= HEADER_ROW_HEIGHT;

    for (index, service) in services.iter().enumerate() {
        if y - ROW_HEIGHT < MARGIN_BOTTOM {
            let (next_page, next_layer) = doc.add_page(Mm(PAGE_WIDTH as f32), Mm(PAGE_HEIGHT as f32), "Layer 1");
            layer_ref = doc.get_page(next_page).get_layer(next_layer);
            y = PAGE_HEIGHT - MARGIN_TOP;
            draw_row(
                &layer_ref,
                &bold,
                y,
                HEADER_ROW_HEIGHT,
                HEADER_FONT_SIZE,
                &header_cells(),
                grey(),
                white_smoke(),
            );
            y -= HEADER_ROW_HEIGHT;
        }

        let background = if index % 2 == 0 { white() } else { light_grey() };
        draw_row(
            &layer_ref,
            &font,
            y,
            ROW_HEIGHT,
            BODY_FONT_SIZE,
            &service_cells(service),
            background,
            black(),
        );
        y -= ROW_HEIGHT;
    }

    doc.save_to_bytes().map_err(pdf_err)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;
    use crate::domain::ServiceStatus;

    fn sample(name: &str) -> Service {
        Service {
            id: format!("svc-{}", name),
            name: name.to_string(),
            service_type: "Hosting".to_string(),
            provider: "Hetzner".to_string(),
            creation_date: NaiveDate::from_ymd_opt(2023, 5, 20).unwrap(),
            last_renewal_date: None,
            next_renewal_date: Some(NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()),
            annual_fee: 12500.0,
            currency: "TRY".to_string(),
            status: ServiceStatus::Active,
            notes: None,
            is_deleted: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn document_bytes_carry_pdf_magic() {
        let bytes = render_pdf(&[sample("one")]).unwrap();
        assert_eq!(&bytes[..5], b"%PDF-");
    }

    #[test]
    fn empty_record_set_still_renders() {
        let bytes = render_pdf(&[]).unwrap();
        assert_eq!(&bytes[..5], b"%PDF-");
    }

    #[test]
    fn long_record_sets_paginate() {
        let services: Vec<Service> = (0..120).map(|i| sample(&format!("svc {}", i))).collect();
        let bytes = render_pdf(&services).unwrap();
        assert_eq!(&bytes[..5], b"%PDF-");
        // more rows than fit one A4 page must not panic or truncate output
        assert!(bytes.len() > 2000);
    }

    #[test]
    fn cell_text_is_clipped_to_column_width() {
        let clipped = fit_text(&"x".repeat(200), COL_WIDTHS[0], BODY_FONT_SIZE);
        assert!(clipped.ends_with(".."));
        assert!(clipped.chars().count() < 200);
    }
}
