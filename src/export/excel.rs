//! Spreadsheet export

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use super::{format_date, status_label, ExportError};
use crate::domain::Service;

/// Column headers, in the order row cells are written
const HEADERS: [&str; 10] = [
    "Hizmet Adı",
    "Hizmet Türü",
    "Sağlayıcı",
    "Yıllık Ücret",
    "Para Birimi",
    "Oluşturma Tarihi",
    "Son Yenileme",
    "Sonraki Yenileme",
    "Durum",
    "Notlar",
];

impl From<XlsxError> for ExportError {
    fn from(e: XlsxError) -> Self {
        Self::Excel(e.to_string())
    }
}

/// Render the record set as a single-worksheet workbook.
///
/// One row per record; absent dates stay blank. An empty record set still
/// produces a valid workbook with only the header row.
pub fn render_excel(services: &[Service]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Hizmetler")?;

    let header_format = Format::new().set_bold();
    for (col, title) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
    }

    for (index, service) in services.iter().enumerate() {
        let row = (index + 1) as u32;
        worksheet.write_string(row, 0, &service.name)?;
        worksheet.write_string(row, 1, &service.service_type)?;
        worksheet.write_string(row, 2, &service.provider)?;
        worksheet.write_number(row, 3, service.annual_fee)?;
        worksheet.write_string(row, 4, &service.currency)?;
        worksheet.write_string(row, 5, format_date(Some(service.creation_date), ""))?;
        worksheet.write_string(row, 6, format_date(service.last_renewal_date, ""))?;
        worksheet.write_string(row, 7, format_date(service.next_renewal_date, ""))?;
        worksheet.write_string(row, 8, status_label(service.status))?;
        worksheet.write_string(row, 9, service.notes.as_deref().unwrap_or(""))?;
    }

    Ok(workbook.save_to_buffer()?)
}
