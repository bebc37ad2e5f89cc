//! Export formatters - spreadsheet and PDF renderings of the record set
//!
//! Both renderers take the full non-deleted record set and produce a
//! complete binary document in memory; a failure yields no partial output.

mod excel;
mod pdf;

pub use excel::render_excel;
pub use pdf::render_pdf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::ServiceStatus;

/// Formatter failure, surfaced to API callers as an internal error
/// carrying the underlying message.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Excel export failed: {0}")]
    Excel(String),

    #[error("PDF export failed: {0}")]
    Pdf(String),
}

/// dd.mm.yyyy, or the placeholder when the date is absent
fn format_date(date: Option<NaiveDate>, placeholder: &str) -> String {
    date.map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| placeholder.to_string())
}

/// Localized status label
fn status_label(status: ServiceStatus) -> &'static str {
    if status.is_active() {
        "Aktif"
    } else {
        "Pasif"
    }
}

/// Round to a whole amount and group thousands: 12345.6 -> "12,346"
fn group_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_format_as_day_month_year() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_date(Some(date), ""), "07.03.2024");
        assert_eq!(format_date(None, "-"), "-");
        assert_eq!(format_date(None, ""), "");
    }

    #[test]
    fn fees_group_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(1234567.0), "1,234,567");
        assert_eq!(group_thousands(12345.6), "12,346");
    }

    #[test]
    fn status_labels_are_localized() {
        assert_eq!(status_label(ServiceStatus::Active), "Aktif");
        assert_eq!(status_label(ServiceStatus::Inactive), "Pasif");
    }
}
