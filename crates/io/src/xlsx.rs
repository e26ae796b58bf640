//! XLSX export of an accepted schedule.
//!
//! One worksheet, one row per calendar day, columns = Date plus one per
//! account. Each account cell holds the comma-joined operation amounts
//! for that day, or "-" when the account had no operations.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use tradegen_engine::Schedule;

/// Worksheet name for the exported schedule.
pub const SHEET_NAME: &str = "Operation Schedule";

/// Placeholder written when an account has no operations on a day.
/// Never an empty string: a visible dash keeps the row readable.
pub const EMPTY_CELL: &str = "-";

/// Export statistics.
#[derive(Debug, Default)]
pub struct ExportResult {
    /// Data rows written (excludes the header row).
    pub rows_written: usize,
}

/// Render one account-day cell: "60, 250" or "-".
fn cell_text(operations: &[u64]) -> String {
    if operations.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        operations
            .iter()
            .map(|amount| amount.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Write the schedule to an XLSX file at `path`.
///
/// Rows are emitted in the schedule's own (chronological) day order.
/// The single `save` call is the only filesystem touch; any failure
/// surfaces as `Err` with context.
pub fn export(schedule: &Schedule, path: &Path) -> Result<ExportResult, String> {
    let mut result = ExportResult::default();

    let mut workbook = Workbook::new();
    let worksheet = workbook
        .add_worksheet()
        .set_name(SHEET_NAME)
        .map_err(|e| format!("Failed to create sheet '{}': {}", SHEET_NAME, e))?;

    // Header row: Date, then one column per account.
    let header_format = Format::new().set_bold();
    worksheet
        .write_string_with_format(0, 0, "Date", &header_format)
        .map_err(|e| format!("Failed to write header: {}", e))?;
    for (col, account) in schedule.accounts.iter().enumerate() {
        worksheet
            .write_string_with_format(0, (col + 1) as u16, account, &header_format)
            .map_err(|e| format!("Failed to write header '{}': {}", account, e))?;
    }

    // One row per day, chronological.
    for (row, day) in schedule.days.iter().enumerate() {
        let row32 = (row + 1) as u32;
        worksheet
            .write_string(row32, 0, day.label())
            .map_err(|e| format!("Failed to write date {}: {}", day.label(), e))?;

        for (col, operations) in day.operations.iter().enumerate() {
            worksheet
                .write_string(row32, (col + 1) as u16, cell_text(operations))
                .map_err(|e| format!("Failed to write cell: {}", e))?;
        }
        result.rows_written += 1;
    }

    workbook
        .save(path)
        .map_err(|e| format!("Failed to save XLSX file: {}", e))?;

    Ok(result)
}
