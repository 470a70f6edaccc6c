pub mod admin;
pub mod search;
pub mod status;
pub mod upload;

use linkcheck_engine::WorkbookSummary;

pub(crate) const NO_WORKBOOK_MESSAGE: &str = "No workbook has been uploaded yet";

pub(crate) fn print_summary(summary: &WorkbookSummary) {
    println!("  filename: {}", summary.filename);
    println!(
        "  uploaded: {}",
        summary.upload_time.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("  size: {} bytes", summary.byte_size);
    println!("  sheets: {}", summary.sheet_count);
    println!("  total_rows: {}", summary.total_rows);
    for sheet in &summary.sheets {
        println!(
            "    {}: {} rows, {} columns",
            sheet.name, sheet.row_count, sheet.column_count
        );
    }
}
