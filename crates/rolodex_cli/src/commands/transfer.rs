//! Import and export command implementations.

use rolodex_book::ContactBook;
use rolodex_sheet::SheetCodec;
use rolodex_store::RecordStore;
use std::path::Path;

/// Runs the import command.
pub fn import<S: RecordStore, C: SheetCodec>(
    book: &ContactBook<S, C>,
    file: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = book.import_file(file)?;
    println!(
        "Imported {} contacts from {} ({} total)",
        report.added,
        file.display(),
        report.total
    );
    Ok(())
}

/// Runs the export command.
///
/// Without `out`, the workbook goes to the configured file name in the
/// current directory.
pub fn export<S: RecordStore, C: SheetCodec>(
    book: &ContactBook<S, C>,
    out: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = match out {
        Some(path) => book.export_to(path)?,
        None => book.export_to_dir(Path::new("."))?,
    };
    println!(
        "Exported {} contacts to {} ({})",
        report.records,
        report.path.display(),
        format_size(report.bytes as u64)
    );
    Ok(())
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} bytes", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
