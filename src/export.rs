use std::io::Write;

use crate::error::{DefinancaError, Result};
use crate::notify::{Notification, Notifier};
use crate::table::TableView;

/// Write the current view as CSV: header row of visible column headers,
/// one record per filtered+sorted row — the whole result set, not just
/// the current page. Cells are raw accessor values; display renderers
/// never leak into the export. Quoting and escaping are the csv crate's
/// (fields containing the delimiter or quotes get quoted, quotes doubled).
pub fn write_csv<R, W: Write>(table: &TableView<R>, writer: W) -> Result<()> {
    let columns = table.visible_columns();
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(columns.iter().map(|c| c.header.as_str()))?;
    for row in table.filtered_sorted() {
        wtr.write_record(columns.iter().map(|c| c.value(row).to_string()))?;
    }
    wtr.flush()?;
    Ok(())
}

/// In-memory variant of `write_csv`, for hosts that hand the bytes to a
/// download mechanism rather than a file.
pub fn csv_string<R>(table: &TableView<R>) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(table, &mut buf)?;
    String::from_utf8(buf).map_err(|e| DefinancaError::Other(e.to_string()))
}

/// Export boundary helper: run the export and surface any failure to the
/// notification sink instead of propagating it. Returns whether the
/// export succeeded. The view itself is never affected by a failure.
pub fn export_or_notify<R, W: Write>(
    table: &TableView<R>,
    writer: W,
    notifier: &mut dyn Notifier,
) -> bool {
    match write_csv(table, writer) {
        Ok(()) => true,
        Err(e) => {
            notifier.notify(Notification::error("Export failed", e.to_string()));
            false
        }
    }
}
