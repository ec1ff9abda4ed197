//! Scoped temp-file handling for PDF report delivery.

use std::io::Write;

use tempfile::NamedTempFile;

/// Spools a report payload to a uniquely named temp file.
///
/// The file lives exactly as long as the returned handle: dropping it
/// removes the file, so the upload path cannot leak temp files even when
/// sending fails. Unique naming also keeps concurrent handler invocations
/// from ever seeing each other's files.
pub fn spool_report(payload: &[u8]) -> std::io::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("myfinance-relatorio-")
        .suffix(".pdf")
        .tempfile()?;

    file.write_all(payload)?;
    file.flush()?;
    Ok(file)
}
