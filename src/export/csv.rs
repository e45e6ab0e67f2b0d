//! CSV output for scraped product rows

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::core::Result;

/// Write `headers` then every record to `writer`
///
/// The header row is always written, so an empty scrape still produces a
/// file with the expected columns.
pub fn write_records<W, R>(writer: W, headers: &[&str], records: &[R]) -> Result<()>
where
    W: Write,
    R: Serialize,
{
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(headers)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write records to a file, creating parent directories as needed
pub fn write_csv<R: Serialize>(path: &Path, headers: &[&str], records: &[R]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = fs::File::create(path)?;
    write_records(file, headers, records)
}
