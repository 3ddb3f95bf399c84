use crate::error::Result;
use crate::models::Record;
use csv::WriterBuilder;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Write `records` as CSV with a header row listing `fields` in order.
///
/// Every row gets one cell per field: absent fields are written as empty
/// cells and fields not listed are left out. With no fields nothing is
/// written at all.
pub fn write_records<W: Write>(out: W, records: &[Record], fields: &[String]) -> Result<()> {
    if fields.is_empty() {
        return Ok(());
    }

    let mut writer = WriterBuilder::new().from_writer(out);
    writer.write_record(fields)?;

    for record in records {
        writer.write_record(fields.iter().map(|field| {
            record
                .get(field)
                .map(|value| value.render().into_owned())
                .unwrap_or_default()
        }))?;
    }

    writer.flush()?;
    Ok(())
}

/// Create or truncate `path` and write the records to it.
pub fn write_csv_file(path: &Path, records: &[Record], fields: &[String]) -> Result<()> {
    let file = File::create(path)?;
    let mut buffered = BufWriter::new(file);
    write_records(&mut buffered, records, fields)?;
    buffered.flush()?;

    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
