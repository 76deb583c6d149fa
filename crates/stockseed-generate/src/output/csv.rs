use std::io::{BufWriter, Write};
use std::path::Path;

use stockseed_core::{Field, InventoryRecord};

use crate::errors::GenerationError;
use crate::output::atomic::write_with_atomic;

/// Header row with each field name behind `prefix`.
pub fn header_row(prefix: &str) -> Vec<String> {
    Field::ALL.iter().map(|field| field.header(prefix)).collect()
}

/// Write records as CSV with the fixed column ordering. Returns bytes written.
pub fn write_records_csv(
    path: &Path,
    header_prefix: &str,
    records: &[InventoryRecord],
) -> Result<u64, GenerationError> {
    write_with_atomic(path, |file| {
        let counting = CountingWriter::new(BufWriter::new(file));
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(counting);

        writer.write_record(header_row(header_prefix))?;
        for record in records {
            writer.write_record(record.to_row())?;
        }

        writer.flush()?;
        let counting = writer.into_inner().map_err(|err| err.into_error())?;
        let bytes = counting.bytes_written();
        counting
            .into_inner()
            .into_inner()
            .map_err(|err| err.into_error())?;
        Ok(bytes)
    })
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }

    fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
