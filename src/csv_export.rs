//! CSV summary of the refined perihelion records.

use camino::Utf8Path;

use crate::constants::VectorSeries;
use crate::ephemeris::vector_record::VectorRecord;
use crate::periprec_errors::PrecessError;

/// Column header of the summary file.
const CSV_HEADER: [&str; 5] = ["NUMDATE", "STRDATE", "XCOORD", "YCOORD", "ZCOORD"];

/// Write the perihelion records to `<path>` with the
/// `NUMDATE,STRDATE,XCOORD,YCOORD,ZCOORD` header.
///
/// An empty series still produces the header line.
pub fn save_records(series: &[VectorRecord], path: &Utf8Path) -> Result<(), PrecessError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(CSV_HEADER)?;
    for record in series {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a summary file back into records.
pub fn read_records(path: &Utf8Path) -> Result<VectorSeries, PrecessError> {
    let mut reader = csv::Reader::from_path(path)?;
    reader
        .deserialize::<VectorRecord>()
        .map(|row| row.map_err(PrecessError::from))
        .collect()
}
