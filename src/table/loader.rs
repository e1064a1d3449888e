use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, instrument};

use super::TableError;

/// One data line of a table, keyed by the header names.
pub type Row = HashMap<String, String>;

/// Read every row of the table at `path`, in file order.
///
/// The file is closed before this returns, whatever the outcome.
#[instrument(level = "debug", skip(path), fields(path = %path.display()))]
pub fn load_rows(path: &Path) -> Result<Vec<Row>, TableError> {
    let file = File::open(path)?;
    let rows = read_rows(file)?;
    debug!(rows = rows.len(), "loaded table");
    Ok(rows)
}

/// Read every row of a table from any reader. The first line is the
/// header. Cells are kept verbatim; a line with a different number of
/// cells than the header is an error.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<Row>, TableError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: Row = result?;
        rows.push(row);
    }
    Ok(rows)
}
