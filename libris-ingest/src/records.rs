use crate::error::IngestResult;
use std::collections::HashMap;
use std::path::Path;

/// Field delimiter of the catalog source files.
pub const CATALOG_DELIMITER: u8 = b';';

/// One parsed row: column header → field value.
///
/// Headers and values are trimmed; header lookup is case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    /// Build a record from column/value pairs. Mainly useful for fixtures.
    #[must_use]
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.trim().to_lowercase(), v.trim().to_string()))
                .collect(),
        }
    }

    /// Value of the named column, or `""` when the column is absent.
    ///
    /// Returning an empty value instead of failing keeps the mappers total
    /// over sources with optional columns.
    #[must_use]
    pub fn get(&self, column: &str) -> &str {
        self.fields
            .get(&column.to_lowercase())
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Read a delimited source into records, using the first row as headers.
///
/// Any read or parse failure fails the whole file: callers never see a
/// partially filled record set.
pub fn read_records(path: impl AsRef<Path>, delimiter: u8) -> IngestResult<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path.as_ref())?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        // A short row simply leaves its trailing columns absent.
        let fields = headers
            .iter()
            .cloned()
            .zip(row.iter().map(str::to_string))
            .collect();
        records.push(Record { fields });
    }
    Ok(records)
}
