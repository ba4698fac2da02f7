use crate::error::LoadError;
use crate::types::CodeEntry;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashSet;
use std::io::Read;

const COLUMN_COUNT: usize = 2;

/// How reference data is laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Field delimiter, `,` by default
    pub delimiter: u8,
    /// Whether the first record is a header row, `true` by default
    pub has_headers: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
        }
    }
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn has_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }
}

/// Parse delimited reference data into entries, in file order.
///
/// # Parameters
/// * `reader` - Source of the delimited text
/// * `options` - Delimiter and header convention
///
/// # Returns
/// The entries, or a `LoadError` if the header or a record has the wrong number of columns, a
/// record has a blank code or description, or a record repeats a code seen earlier
pub fn parse_entries<R: Read>(
    reader: R,
    options: &LoadOptions,
) -> Result<Vec<CodeEntry>, LoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(options.has_headers)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    if options.has_headers {
        let found = csv_reader.headers()?.len();
        // Empty input has no header row and is reported as `Empty` below.
        if found != COLUMN_COUNT && found != 0 {
            return Err(LoadError::ColumnCount { line: 1, found });
        }
    }

    let mut entries = Vec::new();
    let mut seen = HashSet::new();
    let mut record = StringRecord::new();
    while csv_reader.read_record(&mut record)? {
        let line = record.position().map_or(0, |position| position.line());
        if record.iter().all(str::is_empty) {
            continue;
        }
        if record.len() != COLUMN_COUNT {
            return Err(LoadError::ColumnCount {
                line,
                found: record.len(),
            });
        }

        let entry: CodeEntry = record.deserialize(None)?;
        if entry.code.is_empty() {
            return Err(LoadError::EmptyCode { line });
        }
        if entry.description.is_empty() {
            return Err(LoadError::EmptyDescription {
                code: entry.code,
                line,
            });
        }
        if !seen.insert(entry.code.clone()) {
            return Err(LoadError::DuplicateCode {
                code: entry.code,
                line,
            });
        }
        entries.push(entry);
    }

    if entries.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(entries)
}
