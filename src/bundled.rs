use crate::error::{LoadError, NaceError};
use crate::table::CodeTable;
use crate::types::CodeEntry;
use once_cell::sync::OnceCell;
use tracing::warn;

static TABLE: OnceCell<CodeTable> = OnceCell::new();

/// The process-wide table built from the bundled reference data.
///
/// The table is built on the first successful call and shared afterwards.
pub fn table() -> Result<&'static CodeTable, LoadError> {
    TABLE.get_or_try_init(CodeTable::load).map_err(|error| {
        warn!(error = %error, "failed to load bundled NACE codes");
        error
    })
}

/// Describe a code using the bundled table.
///
/// # Returns
/// The description, or a `NaceError` if the code is unknown or the bundled data cannot be loaded
pub fn lookup(code: &str) -> Result<&'static str, NaceError> {
    Ok(table()?.lookup(code)?)
}

/// Search the bundled table's descriptions, ignoring case.
///
/// # Returns
/// The matching entries in table order, or a `NaceError` if the bundled data cannot be loaded
pub fn search(keyword: &str) -> Result<Vec<&'static CodeEntry>, NaceError> {
    Ok(table()?.search(keyword).collect())
}
