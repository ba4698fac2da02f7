use thiserror::Error;

/// Error whilst loading reference data into a code table
#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("Line {line}: expected 2 columns, found {found}")]
    ColumnCount { line: u64, found: usize },
    #[error("Line {line}: code is empty")]
    EmptyCode { line: u64 },
    #[error("Line {line}: description of '{code}' is empty")]
    EmptyDescription { code: String, line: u64 },
    #[error("Line {line}: duplicate code '{code}'")]
    DuplicateCode { code: String, line: u64 },
    #[error("Reference data contains no entries")]
    Empty,
}

/// The requested code is not in the table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not a known NACE code")]
pub struct NotFoundError(pub String);

/// Error from the convenience functions backed by the bundled table
#[derive(Error, Debug)]
pub enum NaceError {
    #[error("Failed to load bundled NACE codes: {0}")]
    Load(#[from] LoadError),
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}
