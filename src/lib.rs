//! Convert NACE Rev. 2 codes into descriptions and search the classification.
//!
//! ```
//! let description = nace_converter::lookup("62.01").unwrap();
//! assert_eq!(description, "Computer programming activities");
//!
//! let matches = nace_converter::search("cereals").unwrap();
//! assert!(matches.iter().any(|entry| entry.code == "01.11"));
//! ```

mod bundled;
mod code;
mod error;
mod parsing;
mod table;
mod test_helpers;
mod types;

pub use bundled::{lookup, search, table};
pub use code::{normalize_code, parent_code, section_of, Level};
pub use error::{LoadError, NaceError, NotFoundError};
pub use parsing::LoadOptions;
pub use table::CodeTable;
pub use types::CodeEntry;
