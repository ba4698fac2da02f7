#![cfg(test)]

use crate::parsing::LoadOptions;
use crate::table::CodeTable;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

pub const SAMPLE_CODES: &str = r#"code,description
A,"Agriculture, forestry and fishing"
01.11,Growing of cereals
J,Information and communication
62,"Computer programming, consultancy and related activities"
62.0,"Computer programming, consultancy and related activities"
62.01,Computer programming activities
62.02,Computer consultancy activities
"#;

pub fn stub_table() -> CodeTable {
    CodeTable::from_reader(SAMPLE_CODES.as_bytes(), &LoadOptions::default()).unwrap()
}

pub fn create_temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

pub fn create_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    let mut file = std::fs::File::create(path).unwrap();
    write!(file, "{}", content).unwrap();
}
