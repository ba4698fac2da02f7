use crate::code::{normalize_code, parent_code};
use crate::error::{LoadError, NotFoundError};
use crate::parsing::{parse_entries, LoadOptions};
use crate::types::CodeEntry;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

const BUNDLED_CODES: &str = include_str!("../data/nacecodes.csv");

/// An immutable, ordered table of NACE codes and their descriptions.
///
/// Codes are unique. Entries keep the order of the reference data they were loaded from, and every
/// query returns results in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    entries: Vec<CodeEntry>,
    index: HashMap<String, usize>,
    folded_descriptions: Vec<String>,
}

impl CodeTable {
    /// Build the table from the reference data compiled into this crate.
    pub fn load() -> Result<Self, LoadError> {
        let table = Self::from_reader(BUNDLED_CODES.as_bytes(), &LoadOptions::default())?;
        debug!(entries = table.len(), "loaded bundled NACE codes");
        Ok(table)
    }

    /// Build the table from delimited text.
    ///
    /// # Parameters
    /// * `reader` - Source of the reference data
    /// * `options` - Delimiter and header convention
    ///
    /// # Returns
    /// The table, or a `LoadError` if the data is malformed
    pub fn from_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<Self, LoadError> {
        let entries = parse_entries(reader, options)?;
        Ok(Self::from_unique_entries(entries))
    }

    /// Build the table from a reference file on disk.
    pub fn from_path(path: &Path, options: &LoadOptions) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        let table = Self::from_reader(BufReader::new(file), options)?;
        debug!(path = %path.display(), entries = table.len(), "loaded NACE codes");
        Ok(table)
    }

    fn from_unique_entries(entries: Vec<CodeEntry>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (entry.code.clone(), position))
            .collect();
        let folded_descriptions = entries
            .iter()
            .map(|entry| entry.description.to_lowercase())
            .collect();
        Self {
            entries,
            index,
            folded_descriptions,
        }
    }

    pub fn entries(&self) -> &[CodeEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CodeEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&CodeEntry> {
        self.index.get(code).map(|&position| &self.entries[position])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Return the description of a code, matching the code string exactly.
    pub fn lookup(&self, code: &str) -> Result<&str, NotFoundError> {
        self.get(code)
            .map(|entry| entry.description.as_str())
            .ok_or_else(|| NotFoundError(code.to_string()))
    }

    /// Return the description of a loosely formatted code such as ` 6201 `.
    ///
    /// See [`normalize_code`](crate::normalize_code) for the accepted forms.
    pub fn lookup_normalized(&self, input: &str) -> Result<&str, NotFoundError> {
        match normalize_code(input) {
            Some(code) => self.lookup(&code),
            None => Err(NotFoundError(input.to_string())),
        }
    }

    /// Find entries whose description contains `keyword`, ignoring case.
    ///
    /// An empty keyword matches every entry. The returned iterator is lazy and can be cloned to
    /// restart the search.
    pub fn search<'a>(
        &'a self,
        keyword: &str,
    ) -> impl Iterator<Item = &'a CodeEntry> + Clone + 'a {
        let needle = keyword.to_lowercase();
        self.entries
            .iter()
            .zip(&self.folded_descriptions)
            .filter(move |(_, folded)| folded.contains(needle.as_str()))
            .map(|(entry, _)| entry)
    }

    /// Find entries whose code starts with `prefix`, ignoring case.
    pub fn search_codes<'a>(
        &'a self,
        prefix: &str,
    ) -> impl Iterator<Item = &'a CodeEntry> + Clone + 'a {
        let prefix = prefix.trim().to_string();
        self.entries.iter().filter(move |entry| {
            entry
                .code
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(&prefix))
        })
    }

    /// The entry one level above `code`, if both the relationship and the entry exist.
    pub fn parent(&self, code: &str) -> Option<&CodeEntry> {
        parent_code(code).and_then(|parent| self.get(&parent))
    }

    /// Entries directly below `code`.
    pub fn children<'a>(&'a self, code: &str) -> impl Iterator<Item = &'a CodeEntry> + Clone + 'a {
        let code = code.to_string();
        self.entries
            .iter()
            .filter(move |entry| parent_code(&entry.code).as_deref() == Some(code.as_str()))
    }

    /// Entries above `code`, nearest first, skipping levels missing from the table.
    pub fn ancestors(&self, code: &str) -> Vec<&CodeEntry> {
        std::iter::successors(parent_code(code), |current| parent_code(current))
            .filter_map(|ancestor| self.get(&ancestor))
            .collect()
    }
}

impl<'a> IntoIterator for &'a CodeTable {
    type Item = &'a CodeEntry;
    type IntoIter = std::slice::Iter<'a, CodeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
