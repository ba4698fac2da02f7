use crate::code::Level;
use serde::Deserialize;

/// A single (code, description) pair from the NACE classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct CodeEntry {
    /// The NACE code, e.g. `62.01`
    pub code: String,
    /// Human-readable description of the economic activity
    pub description: String,
}

impl CodeEntry {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }

    /// The hierarchy level implied by the shape of the code, if any.
    pub fn level(&self) -> Option<Level> {
        Level::of(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_follows_code_shape() {
        assert_eq!(CodeEntry::new("J", "Information").level(), Some(Level::Section));
        assert_eq!(CodeEntry::new("62.01", "Programming").level(), Some(Level::Class));
        assert_eq!(CodeEntry::new("x", "Unknown").level(), None);
    }
}
