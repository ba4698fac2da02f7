//! Shape and hierarchy of NACE Rev. 2 codes.
//!
//! Codes come in four levels: a section letter (`J`), a two-digit division
//! (`62`), a group with one decimal (`62.0`) and a class with two decimals
//! (`62.01`). Everything here works on the code string alone, without a table.

/// Position of a code in the NACE hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Section,
    Division,
    Group,
    Class,
}

impl Level {
    /// Classify a code by its shape.
    ///
    /// # Returns
    /// The level, or `None` if the string is not a well-formed NACE code
    pub fn of(code: &str) -> Option<Level> {
        match code.as_bytes() {
            [s] if (b'A'..=b'U').contains(s) => Some(Level::Section),
            [a, b] if is_digits(&[*a, *b]) => Some(Level::Division),
            [a, b, b'.', c] if is_digits(&[*a, *b, *c]) => Some(Level::Group),
            [a, b, b'.', c, d] if is_digits(&[*a, *b, *c, *d]) => Some(Level::Class),
            _ => None,
        }
    }
}

fn is_digits(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_digit)
}

/// Division ranges (inclusive) belonging to each section.
const SECTION_RANGES: [(char, u8, u8); 21] = [
    ('A', 1, 3),
    ('B', 5, 9),
    ('C', 10, 33),
    ('D', 35, 35),
    ('E', 36, 39),
    ('F', 41, 43),
    ('G', 45, 47),
    ('H', 49, 53),
    ('I', 55, 56),
    ('J', 58, 63),
    ('K', 64, 66),
    ('L', 68, 68),
    ('M', 69, 75),
    ('N', 77, 82),
    ('O', 84, 84),
    ('P', 85, 85),
    ('Q', 86, 88),
    ('R', 90, 93),
    ('S', 94, 96),
    ('T', 97, 98),
    ('U', 99, 99),
];

/// Bring loosely formatted input into canonical code form.
///
/// Surrounding whitespace is dropped, section letters are uppercased and the
/// dot is inserted into bare digit strings (`6201` becomes `62.01`, `620`
/// becomes `62.0`).
///
/// # Returns
/// The canonical code, or `None` if the input cannot be read as a NACE code
pub fn normalize_code(input: &str) -> Option<String> {
    let trimmed = input.trim().to_ascii_uppercase();
    let candidate = if is_digits(trimmed.as_bytes()) {
        match trimmed.len() {
            2 => trimmed,
            3 | 4 => format!("{}.{}", &trimmed[..2], &trimmed[2..]),
            _ => return None,
        }
    } else {
        trimmed
    };

    Level::of(&candidate).map(|_| candidate)
}

/// The section letter a code falls under.
pub fn section_of(code: &str) -> Option<char> {
    match Level::of(code)? {
        Level::Section => code.chars().next(),
        _ => {
            let division: u8 = code[..2].parse().ok()?;
            SECTION_RANGES
                .iter()
                .find(|(_, first, last)| (*first..=*last).contains(&division))
                .map(|(section, _, _)| *section)
        }
    }
}

/// The code one level up the hierarchy.
///
/// # Returns
/// `None` for sections, malformed codes and divisions outside every section
pub fn parent_code(code: &str) -> Option<String> {
    match Level::of(code)? {
        Level::Section => None,
        Level::Division => section_of(code).map(String::from),
        Level::Group => Some(code[..2].to_string()),
        Level::Class => Some(code[..4].to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod level {
        use super::*;

        #[test]
        fn recognises_each_level() {
            assert_eq!(Level::of("A"), Some(Level::Section));
            assert_eq!(Level::of("62"), Some(Level::Division));
            assert_eq!(Level::of("62.0"), Some(Level::Group));
            assert_eq!(Level::of("62.01"), Some(Level::Class));
        }

        #[test]
        fn rejects_malformed_codes() {
            for code in ["", "V", "a", "6", "620", "62.", "62.001", "6a.01", "62,01"] {
                assert_eq!(Level::of(code), None, "{code:?} should have no level");
            }
        }
    }

    mod normalize {
        use super::*;

        #[test]
        fn keeps_canonical_codes() {
            assert_eq!(normalize_code("62.01").as_deref(), Some("62.01"));
            assert_eq!(normalize_code("J").as_deref(), Some("J"));
        }

        #[test]
        fn trims_and_uppercases() {
            assert_eq!(normalize_code("  j ").as_deref(), Some("J"));
            assert_eq!(normalize_code("\t62.01\n").as_deref(), Some("62.01"));
        }

        #[test]
        fn inserts_missing_dot() {
            assert_eq!(normalize_code("6201").as_deref(), Some("62.01"));
            assert_eq!(normalize_code("620").as_deref(), Some("62.0"));
            assert_eq!(normalize_code("62").as_deref(), Some("62"));
        }

        #[test]
        fn rejects_unreadable_input() {
            assert_eq!(normalize_code(""), None);
            assert_eq!(normalize_code("62011"), None);
            assert_eq!(normalize_code("programming"), None);
        }
    }

    mod hierarchy {
        use super::*;

        #[test]
        fn walks_up_one_level_at_a_time() {
            assert_eq!(parent_code("62.01").as_deref(), Some("62.0"));
            assert_eq!(parent_code("62.0").as_deref(), Some("62"));
            assert_eq!(parent_code("62").as_deref(), Some("J"));
            assert_eq!(parent_code("J"), None);
        }

        #[test]
        fn divisions_map_to_their_sections() {
            assert_eq!(section_of("01.11"), Some('A'));
            assert_eq!(section_of("33"), Some('C'));
            assert_eq!(section_of("35.11"), Some('D'));
            assert_eq!(section_of("99.00"), Some('U'));
            assert_eq!(section_of("Q"), Some('Q'));
        }

        #[test]
        fn unassigned_divisions_have_no_section() {
            assert_eq!(section_of("04"), None);
            assert_eq!(parent_code("04"), None);
        }

        #[test]
        fn section_ranges_are_ordered_and_disjoint() {
            for pair in SECTION_RANGES.windows(2) {
                let (_, _, previous_last) = pair[0];
                let (_, next_first, _) = pair[1];
                assert!(previous_last < next_first);
            }
        }
    }
}
