//! Warning types for non-fatal errors during TSV processing.
//!
//! Dataset dumps are large and not perfectly regular. Rather than failing a
//! whole read because of one bad line, the reader skips the line and records
//! a [`Warning`] describing what was wrong and where.
//!
//! # Examples
//!
//! ```
//! use costar_tsv::Warning;
//!
//! let warning = Warning::IncompleteRow {
//!     line_number: 12,
//!     expected: 6,
//!     found: 4,
//! };
//! assert_eq!(warning.line_number(), 12);
//! assert_eq!(warning.kind(), "incomplete_row");
//! ```

use std::fmt;

/// A non-fatal warning that occurred during TSV processing.
///
/// Each variant includes the line number where the issue occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A line could not be converted into the requested row type.
    ///
    /// Typical causes are a non-numeric value in a numeric column, a
    /// missing column in the header, or invalid UTF-8.
    MalformedRow {
        /// The 1-based line number where the error occurred.
        line_number: u64,
        /// A description of the parsing error.
        error: String,
    },

    /// A line carried a different number of fields than the header.
    IncompleteRow {
        /// The 1-based line number that was skipped.
        line_number: u64,
        /// Number of fields in the header row.
        expected: u64,
        /// Number of fields found on the line.
        found: u64,
    },
}

impl Warning {
    /// Returns the line number associated with this warning.
    #[must_use]
    pub fn line_number(&self) -> u64 {
        match self {
            Self::MalformedRow { line_number, .. } | Self::IncompleteRow { line_number, .. } => {
                *line_number
            }
        }
    }

    /// Returns a human-readable description of the warning.
    ///
    /// # Examples
    ///
    /// ```
    /// use costar_tsv::Warning;
    ///
    /// let warning = Warning::MalformedRow {
    ///     line_number: 5,
    ///     error: "invalid digit found in string".to_string(),
    /// };
    /// let desc = warning.description();
    /// assert!(desc.contains("line 5"));
    /// assert!(desc.contains("invalid digit"));
    /// ```
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::MalformedRow { line_number, error } => {
                format!("line {line_number}: malformed row: {error}")
            }
            Self::IncompleteRow {
                line_number,
                expected,
                found,
            } => {
                format!("line {line_number}: expected {expected} fields, found {found}")
            }
        }
    }

    /// Returns a static string identifying the warning kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedRow { .. } => "malformed_row",
            Self::IncompleteRow { .. } => "incomplete_row",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::error::Error for Warning {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_row_stores_line_number_and_error() {
        let warning = Warning::MalformedRow {
            line_number: 42,
            error: "unexpected token".to_string(),
        };

        assert_eq!(warning.line_number(), 42);
        assert_eq!(warning.kind(), "malformed_row");
    }

    #[test]
    fn description_formats_incomplete_row() {
        let warning = Warning::IncompleteRow {
            line_number: 15,
            expected: 9,
            found: 3,
        };

        let desc = warning.description();
        assert!(desc.contains("line 15"));
        assert!(desc.contains("expected 9 fields"));
        assert!(desc.contains("found 3"));
    }

    #[test]
    fn display_matches_description() {
        let warning = Warning::MalformedRow {
            line_number: 1,
            error: "test error".to_string(),
        };

        assert_eq!(format!("{warning}"), warning.description());
    }

    #[test]
    fn kind_enables_filtering_by_type() {
        let warnings = [
            Warning::MalformedRow {
                line_number: 1,
                error: "error1".to_string(),
            },
            Warning::IncompleteRow {
                line_number: 2,
                expected: 2,
                found: 1,
            },
            Warning::MalformedRow {
                line_number: 3,
                error: "error2".to_string(),
            },
        ];

        let malformed = warnings
            .iter()
            .filter(|w| w.kind() == "malformed_row")
            .count();
        assert_eq!(malformed, 2);
    }
}
