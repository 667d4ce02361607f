//! TSV reading operations.
//!
//! This module reads header-addressed tab-separated data row by row,
//! deserializing each row into a typed record and tracking line numbers so
//! that skipped rows can be reported precisely.

use crate::error::{Error, Result};
use crate::warning::Warning;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reader for header-addressed TSV data.
///
/// `TsvReader` wraps a [`csv::Reader`] configured for tab delimiters, a
/// mandatory header row and no quote handling. Dataset dumps such as IMDb's
/// contain bare `"` characters inside fields, so quoting must stay off.
///
/// Every data row must carry as many fields as the header; rows that don't
/// are reported as [`Warning::IncompleteRow`] by [`rows_resilient`].
///
/// [`rows_resilient`]: TsvReader::rows_resilient
///
/// # Examples
///
/// ```
/// use costar_tsv::TsvReader;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Row {
///     id: String,
///     name: String,
/// }
///
/// let data = "id\tname\n1\tAlpha\n2\tBeta\n";
/// let mut reader = TsvReader::new(data.as_bytes());
/// let mut rows = reader.rows_resilient::<Row>();
/// let names: Vec<String> = rows.by_ref().map(|row| row.name).collect();
/// let warnings = rows.finish().unwrap();
///
/// assert_eq!(names, vec!["Alpha", "Beta"]);
/// assert!(warnings.is_empty());
/// ```
pub struct TsvReader<R> {
    inner: csv::Reader<R>,
}

impl<R: Read> TsvReader<R> {
    /// Creates a new `TsvReader` wrapping the given reader.
    ///
    /// The underlying csv reader buffers internally, so `reader` does not
    /// need to be wrapped in a `BufReader`.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            inner: Self::builder().from_reader(reader),
        }
    }

    fn builder() -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .delimiter(b'\t')
            .has_headers(true)
            .quoting(false)
            .flexible(false);
        builder
    }

    /// Returns the current line number.
    ///
    /// Returns 1 before anything has been read. After reading, returns the
    /// 1-based line number the reader is positioned at.
    #[must_use]
    pub fn line_number(&self) -> u64 {
        self.inner.position().line()
    }

    /// Returns the column names from the header row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Header`] if the header row is not valid UTF-8 and
    /// [`Error::Io`] if it cannot be read at all.
    pub fn headers(&mut self) -> Result<Vec<String>> {
        match self.inner.headers() {
            Ok(record) => Ok(record.iter().map(str::to_string).collect()),
            Err(err) => match err.into_kind() {
                csv::ErrorKind::Io(io_err) => Err(Error::Io(io_err)),
                other => Err(Error::Header(format!("{other:?}"))),
            },
        }
    }

    /// Returns an iterator over the rows that deserialize into `T`.
    ///
    /// Rows are matched to `T`'s fields by header name. Rows that fail to
    /// deserialize are skipped and recorded as warnings. An I/O failure ends
    /// the iteration; call [`ResilientRows::finish`] afterwards to observe it.
    pub fn rows_resilient<T: DeserializeOwned>(&mut self) -> ResilientRows<'_, R, T> {
        ResilientRows {
            records: self.inner.deserialize(),
            warnings: Vec::new(),
            fatal: None,
        }
    }
}

/// Iterator over the well-formed rows of a [`TsvReader`].
///
/// Skipped rows are collected as [`Warning`]s. The iterator is usually
/// driven through `by_ref()` so that [`finish`](Self::finish) can be called
/// once the consumer is done.
pub struct ResilientRows<'r, R, T> {
    records: csv::DeserializeRecordsIter<'r, R, T>,
    warnings: Vec<Warning>,
    fatal: Option<Error>,
}

impl<R: Read, T: DeserializeOwned> ResilientRows<'_, R, T> {
    /// Warnings collected so far.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Ends the read, returning the collected warnings.
    ///
    /// # Errors
    ///
    /// Returns the I/O error that stopped the iteration early, if any.
    pub fn finish(self) -> Result<Vec<Warning>> {
        match self.fatal {
            Some(err) => Err(err),
            None => Ok(self.warnings),
        }
    }
}

impl<R: Read, T: DeserializeOwned> Iterator for ResilientRows<'_, R, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.fatal.is_some() {
            return None;
        }

        loop {
            match self.records.next()? {
                Ok(row) => return Some(row),
                Err(err) => match classify(err) {
                    Ok(warning) => {
                        tracing::trace!(%warning, "Skipping row");
                        self.warnings.push(warning);
                    }
                    Err(fatal) => {
                        tracing::warn!(error = %fatal, "Stopping read after I/O failure");
                        self.fatal = Some(fatal);
                        return None;
                    }
                },
            }
        }
    }
}

/// Sorts a row error into a recoverable warning or a fatal error.
fn classify(err: csv::Error) -> std::result::Result<Warning, Error> {
    let line_number = err.position().map_or(0, csv::Position::line);
    match err.into_kind() {
        csv::ErrorKind::Io(io_err) => Err(Error::Io(io_err)),
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => Ok(Warning::IncompleteRow {
            line_number,
            expected: expected_len,
            found: len,
        }),
        csv::ErrorKind::Deserialize { err, .. } => Ok(Warning::MalformedRow {
            line_number,
            error: err.to_string(),
        }),
        csv::ErrorKind::Utf8 { err, .. } => Ok(Warning::MalformedRow {
            line_number,
            error: err.to_string(),
        }),
        other => Ok(Warning::MalformedRow {
            line_number,
            error: format!("{other:?}"),
        }),
    }
}

/// Opens a TSV file for reading.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened.
pub fn open_tsv(path: impl AsRef<Path>) -> Result<TsvReader<File>> {
    let file = File::open(path.as_ref())?;
    Ok(TsvReader::new(file))
}

/// Reads every well-formed row of a TSV file into memory.
///
/// Returns the rows together with the warnings for the rows that were
/// skipped.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or a read fails.
pub fn read_tsv_resilient<T: DeserializeOwned>(
    path: impl AsRef<Path>,
) -> Result<(Vec<T>, Vec<Warning>)> {
    let mut reader = open_tsv(path)?;
    let mut rows = reader.rows_resilient::<T>();
    let parsed: Vec<T> = rows.by_ref().collect();
    let warnings = rows.finish()?;
    Ok((parsed, warnings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Cursor;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Pair {
        key: String,
        value: u32,
    }

    fn read_pairs(data: &str) -> (Vec<Pair>, Vec<Warning>) {
        let mut reader = TsvReader::new(Cursor::new(data.as_bytes().to_vec()));
        let mut rows = reader.rows_resilient::<Pair>();
        let parsed: Vec<Pair> = rows.by_ref().collect();
        (parsed, rows.finish().unwrap())
    }

    #[test]
    fn new_reader_starts_at_line_one() {
        let reader = TsvReader::new(Cursor::new(b""));
        assert_eq!(reader.line_number(), 1);
    }

    #[test]
    fn headers_are_read_from_first_line() {
        let mut reader = TsvReader::new(Cursor::new(b"key\tvalue\na\t1\n"));
        assert_eq!(reader.headers().unwrap(), vec!["key", "value"]);
    }

    #[test]
    fn empty_input_yields_no_rows() {
        let (rows, warnings) = read_pairs("");
        assert!(rows.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn columns_are_matched_by_header_name() {
        let (rows, _) = read_pairs("value\tkey\n7\tseven\n");
        assert_eq!(
            rows,
            vec![Pair {
                key: "seven".to_string(),
                value: 7
            }]
        );
    }

    #[test]
    fn quotes_are_kept_verbatim() {
        let (rows, warnings) = read_pairs("key\tvalue\n\"quoted\tname\t1\n");
        assert!(rows.is_empty());
        assert_eq!(warnings.len(), 1);

        let (rows, _) = read_pairs("key\tvalue\n[\"Self\"]\t1\n");
        assert_eq!(rows[0].key, "[\"Self\"]");
    }

    #[test]
    fn unparsable_field_becomes_malformed_row() {
        let (rows, warnings) = read_pairs("key\tvalue\na\t1\nb\t\\N\nc\t3\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind(), "malformed_row");
        assert_eq!(warnings[0].line_number(), 3);
    }

    #[test]
    fn short_row_becomes_incomplete_row() {
        let (rows, warnings) = read_pairs("key\tvalue\na\t1\nb\nc\t3\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(
            warnings,
            vec![Warning::IncompleteRow {
                line_number: 3,
                expected: 2,
                found: 1,
            }]
        );
    }

    #[test]
    fn warnings_are_visible_before_finish() {
        let mut reader = TsvReader::new(Cursor::new(b"key\tvalue\nb\n".to_vec()));
        let mut rows = reader.rows_resilient::<Pair>();
        assert!(rows.next().is_none());
        assert_eq!(rows.warnings().len(), 1);
    }

    #[test]
    fn line_number_advances_past_consumed_rows() {
        let mut reader = TsvReader::new(Cursor::new(b"key\tvalue\na\t1\nb\t2\n".to_vec()));
        let mut rows = reader.rows_resilient::<Pair>();
        assert_eq!(rows.by_ref().count(), 2);
        rows.finish().unwrap();

        assert!(reader.line_number() >= 3);
    }
}
