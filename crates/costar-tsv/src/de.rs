//! Field helpers for dataset columns.
//!
//! IMDb dumps write `\N` for a missing value. [`nullable`] maps that marker
//! (and empty fields) to `None` and parses everything else.

use serde::de::{self, Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

/// Marker used by the dataset dumps for an absent value.
pub const NULL_MARKER: &str = "\\N";

/// Deserializes an optional column that may hold the `\N` marker.
///
/// Use with `#[serde(deserialize_with = "costar_tsv::de::nullable")]`.
///
/// # Errors
///
/// Fails when a present value does not parse as `T`.
///
/// # Examples
///
/// ```
/// use costar_tsv::TsvReader;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Row {
///     #[serde(rename = "startYear", deserialize_with = "costar_tsv::de::nullable")]
///     start_year: Option<u16>,
/// }
///
/// let mut reader = TsvReader::new("startYear\n1994\n\\N\n".as_bytes());
/// let years: Vec<Option<u16>> = reader
///     .rows_resilient::<Row>()
///     .map(|row| row.start_year)
///     .collect();
/// assert_eq!(years, vec![Some(1994), None]);
/// ```
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = String::deserialize(deserializer)?;
    if raw.is_empty() || raw == NULL_MARKER {
        return Ok(None);
    }
    raw.parse().map(Some).map_err(de::Error::custom)
}
