//! Typed records for the four IMDb dataset files.
//!
//! Column names follow the dataset headers (`tconst`, `titleType`, ...).
//! Only the identifier, type and name columns are required; the remaining
//! columns are carried along as optional strings and never cause a row to be
//! rejected.

use costar_tsv::de::nullable;
use serde::Deserialize;

/// A row of `title.basics.tsv`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleRow {
    /// Title identifier
    pub tconst: String,

    /// Title type (`movie`, `tvSeries`, `tvEpisode`, ...)
    pub title_type: String,

    /// Display title
    pub primary_title: String,

    /// Title in the original language
    #[serde(default, deserialize_with = "nullable")]
    pub original_title: Option<String>,

    /// `0` or `1`
    #[serde(default, deserialize_with = "nullable")]
    pub is_adult: Option<String>,

    /// Release year, or series start year
    #[serde(default, deserialize_with = "nullable")]
    pub start_year: Option<String>,

    /// Series end year
    #[serde(default, deserialize_with = "nullable")]
    pub end_year: Option<String>,

    /// Primary runtime in minutes
    #[serde(default, deserialize_with = "nullable")]
    pub runtime_minutes: Option<String>,

    /// Comma-separated genres
    #[serde(default, deserialize_with = "nullable")]
    pub genres: Option<String>,
}

impl TitleRow {
    /// Create a row with only the columns the graph uses
    pub fn new(
        tconst: impl Into<String>,
        title_type: impl Into<String>,
        primary_title: impl Into<String>,
    ) -> Self {
        Self {
            tconst: tconst.into(),
            title_type: title_type.into(),
            primary_title: primary_title.into(),
            original_title: None,
            is_adult: None,
            start_year: None,
            end_year: None,
            runtime_minutes: None,
            genres: None,
        }
    }
}

/// A row of `title.principals.tsv`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrincipalRow {
    /// Title identifier
    pub tconst: String,

    /// Billing order within the title
    pub ordering: u32,

    /// Person identifier
    pub nconst: String,

    /// Role category (`actor`, `actress`, `self`, `director`, ...)
    pub category: String,

    /// Job title, when the category is not specific enough
    #[serde(default, deserialize_with = "nullable")]
    pub job: Option<String>,

    /// Character names as a JSON-style list
    #[serde(default, deserialize_with = "nullable")]
    pub characters: Option<String>,
}

impl PrincipalRow {
    /// Create a row with only the columns the graph uses
    pub fn new(
        tconst: impl Into<String>,
        nconst: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            tconst: tconst.into(),
            ordering: 1,
            nconst: nconst.into(),
            category: category.into(),
            job: None,
            characters: None,
        }
    }
}

/// A row of `name.basics.tsv`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRow {
    /// Person identifier
    pub nconst: String,

    /// Display name
    pub primary_name: String,

    /// Birth year
    #[serde(default, deserialize_with = "nullable")]
    pub birth_year: Option<String>,

    /// Death year
    #[serde(default, deserialize_with = "nullable")]
    pub death_year: Option<String>,

    /// Comma-separated professions
    #[serde(default, deserialize_with = "nullable")]
    pub primary_profession: Option<String>,

    /// Comma-separated title identifiers
    #[serde(default, deserialize_with = "nullable")]
    pub known_for_titles: Option<String>,
}

impl NameRow {
    /// Create a row with only the columns the graph uses
    pub fn new(nconst: impl Into<String>, primary_name: impl Into<String>) -> Self {
        Self {
            nconst: nconst.into(),
            primary_name: primary_name.into(),
            birth_year: None,
            death_year: None,
            primary_profession: None,
            known_for_titles: None,
        }
    }
}

/// A row of `title.episode.tsv`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeRow {
    /// Episode title identifier
    pub tconst: String,

    /// Identifier of the parent series
    pub parent_tconst: String,

    /// Season number
    #[serde(default, deserialize_with = "nullable")]
    pub season_number: Option<String>,

    /// Episode number within the season
    #[serde(default, deserialize_with = "nullable")]
    pub episode_number: Option<String>,
}

impl EpisodeRow {
    /// Create a row with only the columns the graph uses
    pub fn new(tconst: impl Into<String>, parent_tconst: impl Into<String>) -> Self {
        Self {
            tconst: tconst.into(),
            parent_tconst: parent_tconst.into(),
            season_number: None,
            episode_number: None,
        }
    }
}
