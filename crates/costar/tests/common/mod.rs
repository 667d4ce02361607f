//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

pub const TITLES_HEADER: &str = "tconst\ttitleType\tprimaryTitle\toriginalTitle\tisAdult\tstartYear\tendYear\truntimeMinutes\tgenres";
pub const PRINCIPALS_HEADER: &str = "tconst\tordering\tnconst\tcategory\tjob\tcharacters";
pub const NAMES_HEADER: &str =
    "nconst\tprimaryName\tbirthYear\tdeathYear\tprimaryProfession\tknownForTitles";
pub const EPISODES_HEADER: &str = "tconst\tparentTconst\tseasonNumber\tepisodeNumber";

/// Titles of the sample dataset.
///
/// Only the two movies survive the default title type filter.
pub const SAMPLE_TITLES: &[&str] = &[
    "tt0000001\tmovie\tAlpha\tAlpha\t0\t1984\t\\N\t107\tDrama",
    "tt0000002\tmovie\tBeta \"Redux\"\tBeta\t0\t1990\t\\N\t95\tComedy,Drama",
    "tt0000003\ttvSeries\tThe Show\tThe Show\t0\t2001\t2004\t30\tComedy",
    "tt0000004\ttvEpisode\tPilot\tPilot\t0\t2001\t\\N\t30\tComedy",
    "tt0000005\tshort\tGamma\tGamma\t0\t1999\t\\N\t12\tShort",
];

/// Credits of the sample dataset.
///
/// Carol and Dave share Alpha, Dave and Erin share Beta, and Erin and Frank
/// share the Pilot episode.
pub const SAMPLE_PRINCIPALS: &[&str] = &[
    "tt0000001\t1\tnm0000001\tactress\t\\N\t[\"Ariel\"]",
    "tt0000001\t2\tnm0000002\tactor\t\\N\t[\"Ren\"]",
    "tt0000002\t1\tnm0000002\tself\t\\N\t\\N",
    "tt0000002\t2\tnm0000003\tactor\t\\N\t\\N",
    "tt0000002\t3\tnm0000009\tdirector\t\\N\t\\N",
    "tt0000004\t1\tnm0000003\tactor\t\\N\t\\N",
    "tt0000004\t2\tnm0000007\tactor\t\\N\t\\N",
    "tt0000005\t1\tnm0000004\tactor\t\\N\t\\N",
];

pub const SAMPLE_NAMES: &[&str] = &[
    "nm0000001\tCarol\t1950\t\\N\tactress\ttt0000001",
    "nm0000002\tDave\t1958\t\\N\tactor\ttt0000001,tt0000002",
    "nm0000003\tErin\t\\N\t\\N\tactress\ttt0000002",
    "nm0000007\tFrank\t\\N\t\\N\tactor\ttt0000004",
    "nm0000009\tGail\t\\N\t\\N\tdirector\ttt0000002",
];

pub const SAMPLE_EPISODES: &[&str] = &["tt0000004\ttt0000003\t1\t1"];

/// Config that also accepts series and episodes
pub const EPISODES_CONFIG: &str = "\
max-depth: 7
ingest:
  title-types: [movie, tvSeries, tvEpisode]
  categories: [actor, actress, self]
";

/// Write a TSV file with a header and rows.
pub fn write_tsv(dir: &Path, name: &str, header: &str, rows: &[&str]) {
    let mut content = String::from(header);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(dir.join(name), content).expect("Failed to write dataset file");
}

/// Write the four dataset files from explicit rows.
pub fn write_dataset(
    dir: &Path,
    titles: &[&str],
    principals: &[&str],
    names: &[&str],
    episodes: &[&str],
) {
    write_tsv(dir, "title.basics.tsv", TITLES_HEADER, titles);
    write_tsv(dir, "title.principals.tsv", PRINCIPALS_HEADER, principals);
    write_tsv(dir, "name.basics.tsv", NAMES_HEADER, names);
    write_tsv(dir, "title.episode.tsv", EPISODES_HEADER, episodes);
}

/// A temporary directory holding the sample dataset
pub fn sample_dataset() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp directory");
    write_dataset(
        temp.path(),
        SAMPLE_TITLES,
        SAMPLE_PRINCIPALS,
        SAMPLE_NAMES,
        SAMPLE_EPISODES,
    );
    temp
}

/// Run the costar binary against a data directory with colors disabled
pub fn run_costar(data_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_costar"))
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("COSTAR_COLOR")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute costar binary")
}
