//! Output formatting for the connection report.
//!
//! Text output mirrors the classic "six degrees" layout:
//!
//! ```text
//! [nm0000102 tt0087277 nm0001434]
//! ============================
//! Kevin Bacon --> Lori Singer
//! ============================
//! Footloose: Kevin Bacon (actor) --> Lori Singer (actress)
//! ```
//!
//! JSON output serializes the same information for programmatic use.

pub mod color;

use crate::app::Connection;
use crate::report::PathReport;
use serde::Serialize;
use std::env;
use std::io::{self, Write};

pub use color::{info, warning};

use color::{bold, dimmed};

const RULE: &str = "============================";

/// Configuration for output formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create an `OutputConfig` with explicit values.
    #[must_use]
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Create an `OutputConfig` by reading from environment variables.
    ///
    /// Reads:
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `COSTAR_COLOR`: Set to "0" or "false" to disable colors (default: true)
    #[must_use]
    pub fn from_env() -> Self {
        let no_color = env::var_os("NO_COLOR").is_some();
        let disabled = env::var("COSTAR_COLOR")
            .map(|value| matches!(value.to_ascii_lowercase().as_str(), "0" | "false"))
            .unwrap_or(false);

        Self::new(!no_color && !disabled)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Render a connection as human-readable text.
#[must_use]
pub fn render_text(connection: &Connection, config: &OutputConfig) -> String {
    match connection {
        Connection::Found(report) => render_report(report, config),
        Connection::NotFound { depth } => {
            warning(&format!("No connection found within {depth} jumps"), config) + "\n"
        }
    }
}

fn render_report(report: &PathReport, config: &OutputConfig) -> String {
    let ids: Vec<String> = report
        .path
        .iter()
        .map(|id| info(id.as_str(), config))
        .collect();

    let mut out = format!("[{}]\n", ids.join(" "));
    out.push_str(&dimmed(RULE, config));
    out.push('\n');
    out.push_str(&bold(&format!("{} --> {}", report.start, report.end), config));
    out.push('\n');
    out.push_str(&dimmed(RULE, config));
    out.push('\n');

    for link in &report.links {
        out.push_str(&format!(
            "{}: {} {} --> {} {}\n",
            bold(&link.work, config),
            link.from.name,
            dimmed(&format!("({})", link.from.role), config),
            link.to.name,
            dimmed(&format!("({})", link.to.role), config),
        ));
    }

    out
}

#[derive(Serialize)]
struct JsonConnection<'a> {
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    depth: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hops: Option<usize>,
    #[serde(flatten)]
    report: Option<&'a PathReport>,
}

/// Render a connection as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(connection: &Connection) -> serde_json::Result<String> {
    let value = match connection {
        Connection::Found(report) => JsonConnection {
            found: true,
            depth: None,
            hops: Some(report.hops()),
            report: Some(report),
        },
        Connection::NotFound { depth } => JsonConnection {
            found: false,
            depth: Some(*depth),
            hops: None,
            report: None,
        },
    };
    serde_json::to_string_pretty(&value)
}

/// Write a connection to stdout in the requested format.
///
/// # Errors
///
/// Returns an error if serialization or writing to stdout fails.
pub fn print_connection(
    connection: &Connection,
    json: bool,
    config: &OutputConfig,
) -> io::Result<()> {
    let rendered = if json {
        render_json(connection)? + "\n"
    } else {
        render_text(connection, config)
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NodeId;
    use crate::report::{Collaboration, Credit};

    fn plain() -> OutputConfig {
        OutputConfig::new(false)
    }

    fn sample_report() -> PathReport {
        PathReport {
            path: vec![
                NodeId::new("nm0000102"),
                NodeId::new("tt0087277"),
                NodeId::new("nm0001434"),
            ],
            start: "Kevin Bacon".to_string(),
            end: "Lori Singer".to_string(),
            links: vec![Collaboration {
                work: "Footloose".to_string(),
                from: Credit {
                    name: "Kevin Bacon".to_string(),
                    role: "actor".to_string(),
                },
                to: Credit {
                    name: "Lori Singer".to_string(),
                    role: "actress".to_string(),
                },
            }],
        }
    }

    #[test]
    fn text_report_lists_path_header_and_links() {
        let text = render_text(&Connection::Found(sample_report()), &plain());

        assert_eq!(
            text,
            "[nm0000102 tt0087277 nm0001434]\n\
             ============================\n\
             Kevin Bacon --> Lori Singer\n\
             ============================\n\
             Footloose: Kevin Bacon (actor) --> Lori Singer (actress)\n"
        );
    }

    #[test]
    fn text_not_found_names_depth() {
        let text = render_text(&Connection::NotFound { depth: 7 }, &plain());
        assert_eq!(text, "No connection found within 7 jumps\n");
    }

    #[test]
    fn json_found_flattens_report() {
        let json = render_json(&Connection::Found(sample_report())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["found"], true);
        assert_eq!(value["hops"], 2);
        assert_eq!(value["path"][1], "tt0087277");
        assert_eq!(value["links"][0]["from"]["role"], "actor");
        assert!(value.get("depth").is_none());
    }

    #[test]
    fn json_not_found_reports_depth() {
        let json = render_json(&Connection::NotFound { depth: 3 }).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["found"], false);
        assert_eq!(value["depth"], 3);
        assert!(value.get("path").is_none());
    }
}
