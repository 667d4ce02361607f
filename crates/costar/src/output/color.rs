//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Info/Reference: cyan    (node IDs)
//!   - Warning:        yellow  (no connection found)
//!   - Muted:          dimmed  (separator rules, roles)
//!   - Emphasis:       bold    (endpoint header, work titles)

use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "info" color (cyan) to text.
pub fn info(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

/// Apply semantic "warning" color (yellow) to text.
pub fn warning(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.yellow().to_string()
}

/// Dim text that frames the output.
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Emphasize text.
pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}
