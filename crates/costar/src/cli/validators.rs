//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for invalid values.

use crate::config::MAX_DEPTH_LIMIT;

/// Validate a node identifier such as `nm0000102` or `tt0087277`.
///
/// Identifiers are opaque, so only emptiness and embedded whitespace are
/// rejected. Surrounding whitespace is trimmed.
pub fn validate_node_id(s: &str) -> Result<String, String> {
    let s = s.trim();

    if s.is_empty() {
        return Err("Identifier cannot be empty".to_string());
    }

    if s.chars().any(char::is_whitespace) {
        return Err(format!("Invalid identifier '{s}': identifiers cannot contain whitespace"));
    }

    Ok(s.to_string())
}

/// Validate a hop budget given with `--depth`.
pub fn validate_depth(s: &str) -> Result<usize, String> {
    let depth: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid depth '{s}': expected a non-negative integer"))?;

    if depth > MAX_DEPTH_LIMIT {
        return Err(format!("Depth {depth} exceeds the maximum of {MAX_DEPTH_LIMIT}"));
    }

    Ok(depth)
}
