//! JSON output for parse results.
//!
//! The layout is the serde derive of [`CommandLine`]: `image_path`, `count`,
//! `command_count`, then `parameters` with snake_case `kind` names.

use super::parser::CommandLine;

/// Pretty-printed JSON for a parsed command line.
pub fn to_pretty_json(cl: &CommandLine) -> String {
    // Only strings, integers, and enums with unit variants are serialized.
    serde_json::to_string_pretty(cl).expect("CommandLine serializes to JSON")
}
