//! Tests for the query API over parsed command lines.

use cmdline_core::{ParamKind, parse_str};

// ─── Presence ────────────────────────────────────────────────────────────────

#[test]
fn short_lookup_is_case_sensitive() {
    let cl = parse_str("prog -v");
    assert!(cl.has_short('v'));
    assert!(!cl.has_short('V'));
}

#[test]
fn long_lookup_ignores_case() {
    let cl = parse_str("prog --verbose");
    assert!(cl.has_long("Verbose"));
    assert!(cl.has_long("VERBOSE"));
    assert!(!cl.has_long("verb"));
}

#[test]
fn has_either_checks_both_forms() {
    assert!(parse_str("-v").has_either('v', "verbose"));
    assert!(parse_str("--verbose").has_either('v', "verbose"));
    assert!(!parse_str("-q --quiet").has_either('v', "verbose"));
}

#[test]
fn general_text_is_not_a_command() {
    let cl = parse_str("prog v verbose");
    assert!(!cl.has_short('v'));
    assert!(!cl.has_long("verbose"));
}

#[test]
fn find_index_respects_case_flag() {
    let cl = parse_str("prog --Name File.TXT");
    assert_eq!(cl.find_index("Name", true), Some(1));
    assert_eq!(cl.find_index("name", true), None);
    assert_eq!(cl.find_index("name", false), Some(1));
    assert_eq!(cl.find_index("file.txt", false), Some(2));
    assert_eq!(cl.find_index("missing", false), None);
}

#[test]
fn find_index_returns_first_match_of_any_kind() {
    // "v" appears as an argument text before it appears as a command.
    let cl = parse_str("prog v -v");
    assert_eq!(cl.find_index("v", true), Some(1));
}

// ─── Aggregation ─────────────────────────────────────────────────────────────

#[test]
fn data_for_short_aggregates_all_occurrences() {
    let cl = parse_str("-i a b -o x -i c");
    let data = cl.data_for_short('i').unwrap();
    assert_eq!(data.kind, ParamKind::ShortCommand);
    assert_eq!(data.text, "i");
    assert_eq!(data.arguments, ["a", "b", "c"]);
}

#[test]
fn data_for_long_aggregates_case_insensitively() {
    let cl = parse_str("--Include a --INCLUDE b");
    let data = cl.data_for_long("include").unwrap();
    assert_eq!(data.kind, ParamKind::LongCommand);
    assert_eq!(data.text, "Include");
    assert_eq!(data.arguments, ["a", "b"]);
}

#[test]
fn data_for_missing_command_is_none() {
    let cl = parse_str("prog -a x");
    assert!(cl.data_for_short('b').is_none());
    assert!(cl.data_for_long("b").is_none());
    assert!(cl.data_for_either('b', "bee").is_none());
}

#[test]
fn data_for_present_command_without_arguments() {
    let cl = parse_str("-q");
    let data = cl.data_for_short('q').unwrap();
    assert!(data.arguments.is_empty());
}

#[test]
fn data_for_either_with_only_short_form() {
    let cl = parse_str("-v a -v b");
    let data = cl.data_for_either('v', "verbose").unwrap();
    assert_eq!(data.kind, ParamKind::ShortCommand);
    assert_eq!(data.text, "v");
    assert_eq!(data.arguments, ["a", "b"]);
}

#[test]
fn data_for_either_with_only_long_form() {
    let cl = parse_str("--verbose 2");
    let data = cl.data_for_either('v', "verbose").unwrap();
    assert_eq!(data.kind, ParamKind::LongCommand);
    assert_eq!(data.text, "verbose");
    assert_eq!(data.arguments, ["2"]);
}

#[test]
fn data_for_either_with_both_forms() {
    let cl = parse_str("-v 1 --verbose 2 -v 3");
    let data = cl.data_for_either('v', "verbose").unwrap();
    assert_eq!(data.kind, ParamKind::Both);
    assert_eq!(data.text, "verbose");
    assert_eq!(data.arguments, ["1", "2", "3"]);
}

#[test]
fn queries_do_not_mutate_the_result() {
    let cl = parse_str("-v 1 --verbose 2");
    let before = cl.clone();
    let _ = cl.data_for_either('v', "verbose");
    assert_eq!(cl, before);
    assert!(cl.parameters().iter().all(|p| p.kind != ParamKind::Both));
}
