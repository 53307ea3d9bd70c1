//! Tests for parameter assembly: argument attachment, compound blocks,
//! image path derivation, counts, and re-parse behaviour.
//!
//! Query-specific tests live in `query.rs`.

mod common;

use cmdline_core::{CmdLineError, CommandLine, ParamKind, parse_str, to_pretty_json};
use common::{args_of, general_texts, kinds_and_texts};

// ─── 1. Basic assembly ───────────────────────────────────────────────────────

#[test]
fn empty_input_has_no_parameters() {
    let cl = parse_str("");
    assert_eq!(cl.count(), 0);
    assert_eq!(cl.command_count(), 0);
    assert_eq!(cl.image_path(), "");
    assert!(cl.parameters().is_empty());
}

#[test]
fn short_command_with_argument() {
    let cl = parse_str("-f file1.txt");
    assert_eq!(
        kinds_and_texts(&cl),
        vec![
            (ParamKind::ShortCommand, "f".to_string()),
            (ParamKind::General, "file1.txt".to_string()),
        ]
    );
    assert_eq!(args_of(&cl, "f"), ["file1.txt"]);
    assert!(cl.parameter(1).unwrap().arguments.is_empty());
}

#[test]
fn long_command_with_quoted_arguments() {
    let cl = parse_str(r#"--name "value one" "value two""#);
    assert_eq!(cl.command_count(), 1);
    assert_eq!(cl.count(), 3);
    assert_eq!(args_of(&cl, "name"), ["value one", "value two"]);
    assert_eq!(general_texts(&cl), ["value one", "value two"]);
}

#[test]
fn compound_block_yields_one_parameter_per_letter() {
    let cl = parse_str("-abc");
    assert_eq!(
        kinds_and_texts(&cl),
        vec![
            (ParamKind::ShortCommand, "a".to_string()),
            (ParamKind::ShortCommand, "b".to_string()),
            (ParamKind::ShortCommand, "c".to_string()),
        ]
    );
    assert!(cl.parameters().iter().all(|p| p.arguments.is_empty()));
    assert_eq!(cl.command_count(), 3);
}

#[test]
fn compound_block_arguments_attach_to_last_letter() {
    let cl = parse_str("-xvf archive.tar");
    assert!(cl.parameter(0).unwrap().arguments.is_empty());
    assert!(cl.parameter(1).unwrap().arguments.is_empty());
    assert_eq!(cl.parameter(2).unwrap().arguments, ["archive.tar"]);
}

// ─── 2. Argument absorption ──────────────────────────────────────────────────

#[test]
fn every_trailing_general_becomes_an_argument() {
    let cl = parse_str("prog -i a b --out c d e");
    assert_eq!(args_of(&cl, "i"), ["a", "b"]);
    assert_eq!(args_of(&cl, "out"), ["c", "d", "e"]);
    assert_eq!(cl.count(), 8);
    assert_eq!(cl.command_count(), 2);
}

#[test]
fn commas_are_ordinary_text() {
    let cl = parse_str("-l a,b, c");
    assert_eq!(args_of(&cl, "l"), ["a,b,", "c"]);
}

#[test]
fn repeated_commands_get_separate_parameters() {
    let cl = parse_str("-v a -v b");
    assert_eq!(cl.command_count(), 2);
    assert_eq!(cl.parameter(0).unwrap().arguments, ["a"]);
    assert_eq!(cl.parameter(2).unwrap().arguments, ["b"]);
}

#[test]
fn bare_dashes_are_arguments() {
    let cl = parse_str("-o - --");
    assert_eq!(args_of(&cl, "o"), ["-", "--"]);
}

// ─── 3. Image path ───────────────────────────────────────────────────────────

#[test]
fn image_path_is_leading_general() {
    let cl = parse_str(r#""C:\Program Files\app.exe" -q"#);
    // Escapes inside quotes still apply: `\P` passes `P` through.
    assert_eq!(cl.image_path(), "C:Program Filesapp.exe");

    let cl = parse_str("/usr/bin/app -q");
    assert_eq!(cl.image_path(), "/usr/bin/app");
}

#[test]
fn image_path_empty_when_first_is_command() {
    let cl = parse_str("-q /usr/bin/app");
    assert_eq!(cl.image_path(), "");
}

#[test]
fn image_path_matches_first_general_parameter() {
    for input in ["", "a", "-a", "--a b", "'x y' -z", "   - b"] {
        let cl = parse_str(input);
        let expected = match cl.parameters().as_slice().first() {
            Some(p) if p.kind == ParamKind::General => p.text.as_str(),
            _ => "",
        };
        assert_eq!(cl.image_path(), expected, "input {input:?}");
    }
}

// ─── 4. Indexing errors ──────────────────────────────────────────────────────

#[test]
fn out_of_range_index_is_an_error() {
    let cl = parse_str("prog -v");
    assert_eq!(
        cl.parameter(5).unwrap_err(),
        CmdLineError::IndexOutOfBounds { index: 5, len: 2 }
    );
    assert!(matches!(
        cl.parameter(1).unwrap().argument(0),
        Err(CmdLineError::IndexOutOfBounds { index: 0, len: 0 })
    ));
}

// ─── 5. Re-parse and idempotence ─────────────────────────────────────────────

#[test]
fn parsing_twice_is_identical() {
    let input = r#"prog -ab --name "x y" z -c"#;
    assert_eq!(parse_str(input), parse_str(input));
}

#[test]
fn reparse_discards_previous_parameters() {
    let mut cl = CommandLine::new();
    cl.parse("prog -a 1 -b 2");
    assert_eq!(cl.count(), 5);
    cl.parse("other");
    assert_eq!(cl.count(), 1);
    assert_eq!(cl.command_count(), 0);
    assert_eq!(cl.image_path(), "other");
    assert!(!cl.has_short('a'));
}

// ─── 6. Serialization ────────────────────────────────────────────────────────

#[test]
fn json_dump_shape() {
    let cl = parse_str("prog --name value");
    let json: serde_json::Value = serde_json::from_str(&to_pretty_json(&cl)).unwrap();
    assert_eq!(json["image_path"], "prog");
    assert_eq!(json["count"], 3);
    assert_eq!(json["command_count"], 1);
    assert_eq!(json["parameters"][1]["kind"], "long_command");
    assert_eq!(json["parameters"][1]["arguments"][0], "value");
    assert_eq!(json["parameters"][2]["kind"], "general");
}

// ─── 7. Host command line ────────────────────────────────────────────────────

#[test]
fn process_command_line_starts_with_image_path() {
    let cl = CommandLine::from_env();
    assert!(!cl.image_path().is_empty());
    assert_eq!(cl, parse_str(&cmdline_core::process_command_line()));
}
