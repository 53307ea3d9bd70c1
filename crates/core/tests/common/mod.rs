//! Shared test helpers for `cmdline_core` integration tests.

#![allow(unreachable_pub)]

use cmdline_core::{CommandLine, ParamKind, Token};

// ─── Parse-result helpers ────────────────────────────────────────────────────

/// `(kind, text)` pairs for every parameter, in order.
#[allow(dead_code)]
pub fn kinds_and_texts(cl: &CommandLine) -> Vec<(ParamKind, String)> {
    cl.parameters()
        .iter()
        .map(|p| (p.kind, p.text.clone()))
        .collect()
}

/// Arguments of the first command parameter whose text is `name`.
#[allow(dead_code)]
pub fn args_of(cl: &CommandLine, name: &str) -> Vec<String> {
    cl.parameters()
        .iter()
        .find(|p| p.kind.is_command() && p.text == name)
        .map(|p| p.arguments.clone())
        .unwrap_or_else(|| panic!("expected command {name}"))
}

/// Texts of general parameters, image path included.
#[allow(dead_code)]
pub fn general_texts(cl: &CommandLine) -> Vec<String> {
    cl.general_parameters().map(|p| p.text.clone()).collect()
}

// ─── Token helpers ───────────────────────────────────────────────────────────

/// Rebuild the input from raw spans plus the original inter-token gaps.
///
/// Panics if a gap contains anything other than whitespace or if a raw span
/// disagrees with its byte offsets.
#[allow(dead_code)]
pub fn reconstruct(input: &str, toks: &[Token<'_>]) -> String {
    let mut out = String::with_capacity(input.len());
    let mut cursor = 0usize;
    for tok in toks {
        assert!(tok.start >= cursor, "token {tok:?} overlaps previous");
        let gap = &input[cursor..tok.start];
        assert!(
            gap.chars().all(|c| (c as u32) <= 32),
            "non-whitespace gap {gap:?} before {tok:?}"
        );
        assert_eq!(tok.raw, &input[tok.start..tok.end]);
        out.push_str(gap);
        out.push_str(tok.raw);
        cursor = tok.end;
    }
    out.push_str(&input[cursor..]);
    out
}
