//! Read-only lookups over a parsed [`CommandLine`].
//!
//! Short commands match case-sensitively, long commands case-insensitively.
//! The `data_for_*` queries aggregate over *every* occurrence of a command,
//! concatenating arguments in encounter order.

use crate::grammar::params::{ParamKind, Parameter};
use crate::grammar::parser::CommandLine;

/// Case-insensitive string equality using Unicode lowercase folding.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

fn is_short(p: &Parameter, letter: char) -> bool {
    p.kind == ParamKind::ShortCommand && p.text.chars().eq(std::iter::once(letter))
}

fn is_long(p: &Parameter, name: &str) -> bool {
    p.kind == ParamKind::LongCommand && eq_ignore_case(&p.text, name)
}

impl CommandLine {
    /// Index of the first parameter of any kind whose text matches.
    pub fn find_index(&self, text: &str, case_sensitive: bool) -> Option<usize> {
        self.parameters().iter().position(|p| {
            if case_sensitive {
                p.text == text
            } else {
                eq_ignore_case(&p.text, text)
            }
        })
    }

    /// Whether `-letter` occurs.
    pub fn has_short(&self, letter: char) -> bool {
        self.parameters().iter().any(|p| is_short(p, letter))
    }

    /// Whether `--name` occurs, ignoring case.
    pub fn has_long(&self, name: &str) -> bool {
        self.parameters().iter().any(|p| is_long(p, name))
    }

    /// Whether either form occurs.
    pub fn has_either(&self, letter: char, name: &str) -> bool {
        self.parameters()
            .iter()
            .any(|p| is_short(p, letter) || is_long(p, name))
    }

    /// Arguments of every `-letter` occurrence, or `None` if it never occurs.
    pub fn data_for_short(&self, letter: char) -> Option<Parameter> {
        self.aggregate(|p| is_short(p, letter))
    }

    /// Arguments of every `--name` occurrence, or `None` if it never occurs.
    pub fn data_for_long(&self, name: &str) -> Option<Parameter> {
        self.aggregate(|p| is_long(p, name))
    }

    /// Arguments of every occurrence of either form.
    ///
    /// The result has kind [`ParamKind::Both`] and the long form's text when
    /// both forms occur; otherwise the kind and text of the form that does.
    pub fn data_for_either(&self, letter: char, name: &str) -> Option<Parameter> {
        self.aggregate(|p| is_short(p, letter) || is_long(p, name))
    }

    fn aggregate(&self, matches: impl Fn(&Parameter) -> bool) -> Option<Parameter> {
        let mut short: Option<&str> = None;
        let mut long: Option<&str> = None;
        let mut arguments = Vec::new();

        for p in self.parameters().iter().filter(|p| matches(p)) {
            match p.kind {
                ParamKind::ShortCommand => short = short.or(Some(p.text.as_str())),
                ParamKind::LongCommand => long = long.or(Some(p.text.as_str())),
                _ => {}
            }
            arguments.extend(p.arguments.iter().cloned());
        }

        let (kind, text) = match (short, long) {
            (Some(_), Some(l)) => (ParamKind::Both, l),
            (Some(s), None) => (ParamKind::ShortCommand, s),
            (None, Some(l)) => (ParamKind::LongCommand, l),
            (None, None) => return None,
        };
        Some(Parameter {
            kind,
            text: text.to_string(),
            arguments,
        })
    }
}
