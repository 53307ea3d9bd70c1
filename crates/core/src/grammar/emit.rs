//! Emitter — rebuilds command-line text from an argument vector.
//!
//! Platforms that hand a process its arguments pre-split lose the original
//! quoting. [`join_args`] re-quotes each argument so that tokenizing the
//! joined string yields the same parameters back.

use super::lexer::{CharClass, ESCAPE, INTRODUCER};

/// Quote `text` so it tokenizes as exactly one general token with that text.
///
/// Whitespace, quotes, and escape characters are escaped, and so is a
/// leading introducer so `-v` stays literal text instead of a command.
pub fn quote_literal(text: &str) -> String {
    if text.is_empty() {
        return "\"\"".to_string();
    }
    let mut out = String::with_capacity(text.len() + 2);
    for (i, c) in text.chars().enumerate() {
        let escape = match CharClass::of(c) {
            CharClass::Whitespace
            | CharClass::SingleQuote
            | CharClass::DoubleQuote
            | CharClass::Escape => true,
            CharClass::Introducer => i == 0,
            _ => false,
        };
        if escape {
            out.push(ESCAPE);
        }
        out.push(c);
    }
    out
}

/// Whether `arg` lexes as a short block (`-abc`) or long command (`--name`).
pub fn is_command_shaped(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix(INTRODUCER) else {
        return false;
    };
    if let Some(name) = rest.strip_prefix(INTRODUCER) {
        let mut chars = name.chars().map(CharClass::of);
        return matches!(chars.next(), Some(CharClass::Letter | CharClass::Word))
            && chars.all(|c| {
                matches!(
                    c,
                    CharClass::Letter | CharClass::Word | CharClass::Introducer
                )
            });
    }
    !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphabetic())
}

/// Join arguments into one command line.
///
/// Command-shaped arguments are kept verbatim; everything else is passed
/// through [`quote_literal`].
pub fn join_args<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for arg in args {
        push_arg(&mut out, arg.as_ref(), false);
    }
    out
}

/// Join a full argument vector, image path first, into one command line.
///
/// Like [`join_args`], except the first argument is always quoted as text.
/// It names the program, so a login shell's `-bash` must stay the image path
/// rather than become a short-command block.
pub fn join_command_line<I, S>(argv: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, arg) in argv.into_iter().enumerate() {
        push_arg(&mut out, arg.as_ref(), i == 0);
    }
    out
}

fn push_arg(out: &mut String, arg: &str, literal: bool) {
    if !out.is_empty() {
        out.push(' ');
    }
    if !literal && is_command_shaped(arg) {
        out.push_str(arg);
    } else {
        out.push_str(&quote_literal(arg));
    }
}
