//! Quote and escape resolution for general tokens.
//!
//! A token's raw span may mix bare text, `'single'` and `"double"` quoted
//! runs, and `\` escapes. Resolution runs independently of the lexer, over the
//! raw span alone:
//!
//! - a quote opens a literal run that only its matching quote (or `\`) ends;
//! - `\` always passes the next character through, inside or outside quotes;
//! - quote and escape markers themselves are dropped from the output;
//! - a trailing `\` with nothing after it is kept literally.
//!
//! Adjacent quoted runs simply join: `"a""b"` resolves to `ab`.

use crate::grammar::lexer::{DOUBLE_QUOTE, ESCAPE, SINGLE_QUOTE};

/// Resolver sub-state while walking a raw span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    InSingle,
    InDouble,
    EscapeNone,
    EscapeInSingle,
    EscapeInDouble,
}

/// Resolve quoting and escaping in `raw`, returning the logical text.
#[must_use]
pub fn resolve(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut state = Quote::None;

    for c in raw.chars() {
        state = match state {
            Quote::None => match c {
                SINGLE_QUOTE => Quote::InSingle,
                DOUBLE_QUOTE => Quote::InDouble,
                ESCAPE => Quote::EscapeNone,
                _ => {
                    out.push(c);
                    Quote::None
                }
            },
            Quote::InSingle => match c {
                SINGLE_QUOTE => Quote::None,
                ESCAPE => Quote::EscapeInSingle,
                _ => {
                    out.push(c);
                    Quote::InSingle
                }
            },
            Quote::InDouble => match c {
                DOUBLE_QUOTE => Quote::None,
                ESCAPE => Quote::EscapeInDouble,
                _ => {
                    out.push(c);
                    Quote::InDouble
                }
            },
            Quote::EscapeNone => {
                out.push(c);
                Quote::None
            }
            Quote::EscapeInSingle => {
                out.push(c);
                Quote::InSingle
            }
            Quote::EscapeInDouble => {
                out.push(c);
                Quote::InDouble
            }
        };
    }

    if matches!(
        state,
        Quote::EscapeNone | Quote::EscapeInSingle | Quote::EscapeInDouble
    ) {
        out.push(ESCAPE);
    }
    out
}
