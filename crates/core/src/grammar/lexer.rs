//! Character-level state machine that splits a raw command line into tokens.
//!
//! Each character is classified into a [`CharClass`], and the pair
//! `(State, CharClass)` is fed to [`transition`], a pure function returning
//! the next [`State`] and the [`Action`] to take on the token being built.
//! Quoting and escaping only decide *where* tokens end here; the logical text
//! of a general token is resolved afterwards by [`crate::unquote::resolve`].

use serde::Serialize;

use crate::error::CmdLineError;
use crate::unquote::resolve;

/// Command introducer (`-` for short, `--` for long commands).
pub const INTRODUCER: char = '-';
/// Opens and closes a single-quoted literal run.
pub const SINGLE_QUOTE: char = '\'';
/// Opens and closes a double-quoted literal run.
pub const DOUBLE_QUOTE: char = '"';
/// Passes the following character through literally.
pub const ESCAPE: char = '\\';

/// Classification of a lexer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Free-standing text (possibly quoted or escaped).
    General,
    /// A single command letter introduced by `-`.
    ShortCommand,
    /// A command name introduced by `--`.
    LongCommand,
}

/// Character class, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Any character with a code point of 32 or below.
    Whitespace,
    /// `-`
    Introducer,
    /// `'`
    SingleQuote,
    /// `"`
    DoubleQuote,
    /// `\`
    Escape,
    /// ASCII `a-z` / `A-Z`.
    Letter,
    /// ASCII digit or `_`.
    Word,
    /// Everything else.
    Other,
}

impl CharClass {
    /// Every class, for table-driven tests.
    pub const ALL: [CharClass; 8] = [
        CharClass::Whitespace,
        CharClass::Introducer,
        CharClass::SingleQuote,
        CharClass::DoubleQuote,
        CharClass::Escape,
        CharClass::Letter,
        CharClass::Word,
        CharClass::Other,
    ];

    /// Classify a single character.
    pub fn of(c: char) -> Self {
        match c {
            c if (c as u32) <= 32 => CharClass::Whitespace,
            INTRODUCER => CharClass::Introducer,
            SINGLE_QUOTE => CharClass::SingleQuote,
            DOUBLE_QUOTE => CharClass::DoubleQuote,
            ESCAPE => CharClass::Escape,
            c if c.is_ascii_alphabetic() => CharClass::Letter,
            c if c.is_ascii_digit() || c == '_' => CharClass::Word,
            _ => CharClass::Other,
        }
    }
}

/// Lexer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Between tokens.
    WhiteSpace,
    /// One `-` seen.
    CommandIntro,
    /// `--` seen.
    CommandIntroDouble,
    /// `-` followed by one or more letters.
    CommandShort,
    /// `--` followed by a name.
    CommandLong,
    /// Inside a `'...'` run.
    QuotedSingle,
    /// Inside a `"..."` run.
    QuotedDouble,
    /// After `\` outside quotes.
    Escape,
    /// After `\` inside a `'...'` run.
    EscapeQuotedSingle,
    /// After `\` inside a `"..."` run.
    EscapeQuotedDouble,
    /// Plain text.
    Text,
}

impl State {
    /// Every state, for table-driven tests.
    pub const ALL: [State; 11] = [
        State::WhiteSpace,
        State::CommandIntro,
        State::CommandIntroDouble,
        State::CommandShort,
        State::CommandLong,
        State::QuotedSingle,
        State::QuotedDouble,
        State::Escape,
        State::EscapeQuotedSingle,
        State::EscapeQuotedDouble,
        State::Text,
    ];

    /// Kind of the token left open when input ends in this state, if any.
    pub fn pending_kind(self) -> Option<TokenKind> {
        match self {
            State::WhiteSpace => None,
            State::CommandShort => Some(TokenKind::ShortCommand),
            State::CommandLong => Some(TokenKind::LongCommand),
            _ => Some(TokenKind::General),
        }
    }
}

/// What a transition does to the token under construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Drop the character; no token is open.
    Skip,
    /// Open a new token at this character.
    Start,
    /// Append the character to the open token.
    Absorb,
    /// Close the open token (excluding this character) with the given kind.
    Emit(TokenKind),
}

/// The lexer transition table.
pub fn transition(state: State, class: CharClass) -> (State, Action) {
    use Action::{Absorb, Emit, Skip, Start};
    use CharClass as C;

    match state {
        State::WhiteSpace => match class {
            C::Whitespace => (State::WhiteSpace, Skip),
            C::Introducer => (State::CommandIntro, Start),
            C::SingleQuote => (State::QuotedSingle, Start),
            C::DoubleQuote => (State::QuotedDouble, Start),
            C::Escape => (State::Escape, Start),
            C::Letter | C::Word | C::Other => (State::Text, Start),
        },
        State::CommandIntro => match class {
            C::Whitespace => (State::WhiteSpace, Emit(TokenKind::General)),
            C::Introducer => (State::CommandIntroDouble, Absorb),
            C::Letter => (State::CommandShort, Absorb),
            C::Word | C::Other => (State::Text, Absorb),
            _ => (open_quote_or_escape(class), Absorb),
        },
        State::CommandIntroDouble => match class {
            C::Whitespace => (State::WhiteSpace, Emit(TokenKind::General)),
            C::Introducer | C::Other => (State::Text, Absorb),
            C::Letter | C::Word => (State::CommandLong, Absorb),
            _ => (open_quote_or_escape(class), Absorb),
        },
        State::CommandShort => match class {
            C::Whitespace => (State::WhiteSpace, Emit(TokenKind::ShortCommand)),
            C::Letter => (State::CommandShort, Absorb),
            C::Introducer | C::Word | C::Other => (State::Text, Absorb),
            _ => (open_quote_or_escape(class), Absorb),
        },
        State::CommandLong => match class {
            C::Whitespace => (State::WhiteSpace, Emit(TokenKind::LongCommand)),
            C::Introducer | C::Letter | C::Word => (State::CommandLong, Absorb),
            C::Other => (State::Text, Absorb),
            _ => (open_quote_or_escape(class), Absorb),
        },
        State::QuotedSingle => match class {
            C::SingleQuote => (State::Text, Absorb),
            C::Escape => (State::EscapeQuotedSingle, Absorb),
            _ => (State::QuotedSingle, Absorb),
        },
        State::QuotedDouble => match class {
            C::DoubleQuote => (State::Text, Absorb),
            C::Escape => (State::EscapeQuotedDouble, Absorb),
            _ => (State::QuotedDouble, Absorb),
        },
        State::Escape => (State::Text, Absorb),
        State::EscapeQuotedSingle => (State::QuotedSingle, Absorb),
        State::EscapeQuotedDouble => (State::QuotedDouble, Absorb),
        State::Text => match class {
            C::Whitespace => (State::WhiteSpace, Emit(TokenKind::General)),
            C::Introducer | C::Letter | C::Word | C::Other => (State::Text, Absorb),
            _ => (open_quote_or_escape(class), Absorb),
        },
    }
}

/// Target state for a quote or escape character met outside quotes.
fn open_quote_or_escape(class: CharClass) -> State {
    match class {
        CharClass::SingleQuote => State::QuotedSingle,
        CharClass::DoubleQuote => State::QuotedDouble,
        _ => State::Escape,
    }
}

/// A token whose `raw` span borrows directly from the source input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    /// The classification of this token.
    pub kind: TokenKind,
    /// Unmodified source text, including quotes, escapes, and introducers.
    pub raw: &'a str,
    /// Logical text: resolved text for general tokens, the letter or name
    /// (without introducer) for commands.
    pub text: String,
    /// 1-based character offset of the first character of `raw`, except in a
    /// split compound block, where every token points at its own letter (the
    /// first token's `-a` span starts one character earlier).
    pub position: usize,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

/// Tokenize a raw command line.
///
/// Never fails on input content: anything that does not form a command
/// becomes a [`TokenKind::General`] token. Compound short blocks (`-abc`) are
/// split into one [`TokenKind::ShortCommand`] token per letter.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    try_tokenize(input).expect("lexer transition table is total")
}

/// Tokenize, reporting internal state-machine defects as
/// [`CmdLineError::InvalidState`] instead of panicking.
pub fn try_tokenize(input: &str) -> Result<Vec<Token<'_>>, CmdLineError> {
    Lexer::new(input).run()
}

struct Lexer<'a> {
    input: &'a str,
    toks: Vec<Token<'a>>,
    /// Byte offset and 1-based position of the token being built.
    open: Option<(usize, usize)>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            toks: Vec::new(),
            open: None,
        }
    }

    fn run(mut self) -> Result<Vec<Token<'a>>, CmdLineError> {
        let mut state = State::WhiteSpace;
        for (position, (offset, c)) in (1usize..).zip(self.input.char_indices()) {
            let (next, action) = transition(state, CharClass::of(c));
            match action {
                Action::Skip | Action::Absorb => {}
                Action::Start => self.open = Some((offset, position)),
                Action::Emit(kind) => self.emit(kind, offset)?,
            }
            state = next;
        }
        if let Some(kind) = state.pending_kind() {
            self.emit(kind, self.input.len())?;
        }
        Ok(self.toks)
    }

    fn emit(&mut self, kind: TokenKind, end: usize) -> Result<(), CmdLineError> {
        let Some((start, position)) = self.open.take() else {
            return Err(CmdLineError::InvalidState(format!(
                "{kind:?} token closed at byte {end} with no open start"
            )));
        };
        let input = self.input;
        let raw = &input[start..end];
        match kind {
            TokenKind::ShortCommand => self.push_short_block(start, end, position),
            TokenKind::LongCommand => self.push(Token {
                kind,
                raw,
                text: raw[2 * INTRODUCER.len_utf8()..].to_string(),
                position,
                start,
                end,
            }),
            TokenKind::General => self.push(Token {
                kind,
                raw,
                text: resolve(raw),
                position,
                start,
                end,
            }),
        }
        Ok(())
    }

    /// Split `-abc` into `-a`, `b`, `c`. Only ASCII letters reach this state,
    /// so every letter is exactly one byte. In a block of two or more letters
    /// each token is positioned at its own letter, and the first keeps the
    /// introducer in its raw span. A lone `-q` stays positioned at the `-`.
    fn push_short_block(&mut self, start: usize, end: usize, position: usize) {
        let input = self.input;
        let letters = start + INTRODUCER.len_utf8();
        if end - letters == 1 {
            self.push(Token {
                kind: TokenKind::ShortCommand,
                raw: &input[start..end],
                text: input[letters..end].to_string(),
                position,
                start,
                end,
            });
            return;
        }
        for at in letters..end {
            let offset = at - letters;
            let tok_start = if offset == 0 { start } else { at };
            self.push(Token {
                kind: TokenKind::ShortCommand,
                raw: &input[tok_start..at + 1],
                text: input[at..at + 1].to_string(),
                position: position + 1 + offset,
                start: tok_start,
                end: at + 1,
            });
        }
    }

    fn push(&mut self, tok: Token<'a>) {
        tracing::trace!(
            kind = ?tok.kind,
            position = tok.position,
            raw = tok.raw,
            "token"
        );
        self.toks.push(tok);
    }
}
