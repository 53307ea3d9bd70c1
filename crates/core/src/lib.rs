//! Command-line core library.
//!
//! Turns a raw command-line string into an ordered list of parameters:
//! short commands (`-v`, compound `-abc`), long commands (`--name`) with the
//! general tokens that follow them as arguments, and free-standing text.
//! The main entry point is [`parse_str`]; queries live on [`CommandLine`].

#![warn(missing_docs)]

/// Typed errors for indexing, capacity, and lexer-state failures.
pub mod error;
/// Command-line grammar: lexer, parameters, assembler, emitter, and dump.
pub mod grammar;
/// Access to the running process's command line.
pub mod host;
/// Queries over a parsed command line.
pub mod query;
/// Quote and escape resolution for general tokens.
pub mod unquote;

// ── Convenience re-exports ──────────────────────────────────────────────────

// Lexer
pub use grammar::lexer::{Token, TokenKind, tokenize, try_tokenize};

// Parameters and parse result
pub use grammar::params::{ParamKind, Parameter, ParameterList};
pub use grammar::parser::{Assembly, CommandLine, assemble, parse_str};

// Emitter
pub use grammar::emit::{join_args, join_command_line, quote_literal};

// Errors
pub use error::CmdLineError;

// Serialization helpers
pub use grammar::dump::to_pretty_json;

// Host
pub use host::process_command_line;
