//! Access to the running process's command line.
//!
//! The OS hands Rust programs a pre-split argument vector, so the raw line is
//! rebuilt with [`join_command_line`] and re-quoted so it tokenizes back to
//! the same arguments, with `argv[0]` kept as the image path. Non-UTF-8
//! arguments are converted lossily.

use crate::grammar::emit::join_command_line;
use crate::grammar::parser::{CommandLine, parse_str};

/// The current process's command line as a single string.
pub fn process_command_line() -> String {
    join_command_line(std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()))
}

impl CommandLine {
    /// Parse the current process's command line.
    pub fn from_env() -> Self {
        parse_str(&process_command_line())
    }
}
