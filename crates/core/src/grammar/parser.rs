use serde::Serialize;

use super::{
    lexer::{Token, TokenKind, tokenize},
    params::{ParamKind, Parameter, ParameterList},
};
use crate::error::CmdLineError;

/// Output of [`assemble`]: parameters in token order plus the command count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembly {
    /// Assembled parameters.
    pub parameters: ParameterList,
    /// Number of command parameters (short and long).
    pub command_count: usize,
}

impl Assembly {
    /// Text of the first parameter when it is general, else empty.
    pub fn image_path(&self) -> &str {
        match self.parameters.as_slice().first() {
            Some(p) if p.kind == ParamKind::General => &p.text,
            _ => "",
        }
    }
}

/// Turn a token stream into parameters.
///
/// Each command token opens a new parameter and becomes the current command.
/// Each general token is recorded twice: as an argument of the current
/// command (if any) and as a standalone general parameter. The current
/// command is only replaced by the next command, never cleared.
pub fn assemble(tokens: &[Token<'_>]) -> Assembly {
    let mut out = Assembly::default();
    let mut current: Option<usize> = None;

    for tok in tokens {
        match tok.kind {
            TokenKind::ShortCommand | TokenKind::LongCommand => {
                let idx = out
                    .parameters
                    .push(Parameter::new(tok.kind.into(), tok.text.as_str()));
                current = Some(idx);
                out.command_count += 1;
            }
            TokenKind::General => {
                if let Some(idx) = current
                    && let Ok(cmd) = out.parameters.get_mut(idx)
                {
                    cmd.arguments.push(tok.text.clone());
                }
                out.parameters
                    .push(Parameter::new(ParamKind::General, tok.text.as_str()));
            }
        }
    }

    out
}

// ─── Parse result ───────────────────────────────────────────────────────────

/// A parsed command line: parameters, image path, and counts.
///
/// Every call to [`CommandLine::parse`] replaces the previous contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandLine {
    image_path: String,
    count: usize,
    command_count: usize,
    parameters: ParameterList,
}

/// Parse a raw command-line string.
pub fn parse_str(input: &str) -> CommandLine {
    let mut cl = CommandLine::new();
    cl.parse(input);
    cl
}

impl CommandLine {
    /// An empty parse result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `input`, discarding any previous result.
    pub fn parse(&mut self, input: &str) {
        let assembly = assemble(&tokenize(input));
        self.image_path = assembly.image_path().to_string();
        self.count = assembly.parameters.len();
        self.command_count = assembly.command_count;
        self.parameters = assembly.parameters;
        tracing::debug!(
            count = self.count,
            command_count = self.command_count,
            image_path = %self.image_path,
            "parsed command line"
        );
    }

    /// All parameters in input order.
    pub fn parameters(&self) -> &ParameterList {
        &self.parameters
    }

    /// Parameter at `index`.
    pub fn parameter(&self, index: usize) -> Result<&Parameter, CmdLineError> {
        self.parameters.get(index)
    }

    /// The leading general token, conventionally the program path. Empty when
    /// the command line starts with a command or is empty.
    pub fn image_path(&self) -> &str {
        &self.image_path
    }

    /// Total number of parameters.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of command parameters.
    pub fn command_count(&self) -> usize {
        self.command_count
    }

    /// General parameters only, image path included.
    pub fn general_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters
            .iter()
            .filter(|p| p.kind == ParamKind::General)
    }
}
