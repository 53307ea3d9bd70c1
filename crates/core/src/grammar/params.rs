use serde::Serialize;

use crate::error::CmdLineError;
use crate::grammar::lexer::TokenKind;

/// Kind of an assembled parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    /// Free-standing text.
    General,
    /// A single-letter command (`-v`).
    ShortCommand,
    /// A named command (`--verbose`).
    LongCommand,
    /// Aggregate over both forms of a command. Only produced by queries.
    Both,
}

impl ParamKind {
    /// Whether this kind denotes a command rather than general text.
    pub fn is_command(self) -> bool {
        !matches!(self, ParamKind::General)
    }
}

impl From<TokenKind> for ParamKind {
    fn from(kind: TokenKind) -> Self {
        match kind {
            TokenKind::General => ParamKind::General,
            TokenKind::ShortCommand => ParamKind::ShortCommand,
            TokenKind::LongCommand => ParamKind::LongCommand,
        }
    }
}

/// A recognized command with its arguments, or a general text token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    /// Parameter kind.
    pub kind: ParamKind,
    /// Command letter/name, or the resolved general text.
    pub text: String,
    /// Arguments in the order they appeared. Always empty for general
    /// parameters.
    pub arguments: Vec<String>,
}

impl Parameter {
    /// Create a parameter with no arguments.
    pub fn new(kind: ParamKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            arguments: Vec::new(),
        }
    }

    /// Argument at `index`.
    pub fn argument(&self, index: usize) -> Result<&str, CmdLineError> {
        self.arguments
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| CmdLineError::out_of_bounds(index, self.arguments.len()))
    }
}

/// Ordered, growable list of parameters with checked positional access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParameterList {
    items: Vec<Parameter>,
}

impl ParameterList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Allocated capacity.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Parameter at `index`.
    pub fn get(&self, index: usize) -> Result<&Parameter, CmdLineError> {
        self.items
            .get(index)
            .ok_or_else(|| CmdLineError::out_of_bounds(index, self.items.len()))
    }

    /// Mutable parameter at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Parameter, CmdLineError> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or_else(|| CmdLineError::out_of_bounds(index, len))
    }

    /// Ensure room for at least `capacity` parameters in total.
    ///
    /// A capacity below the current count would have to drop parameters and
    /// is rejected with [`CmdLineError::InvalidValue`].
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), CmdLineError> {
        if capacity < self.items.len() {
            return Err(CmdLineError::InvalidValue {
                what: "capacity",
                value: capacity,
            });
        }
        self.items.reserve(capacity - self.items.len());
        Ok(())
    }

    /// Append a parameter, returning its index.
    pub fn push(&mut self, param: Parameter) -> usize {
        self.items.push(param);
        self.items.len() - 1
    }

    /// Remove every parameter.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.items.iter()
    }

    /// View as a slice.
    pub fn as_slice(&self) -> &[Parameter] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a ParameterList {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl From<Vec<Parameter>> for ParameterList {
    fn from(items: Vec<Parameter>) -> Self {
        Self { items }
    }
}
