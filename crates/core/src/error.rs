//! Typed error types for the command-line core.
//!
//! Tokenizing and assembling never fail on input content; every variant here
//! signals misuse of the indexing/capacity API or an internal defect.

/// Errors raised by the parameter list accessors and the lexer.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CmdLineError {
    /// A positional accessor was given an index outside `0..len`.
    #[error("index {index} out of bounds (len {len})")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Number of elements available.
        len: usize,
    },

    /// A capacity or size control was given a value it cannot honour.
    #[error("invalid value for {what}: {value}")]
    InvalidValue {
        /// Name of the control that rejected the value.
        what: &'static str,
        /// The rejected value.
        value: usize,
    },

    /// The lexer reached a state it has no rule for.
    #[error("lexer reached an invalid state: {0}")]
    InvalidState(String),
}

impl CmdLineError {
    /// Shorthand for an [`CmdLineError::IndexOutOfBounds`] error.
    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }
}

#[cfg(test)]
mod tests {
    use super::CmdLineError;

    #[test]
    fn messages_carry_context() {
        assert_eq!(
            CmdLineError::out_of_bounds(4, 2).to_string(),
            "index 4 out of bounds (len 2)"
        );
        let err = CmdLineError::InvalidValue {
            what: "capacity",
            value: 1,
        };
        assert_eq!(err.to_string(), "invalid value for capacity: 1");
    }
}
