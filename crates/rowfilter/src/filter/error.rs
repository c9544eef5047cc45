//! Error types for the filter parser.

use thiserror::Error;

/// A specialized Result type for filter parsing operations.
pub type FilterResult<T> = Result<T, FilterSyntaxError>;

/// The ways a filter expression can fail to parse.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// The filter expression is empty.
    #[error("filter expression is empty")]
    EmptyExpression,

    /// The expression names a filter other than `SingleColumnValueFilter`.
    #[error("unknown filter: {name}")]
    UnknownFilter {
        /// The filter name that was found.
        name: String,
    },

    /// A character that cannot start any token.
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        position: usize,
    },

    /// A quoted literal was opened but never closed.
    #[error("unterminated quoted literal starting at position {position}")]
    UnterminatedQuote {
        /// Byte offset of the opening quote.
        position: usize,
    },

    /// An unexpected token was encountered during parsing.
    #[error("unexpected token {token} at position {position}")]
    UnexpectedToken {
        /// The unexpected token that was encountered.
        token: String,
        /// Byte offset of the token.
        position: usize,
    },

    /// An unexpected end of input was encountered.
    #[error("unexpected end of expression")]
    UnexpectedEndOfInput,

    /// The third argument is not one of `=`, `!=`, `<`, `<=`, `>`, `>=`.
    #[error("invalid comparator: {token}")]
    InvalidComparator {
        /// The token found in comparator position.
        token: String,
    },

    /// A trailing flag is not `true` or `false`.
    #[error("invalid boolean: {token} (expected true or false)")]
    InvalidBoolean {
        /// The token found in flag position.
        token: String,
    },

    /// An argument that must be a quoted literal was given bare.
    #[error("{argument} must be a quoted literal, found {token}")]
    ExpectedQuoted {
        /// Name of the argument.
        argument: &'static str,
        /// The token found instead.
        token: String,
    },

    /// A required quoted argument is empty.
    #[error("{argument} must not be empty")]
    EmptyArgument {
        /// Name of the argument.
        argument: &'static str,
    },

    /// A required argument is missing.
    #[error("missing argument: {argument}")]
    MissingArgument {
        /// Name of the missing argument.
        argument: &'static str,
    },

    /// More than six arguments were supplied.
    #[error("too many arguments: {count} (expected at most 6)")]
    TooManyArguments {
        /// Number of arguments supplied.
        count: usize,
    },
}

impl FilterError {
    /// Creates an unexpected token error.
    pub fn unexpected_token(token: impl Into<String>, position: usize) -> Self {
        FilterError::UnexpectedToken {
            token: token.into(),
            position,
        }
    }

    /// Creates an unknown filter error.
    pub fn unknown_filter(name: impl Into<String>) -> Self {
        FilterError::UnknownFilter { name: name.into() }
    }

    /// Creates an invalid comparator error.
    pub fn invalid_comparator(token: impl Into<String>) -> Self {
        FilterError::InvalidComparator {
            token: token.into(),
        }
    }

    /// Creates an invalid boolean error.
    pub fn invalid_boolean(token: impl Into<String>) -> Self {
        FilterError::InvalidBoolean {
            token: token.into(),
        }
    }

    /// Creates an expected-quoted error.
    pub fn expected_quoted(argument: &'static str, token: impl Into<String>) -> Self {
        FilterError::ExpectedQuoted {
            argument,
            token: token.into(),
        }
    }

    /// Attaches the offending filter text.
    pub fn with_input(self, input: impl Into<String>) -> FilterSyntaxError {
        FilterSyntaxError {
            input: input.into(),
            kind: self,
        }
    }
}

/// A filter expression that does not match the `SingleColumnValueFilter` grammar.
///
/// Carries the full offending text alongside the specific [`FilterError`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid filter \"{input}\": {kind}")]
pub struct FilterSyntaxError {
    input: String,
    #[source]
    kind: FilterError,
}

impl FilterSyntaxError {
    /// The filter text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The specific failure.
    pub fn kind(&self) -> &FilterError {
        &self.kind
    }
}
