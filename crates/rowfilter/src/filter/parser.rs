//! Parser for `SingleColumnValueFilter` expressions.

use super::ast::{
    Comparator, FilterSpec, DEFAULT_FILTER_IF_MISSING, DEFAULT_LATEST_VERSION_ONLY, FILTER_NAME,
};
use super::error::{FilterError, FilterResult};
use super::lexer::{FilterToken, Lexer, PositionedToken};

/// Most arguments a filter call accepts.
const MAX_ARGUMENTS: usize = 6;

/// Parser for single-column-value filter expressions.
///
/// The input is a call-like expression whose arguments are positional and
/// mix quoted and bare tokens.
///
/// # Grammar
///
/// ```text
/// filter     ::= "SingleColumnValueFilter" "(" arguments ")"
/// arguments  ::= family "," qualifier "," comparator "," value
///                ["," filter_if_missing ["," latest_version_only]]
/// family     ::= quoted
/// qualifier  ::= quoted
/// comparator ::= "=" | "!=" | "<" | "<=" | ">" | ">="
/// value      ::= "'" [type ":"] text "'"
/// flag       ::= "true" | "false"            (case-insensitive)
/// ```
///
/// Omitted flags take [`DEFAULT_FILTER_IF_MISSING`] and
/// [`DEFAULT_LATEST_VERSION_ONLY`].
///
/// # Example
///
/// ```
/// use rowfilter_rs::filter::{Comparator, FilterParser};
///
/// let spec = FilterParser::parse("SingleColumnValueFilter('e', 'insta', >, 'binary:0')").unwrap();
/// assert_eq!(spec.comparator, Comparator::Greater);
/// assert_eq!(spec.value, "0");
/// assert!(!spec.filter_if_missing);
/// assert!(spec.latest_version_only);
/// ```
pub struct FilterParser {
    tokens: Vec<PositionedToken>,
    position: usize,
}

impl FilterParser {
    /// Parses a filter expression string into a [`FilterSpec`].
    ///
    /// # Errors
    ///
    /// Returns a [`FilterSyntaxError`](super::FilterSyntaxError) carrying the
    /// input text when it does not match the grammar. Nothing is returned for a
    /// partially valid expression.
    pub fn parse(input: &str) -> FilterResult<FilterSpec> {
        match Self::parse_inner(input) {
            Ok(spec) => {
                tracing::debug!(filter = input, column = %spec.column_key(), "parsed filter");
                Ok(spec)
            }
            Err(kind) => {
                tracing::debug!(filter = input, error = %kind, "rejected filter");
                Err(kind.with_input(input))
            }
        }
    }

    fn parse_inner(input: &str) -> Result<FilterSpec, FilterError> {
        if input.trim().is_empty() {
            return Err(FilterError::EmptyExpression);
        }

        // Positions in errors count from the start of the untrimmed input
        let tokens = Lexer::new(input).tokenize()?;
        let mut parser = Self {
            tokens,
            position: 0,
        };

        parser.expect_filter_name()?;
        parser.expect(FilterToken::OpenParen)?;
        let arguments = parser.parse_arguments()?;

        // Check that we consumed all tokens
        if let Some(remaining) = parser.peek() {
            return Err(FilterError::unexpected_token(
                remaining.token.describe(),
                remaining.position,
            ));
        }

        build_spec(arguments)
    }

    /// Returns the current token without consuming it.
    fn peek(&self) -> Option<&PositionedToken> {
        self.tokens.get(self.position)
    }

    /// Consumes and returns the current token.
    fn advance(&mut self) -> Option<PositionedToken> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Consumes the current token, which must equal `expected`.
    fn expect(&mut self, expected: FilterToken) -> Result<(), FilterError> {
        let found = self.advance().ok_or(FilterError::UnexpectedEndOfInput)?;
        if found.token == expected {
            Ok(())
        } else {
            Err(FilterError::unexpected_token(
                found.token.describe(),
                found.position,
            ))
        }
    }

    fn expect_filter_name(&mut self) -> Result<(), FilterError> {
        let found = self.advance().ok_or(FilterError::UnexpectedEndOfInput)?;
        match found.token {
            FilterToken::Word(name) if name == FILTER_NAME => Ok(()),
            FilterToken::Word(name) => Err(FilterError::unknown_filter(name)),
            other => Err(FilterError::unexpected_token(
                other.describe(),
                found.position,
            )),
        }
    }

    /// Parses `arg ("," arg)* ")"`. Each argument is exactly one token.
    fn parse_arguments(&mut self) -> Result<Vec<PositionedToken>, FilterError> {
        let mut arguments = Vec::new();

        if self.peek().map(|pt| &pt.token) == Some(&FilterToken::CloseParen) {
            self.advance();
            return Ok(arguments);
        }

        loop {
            let argument = self.advance().ok_or(FilterError::UnexpectedEndOfInput)?;
            match argument.token {
                FilterToken::Comma | FilterToken::OpenParen | FilterToken::CloseParen => {
                    return Err(FilterError::unexpected_token(
                        argument.token.describe(),
                        argument.position,
                    ));
                }
                _ => arguments.push(argument),
            }

            let separator = self.advance().ok_or(FilterError::UnexpectedEndOfInput)?;
            match separator.token {
                FilterToken::Comma => continue,
                FilterToken::CloseParen => return Ok(arguments),
                other => {
                    return Err(FilterError::unexpected_token(
                        other.describe(),
                        separator.position,
                    ))
                }
            }
        }
    }
}

/// Interprets the positional arguments.
fn build_spec(arguments: Vec<PositionedToken>) -> Result<FilterSpec, FilterError> {
    if arguments.len() > MAX_ARGUMENTS {
        return Err(FilterError::TooManyArguments {
            count: arguments.len(),
        });
    }

    let mut arguments = arguments.into_iter().map(|pt| pt.token);

    let column_family = required_name(arguments.next(), "column family")?;
    let column_qualifier = required_name(arguments.next(), "column qualifier")?;

    let comparator = match arguments.next() {
        Some(FilterToken::Operator(op)) => op.parse::<Comparator>()?,
        Some(other) => return Err(FilterError::invalid_comparator(other.describe())),
        None => {
            return Err(FilterError::MissingArgument {
                argument: "comparator",
            })
        }
    };

    let value = match arguments.next() {
        Some(FilterToken::Quoted(text)) => strip_type_tag(&text).to_string(),
        Some(other) => return Err(FilterError::expected_quoted("value", other.describe())),
        None => return Err(FilterError::MissingArgument { argument: "value" }),
    };

    let filter_if_missing = optional_flag(arguments.next(), DEFAULT_FILTER_IF_MISSING)?;
    let latest_version_only = optional_flag(arguments.next(), DEFAULT_LATEST_VERSION_ONLY)?;

    Ok(FilterSpec {
        column_family,
        column_qualifier,
        comparator,
        value,
        filter_if_missing,
        latest_version_only,
    })
}

fn required_name(token: Option<FilterToken>, argument: &'static str) -> Result<String, FilterError> {
    match token {
        Some(FilterToken::Quoted(text)) if text.is_empty() => {
            Err(FilterError::EmptyArgument { argument })
        }
        Some(FilterToken::Quoted(text)) => Ok(text),
        Some(other) => Err(FilterError::expected_quoted(argument, other.describe())),
        None => Err(FilterError::MissingArgument { argument }),
    }
}

fn optional_flag(token: Option<FilterToken>, default: bool) -> Result<bool, FilterError> {
    match token {
        None => Ok(default),
        Some(FilterToken::Word(word)) if word.eq_ignore_ascii_case("true") => Ok(true),
        Some(FilterToken::Word(word)) if word.eq_ignore_ascii_case("false") => Ok(false),
        Some(other) => Err(FilterError::invalid_boolean(other.describe())),
    }
}

/// Drops a `type:` prefix from a value literal. Only the first colon splits.
fn strip_type_tag(literal: &str) -> &str {
    match literal.split_once(':') {
        Some((_tag, value)) => value,
        None => literal,
    }
}
