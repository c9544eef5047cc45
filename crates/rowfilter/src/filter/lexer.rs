//! Lexer (tokenizer) for filter expressions.

use std::iter::Peekable;
use std::str::CharIndices;

use super::error::FilterError;

/// A token with its position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedToken {
    /// The token.
    pub token: FilterToken,
    /// The byte position where the token starts (0-indexed).
    pub position: usize,
}

/// A token in a filter expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterToken {
    /// A bare word: the filter name, a boolean flag or an unquoted literal.
    Word(String),

    /// A single-quoted literal, quotes removed and doubled quotes collapsed.
    Quoted(String),

    /// A bare run of comparison characters (`=`, `!`, `<`, `>`).
    Operator(String),

    /// Opening parenthesis `(`.
    OpenParen,

    /// Closing parenthesis `)`.
    CloseParen,

    /// Argument separator `,`.
    Comma,
}

impl FilterToken {
    /// Renders the token the way it appeared in the input, for error messages.
    pub fn describe(&self) -> String {
        match self {
            FilterToken::Word(word) => word.clone(),
            FilterToken::Quoted(text) => format!("'{}'", text.replace('\'', "''")),
            FilterToken::Operator(op) => op.clone(),
            FilterToken::OpenParen => "(".to_string(),
            FilterToken::CloseParen => ")".to_string(),
            FilterToken::Comma => ",".to_string(),
        }
    }
}

/// Lexer for tokenizing filter expressions.
pub struct Lexer<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
        }
    }

    /// Peeks at the next character without consuming it.
    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.chars.next();
        }
    }

    /// Consumes characters while `accept` holds.
    fn read_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if !accept(c) {
                break;
            }
            text.push(c);
            self.chars.next();
        }
        text
    }

    /// Reads a single-quoted literal. A doubled quote inside stands for one quote.
    fn read_quoted(&mut self, start: usize) -> Result<String, FilterError> {
        // Consume the opening quote
        self.chars.next();

        let mut result = String::new();
        loop {
            match self.chars.next() {
                Some((_, '\'')) => {
                    if self.peek() == Some('\'') {
                        self.chars.next();
                        result.push('\'');
                    } else {
                        return Ok(result);
                    }
                }
                Some((_, c)) => result.push(c),
                None => return Err(FilterError::UnterminatedQuote { position: start }),
            }
        }
    }

    /// Returns the next token, `Ok(None)` at end of input.
    pub fn next_token(&mut self) -> Result<Option<PositionedToken>, FilterError> {
        self.skip_whitespace();

        let Some(&(position, c)) = self.chars.peek() else {
            return Ok(None);
        };

        let token = match c {
            '(' => {
                self.chars.next();
                FilterToken::OpenParen
            }
            ')' => {
                self.chars.next();
                FilterToken::CloseParen
            }
            ',' => {
                self.chars.next();
                FilterToken::Comma
            }
            '\'' => FilterToken::Quoted(self.read_quoted(position)?),
            _ if is_operator_char(c) => FilterToken::Operator(self.read_while(is_operator_char)),
            _ if is_word_char(c) => FilterToken::Word(self.read_while(is_word_char)),
            _ => {
                return Err(FilterError::UnexpectedCharacter {
                    character: c,
                    position,
                })
            }
        };

        Ok(Some(PositionedToken { token, position }))
    }

    /// Collects all tokens, stopping at the first lexical error.
    pub fn tokenize(mut self) -> Result<Vec<PositionedToken>, FilterError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '=' | '!' | '<' | '>')
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | '+' | ':')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<FilterToken> {
        Lexer::new(input)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|pt| pt.token)
            .collect()
    }

    fn word(s: &str) -> FilterToken {
        FilterToken::Word(s.to_string())
    }

    fn quoted(s: &str) -> FilterToken {
        FilterToken::Quoted(s.to_string())
    }

    fn op(s: &str) -> FilterToken {
        FilterToken::Operator(s.to_string())
    }

    #[test]
    fn test_tokenize_full_expression() {
        assert_eq!(
            tokens("SingleColumnValueFilter('e', 'insta', >, 'binary:0', true, FALSE)"),
            vec![
                word("SingleColumnValueFilter"),
                FilterToken::OpenParen,
                quoted("e"),
                FilterToken::Comma,
                quoted("insta"),
                FilterToken::Comma,
                op(">"),
                FilterToken::Comma,
                quoted("binary:0"),
                FilterToken::Comma,
                word("true"),
                FilterToken::Comma,
                word("FALSE"),
                FilterToken::CloseParen,
            ]
        );
    }

    #[test]
    fn test_tokenize_operators() {
        for text in ["=", "!=", "<", "<=", ">", ">="] {
            assert_eq!(tokens(text), vec![op(text)]);
        }
    }

    #[test]
    fn test_tokenize_operator_run_is_one_token() {
        assert_eq!(tokens("=>"), vec![op("=>")]);
        assert_eq!(tokens("<>"), vec![op("<>")]);
    }

    #[test]
    fn test_tokenize_operator_without_spaces() {
        assert_eq!(
            tokens("'q',>=,'v'"),
            vec![
                quoted("q"),
                FilterToken::Comma,
                op(">="),
                FilterToken::Comma,
                quoted("v"),
            ]
        );
    }

    #[test]
    fn test_tokenize_quoted_keeps_whitespace_and_case() {
        assert_eq!(tokens("'  Mixed Case '"), vec![quoted("  Mixed Case ")]);
    }

    #[test]
    fn test_tokenize_quoted_doubled_quote() {
        assert_eq!(tokens("'it''s'"), vec![quoted("it's")]);
        assert_eq!(tokens("''''"), vec![quoted("'")]);
    }

    #[test]
    fn test_tokenize_empty_quoted() {
        assert_eq!(tokens("''"), vec![quoted("")]);
    }

    #[test]
    fn test_tokenize_quoted_with_punctuation() {
        assert_eq!(
            tokens("'binary:2018-04-04T07:10:49.812255+00:00'"),
            vec![quoted("binary:2018-04-04T07:10:49.812255+00:00")]
        );
        assert_eq!(tokens("'a,b)('"), vec![quoted("a,b)(")]);
    }

    #[test]
    fn test_tokenize_positions() {
        let positioned = Lexer::new("F( 'a' ,>)").tokenize().unwrap();
        let positions: Vec<usize> = positioned.iter().map(|pt| pt.position).collect();

        assert_eq!(positions, vec![0, 1, 3, 7, 8, 9]);
    }

    #[test]
    fn test_tokenize_unterminated_quote() {
        assert_eq!(
            Lexer::new("F('abc").tokenize(),
            Err(FilterError::UnterminatedQuote { position: 2 })
        );
    }

    #[test]
    fn test_tokenize_unexpected_character() {
        assert_eq!(
            Lexer::new("F('a'; 'b')").tokenize(),
            Err(FilterError::UnexpectedCharacter {
                character: ';',
                position: 5
            })
        );
        assert_eq!(
            Lexer::new("F(\"a\")").tokenize(),
            Err(FilterError::UnexpectedCharacter {
                character: '"',
                position: 2
            })
        );
    }

    #[test]
    fn test_tokenize_whitespace_only() {
        assert_eq!(tokens(" \t\n"), vec![]);
    }

    #[test]
    fn test_describe() {
        assert_eq!(quoted("it's").describe(), "'it''s'");
        assert_eq!(FilterToken::Comma.describe(), ",");
        assert_eq!(word("true").describe(), "true");
    }
}
