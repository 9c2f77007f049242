//! Markup token types and the token source seam.

use crate::errors::TokenError;

/// Source position of a token, for error reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number (in characters).
    pub column: u32,
}

/// A markup attribute as written in a start tag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A single token of the markup stream.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    /// An opening tag with its attributes in source order.
    StartTag {
        name: String,
        attributes: Vec<Attribute>,
        span: Span,
    },
    /// Character data with entities already decoded.
    Text(String),
    /// A closing tag. The name is informational only.
    EndTag { name: String, span: Span },
    /// No more input.
    EndOfInput,
}

impl Token {
    /// Shorthand for a start tag without position information.
    pub fn start(name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Token::StartTag {
            name: name.into(),
            attributes,
            span: Span::default(),
        }
    }

    /// Shorthand for an end tag without position information.
    pub fn end(name: impl Into<String>) -> Self {
        Token::EndTag {
            name: name.into(),
            span: Span::default(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Token::Text(content.into())
    }
}

/// A pull-based producer of markup tokens.
///
/// Each call yields the next token; after `EndOfInput` is returned every
/// further call returns `EndOfInput` again.
pub trait TokenSource {
    fn next_token(&mut self) -> Result<Token, TokenError>;
}

impl<T: TokenSource + ?Sized> TokenSource for &mut T {
    fn next_token(&mut self) -> Result<Token, TokenError> {
        (**self).next_token()
    }
}

/// A token source over a pre-built list of tokens.
#[derive(Debug, Clone, Default)]
pub struct TokenBuffer {
    tokens: std::collections::VecDeque<Token>,
}

impl TokenBuffer {
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    /// Number of tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl TokenSource for TokenBuffer {
    fn next_token(&mut self) -> Result<Token, TokenError> {
        Ok(self.tokens.pop_front().unwrap_or(Token::EndOfInput))
    }
}
