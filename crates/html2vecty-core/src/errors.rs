//! Error types for the html2vecty translator.

use thiserror::Error;

/// Top-level error for a single translation run.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Style(#[from] StyleError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error("Maximum element nesting depth ({depth}) exceeded")]
    MaxDepthExceeded { depth: usize },
}

/// Coarse classification of a [`TranslateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    TokenStream,
    StyleSyntax,
    Emission,
    Depth,
}

impl TranslateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TranslateError::Token(_) => ErrorKind::TokenStream,
            TranslateError::Style(_) => ErrorKind::StyleSyntax,
            TranslateError::Emit(_) => ErrorKind::Emission,
            TranslateError::MaxDepthExceeded { .. } => ErrorKind::Depth,
        }
    }
}

/// Lexical errors in the markup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Unterminated {construct} starting at line {line}, column {column}")]
    Unterminated {
        construct: &'static str,
        line: u32,
        column: u32,
    },

    #[error("Invalid {context} name at line {line}, column {column}")]
    InvalidName {
        context: &'static str,
        line: u32,
        column: u32,
    },

    #[error("Unquoted or missing value for attribute '{attribute}' at line {line}, column {column}")]
    MissingAttributeValue {
        attribute: String,
        line: u32,
        column: u32,
    },

    #[error("Unexpected character {found:?} in tag at line {line}, column {column}")]
    UnexpectedCharacter { found: char, line: u32, column: u32 },

    #[error("Invalid character entity &{entity}; at line {line}, column {column}")]
    InvalidEntity {
        entity: String,
        line: u32,
        column: u32,
    },

    #[error("Unexpected end of input: element <{name}> is not closed")]
    UnclosedElement { name: String },
}

/// Errors in inline style declarations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("Expected ':' after property in style declaration {declaration:?}")]
    MissingColon { declaration: String },

    #[error("Invalid property name in style declaration {declaration:?}")]
    InvalidProperty { declaration: String },

    #[error("Missing value in style declaration {declaration:?}")]
    EmptyValue { declaration: String },

    #[error("Unterminated {construct} in style {input:?}")]
    Unterminated {
        construct: &'static str,
        input: String,
    },
}

/// Errors rendering the generated Go source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    #[error("No import alias registered for package {path}")]
    MissingImport { path: String },

    #[error("Invalid Go identifier {name:?} used as {context}")]
    InvalidIdentifier {
        name: String,
        context: &'static str,
    },

    #[error("Import alias {alias:?} is used for both {first} and {second}")]
    AliasConflict {
        alias: String,
        first: String,
        second: String,
    },

    #[error("Declaration {name:?} shadows the import of {path}")]
    ShadowedImport { name: String, path: String },
}
