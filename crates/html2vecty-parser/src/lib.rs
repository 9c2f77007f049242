//! Parsers for html2vecty input.
//!
//! This crate turns markup text into a stream of [`Token`]s and inline
//! `style` attribute values into [`StyleDeclaration`]s.
//! Built on `nom` for the lexical pieces.

mod lexer;
mod style;
mod tokenizer;

pub use style::parse_declarations;
pub use tokenizer::Tokenizer;

use html2vecty_core::{Token, TokenError, TokenSource};

#[doc(no_inline)]
pub use html2vecty_core::StyleDeclaration;

/// Tokenize a whole markup string.
///
/// The returned list always ends with [`Token::EndOfInput`].
///
/// # Example
///
/// ```ignore
/// use html2vecty_parser::tokenize;
///
/// let tokens = tokenize(r#"<p class="lead">Hello</p>"#)?;
/// assert_eq!(tokens.len(), 4);
/// ```
pub fn tokenize(markup: &str) -> Result<Vec<Token>, TokenError> {
    let mut tokenizer = Tokenizer::new(markup);
    let mut tokens = Vec::new();
    loop {
        let token = tokenizer.next_token()?;
        let done = token == Token::EndOfInput;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
