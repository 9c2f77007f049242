//! Streaming markup tokenizer.
//!
//! Produces one [`Token`] per call. Tag nesting is not validated here; the
//! tree builder decides what an end tag closes. Comments, processing
//! instructions and directives are consumed silently.

use html2vecty_core::{Attribute, Span, Token, TokenError, TokenSource};
use tracing::trace;

use crate::lexer::*;

/// Pull tokenizer over a markup string.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    /// End tag owed after a self-closing start tag.
    pending_end: Option<Token>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            pending_end: None,
        }
    }

    fn offset_of(&self, rest: &str) -> usize {
        self.input.len() - rest.len()
    }

    fn span(&self, start: usize, end: usize) -> Span {
        let (line, column) = position(self.input, start);
        Span {
            start,
            end,
            line,
            column,
        }
    }

    fn unterminated(&self, construct: &'static str, offset: usize) -> TokenError {
        let (line, column) = position(self.input, offset);
        TokenError::Unterminated {
            construct,
            line,
            column,
        }
    }

    fn invalid_name(&self, context: &'static str, offset: usize) -> TokenError {
        let (line, column) = position(self.input, offset);
        TokenError::InvalidName {
            context,
            line,
            column,
        }
    }

    fn unexpected(&self, found: char, offset: usize) -> TokenError {
        let (line, column) = position(self.input, offset);
        TokenError::UnexpectedCharacter {
            found,
            line,
            column,
        }
    }

    fn missing_value(&self, attribute: &str, offset: usize) -> TokenError {
        let (line, column) = position(self.input, offset);
        TokenError::MissingAttributeValue {
            attribute: attribute.to_string(),
            line,
            column,
        }
    }

    fn decode(&self, raw: &str, base: usize) -> Result<String, TokenError> {
        decode_text(raw).map_err(|bad| {
            let (line, column) = position(self.input, base + bad.offset);
            TokenError::InvalidEntity {
                entity: bad.entity,
                line,
                column,
            }
        })
    }

    /// Read one construct. `None` means it produced no token.
    fn read(&mut self) -> Result<Option<Token>, TokenError> {
        let input = self.input;
        let start = self.pos;
        let rest = &input[start..];

        if let Some(body) = rest.strip_prefix("<!--") {
            let end = body
                .find("-->")
                .ok_or_else(|| self.unterminated("comment", start))?;
            trace!(offset = start, "skipping comment");
            self.pos += "<!--".len() + end + "-->".len();
            return Ok(None);
        }

        if let Some(body) = rest.strip_prefix("<![CDATA[") {
            let end = body
                .find("]]>")
                .ok_or_else(|| self.unterminated("CDATA section", start))?;
            self.pos += "<![CDATA[".len() + end + "]]>".len();
            return Ok(Some(Token::Text(normalize_newlines(&body[..end]))));
        }

        if let Some(body) = rest.strip_prefix("<?") {
            let end = body
                .find("?>")
                .ok_or_else(|| self.unterminated("processing instruction", start))?;
            trace!(offset = start, "skipping processing instruction");
            self.pos += "<?".len() + end + "?>".len();
            return Ok(None);
        }

        if let Some(body) = rest.strip_prefix("<!") {
            let end = directive_end(body).ok_or_else(|| self.unterminated("directive", start))?;
            trace!(offset = start, "skipping directive");
            self.pos += "<!".len() + end + 1;
            return Ok(None);
        }

        if let Some(body) = rest.strip_prefix("</") {
            return self.end_tag(body).map(Some);
        }

        if rest.starts_with('<') {
            return self.start_tag().map(Some);
        }

        let end = rest.find('<').unwrap_or(rest.len());
        let text = self.decode(&rest[..end], start)?;
        self.pos += end;
        Ok(Some(Token::Text(text)))
    }

    fn end_tag(&mut self, body: &'a str) -> Result<Token, TokenError> {
        let start = self.pos;
        let (after, raw_name) =
            name(body).map_err(|_| self.invalid_name("end tag", start + "</".len()))?;
        let after = skip_whitespace(after);

        let Some(after) = after.strip_prefix('>') else {
            return Err(match after.chars().next() {
                Some(c) => self.unexpected(c, self.offset_of(after)),
                None => self.unterminated("end tag", start),
            });
        };

        let end = self.offset_of(after);
        self.pos = end;
        Ok(Token::EndTag {
            name: local_name(raw_name).to_string(),
            span: self.span(start, end),
        })
    }

    fn start_tag(&mut self) -> Result<Token, TokenError> {
        let input = self.input;
        let start = self.pos;
        let (mut rest, raw_name) =
            name(&input[start + 1..]).map_err(|_| self.invalid_name("tag", start + 1))?;
        let mut attributes = Vec::new();
        let mut self_closing = false;

        loop {
            rest = skip_whitespace(rest);
            if let Some(after) = rest.strip_prefix("/>") {
                rest = after;
                self_closing = true;
                break;
            }
            if let Some(after) = rest.strip_prefix('>') {
                rest = after;
                break;
            }
            let Some(c) = rest.chars().next() else {
                return Err(self.unterminated("tag", start));
            };

            let attr_offset = self.offset_of(rest);
            let (after, attr_name) = name(rest).map_err(|_| self.unexpected(c, attr_offset))?;
            let after = skip_whitespace(after);
            let after = after
                .strip_prefix('=')
                .ok_or_else(|| self.missing_value(attr_name, attr_offset))?;
            let after = skip_whitespace(after);

            let (after, raw_value) = match quoted(after) {
                Ok(parsed) => parsed,
                Err(_) if after.starts_with(['"', '\'']) => {
                    return Err(self.unterminated("attribute value", self.offset_of(after)));
                }
                Err(_) => return Err(self.missing_value(attr_name, attr_offset)),
            };
            // step back over the closing quote
            let value = self.decode(raw_value, self.offset_of(after) - raw_value.len() - 1)?;

            attributes.push(Attribute::new(local_name(attr_name), value));
            rest = after;
        }

        let end = self.offset_of(rest);
        self.pos = end;
        let tag_name = local_name(raw_name).to_string();
        let span = self.span(start, end);

        if self_closing {
            self.pending_end = Some(Token::EndTag {
                name: tag_name.clone(),
                span,
            });
        }

        Ok(Token::StartTag {
            name: tag_name,
            attributes,
            span,
        })
    }
}

impl TokenSource for Tokenizer<'_> {
    fn next_token(&mut self) -> Result<Token, TokenError> {
        if let Some(token) = self.pending_end.take() {
            return Ok(token);
        }
        while self.pos < self.input.len() {
            if let Some(token) = self.read()? {
                return Ok(token);
            }
        }
        Ok(Token::EndOfInput)
    }
}

/// Find the `>` closing a `<!...>` directive, skipping quoted sections and
/// nested angle brackets.
fn directive_end(body: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote = None;
    for (i, c) in body.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '<') => depth += 1,
            (None, '>') if depth == 0 => return Some(i),
            (None, '>') => depth -= 1,
            (None, _) => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;

    fn names(tokens: &[Token]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| match t {
                Token::StartTag { name, .. } => format!("<{}>", name),
                Token::EndTag { name, .. } => format!("</{}>", name),
                Token::Text(s) => format!("{:?}", s),
                Token::EndOfInput => "EOF".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_tokenize_nested() {
        let tokens = tokenize("<div><p>Hi</p></div>").unwrap();
        assert_eq!(
            names(&tokens),
            vec!["<div>", "<p>", "\"Hi\"", "</p>", "</div>", "EOF"]
        );
    }

    #[test]
    fn test_attributes_in_order() {
        let tokens = tokenize(r#"<a href="/x" id='main' data-foo="bar">"#).unwrap();
        if let Token::StartTag { name, attributes, .. } = &tokens[0] {
            assert_eq!(name, "a");
            assert_eq!(
                attributes,
                &vec![
                    Attribute::new("href", "/x"),
                    Attribute::new("id", "main"),
                    Attribute::new("data-foo", "bar"),
                ]
            );
        } else {
            panic!("Expected start tag");
        }
    }

    #[test]
    fn test_self_closing_emits_end_tag() {
        let tokens = tokenize(r#"<input type="checkbox" />"#).unwrap();
        assert_eq!(names(&tokens), vec!["<input>", "</input>", "EOF"]);
    }

    #[test]
    fn test_skips_comments_and_directives() {
        let tokens =
            tokenize("<?xml version=\"1.0\"?><!DOCTYPE html><!-- note --><br/>").unwrap();
        assert_eq!(names(&tokens), vec!["<br>", "</br>", "EOF"]);
    }

    #[test]
    fn test_cdata_is_text() {
        let tokens = tokenize("<p><![CDATA[a < b]]></p>").unwrap();
        assert_eq!(tokens[1], Token::text("a < b"));
    }

    #[test]
    fn test_entities_decoded() {
        let tokens = tokenize(r#"<p title="&quot;x&quot;">1 &lt; 2</p>"#).unwrap();
        if let Token::StartTag { attributes, .. } = &tokens[0] {
            assert_eq!(attributes[0].value, "\"x\"");
        } else {
            panic!("Expected start tag");
        }
        assert_eq!(tokens[1], Token::text("1 < 2"));
    }

    #[test]
    fn test_namespace_prefix_stripped() {
        let tokens = tokenize(r##"<svg:use xlink:href="#a"></svg:use>"##).unwrap();
        assert_eq!(names(&tokens), vec!["<use>", "</use>", "EOF"]);
        if let Token::StartTag { attributes, .. } = &tokens[0] {
            assert_eq!(attributes[0].name, "href");
        }
    }

    #[test]
    fn test_span_positions() {
        let tokens = tokenize("<div>\n  <span></span>\n</div>").unwrap();
        if let Token::StartTag { span, .. } = &tokens[2] {
            assert_eq!(span.line, 2);
            assert_eq!(span.column, 3);
            assert_eq!(span.end - span.start, "<span>".len());
        } else {
            panic!("Expected span start tag, got {:?}", tokens[2]);
        }
    }

    #[test]
    fn test_unterminated_tag() {
        let err = tokenize("<div class=\"a\"").unwrap_err();
        assert!(matches!(err, TokenError::Unterminated { construct: "tag", .. }));
    }

    #[test]
    fn test_unterminated_attribute_value() {
        let err = tokenize("<div class=\"a>").unwrap_err();
        assert!(matches!(
            err,
            TokenError::Unterminated {
                construct: "attribute value",
                ..
            }
        ));
    }

    #[test]
    fn test_bare_attribute_rejected() {
        let err = tokenize("<input disabled>").unwrap_err();
        assert!(matches!(
            err,
            TokenError::MissingAttributeValue { ref attribute, .. } if attribute == "disabled"
        ));
    }

    #[test]
    fn test_unknown_entity_position() {
        let err = tokenize("<p>\n a &nbsp;</p>").unwrap_err();
        assert_eq!(
            err,
            TokenError::InvalidEntity {
                entity: "nbsp".into(),
                line: 2,
                column: 4,
            }
        );
    }

    #[test]
    fn test_invalid_tag_name() {
        let err = tokenize("a < b").unwrap_err();
        assert!(matches!(err, TokenError::InvalidName { context: "tag", .. }));
    }

    #[test]
    fn test_end_of_input_repeats() {
        let mut tokenizer = Tokenizer::new("x");
        assert_eq!(tokenizer.next_token().unwrap(), Token::text("x"));
        assert_eq!(tokenizer.next_token().unwrap(), Token::EndOfInput);
        assert_eq!(tokenizer.next_token().unwrap(), Token::EndOfInput);
    }

    #[test]
    fn test_directive_end() {
        assert_eq!(directive_end("DOCTYPE html>"), Some(12));
        assert_eq!(directive_end("DOCTYPE x [<!ENTITY a \">\">]>"), Some(27));
        assert_eq!(directive_end("DOCTYPE"), None);
    }
}
