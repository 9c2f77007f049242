//! Streaming tree builder.
//!
//! Pulls tokens from a [`TokenSource`] and builds the call-expression tree by
//! recursive descent, one frame per open element. The token source is passed
//! explicitly through every frame; errors travel back up through `Result`.

use html2vecty_core::{
    CodeNode, Document, ElementNode, Token, TokenError, TokenSource, TranslateError,
};
use tracing::warn;

use crate::classify::classify_all;
use crate::options::DEFAULT_MAX_DEPTH;
use crate::resolve::{resolve_tag, ResolvedTag};

/// What a single token contributed.
enum Step {
    Node(CodeNode),
    /// Whitespace-only text.
    Nothing,
    /// An end tag: closes the current frame.
    Close(String),
    End,
}

/// Build a document from a token source with the default depth limit.
pub fn build_document<S: TokenSource>(source: S) -> Result<Document, TranslateError> {
    build_document_with_limit(source, DEFAULT_MAX_DEPTH)
}

/// Build a document, failing once elements nest deeper than `max_depth`.
pub fn build_document_with_limit<S: TokenSource>(
    mut source: S,
    max_depth: usize,
) -> Result<Document, TranslateError> {
    let mut roots = Vec::new();
    loop {
        match step(&mut source, 0, max_depth)? {
            Step::Node(node) => roots.push(node),
            Step::Nothing => {}
            Step::Close(name) => warn!(tag = %name, "ignoring close tag at document root"),
            Step::End => return Ok(Document::new(roots)),
        }
    }
}

fn step<S: TokenSource>(
    source: &mut S,
    depth: usize,
    max_depth: usize,
) -> Result<Step, TranslateError> {
    match source.next_token()? {
        Token::StartTag {
            name, attributes, ..
        } => {
            if depth >= max_depth {
                return Err(TranslateError::MaxDepthExceeded { depth: max_depth });
            }
            let ResolvedTag {
                constructor,
                literal,
            } = resolve_tag(&name);
            let markup = classify_all(&attributes)?;
            let children = children(source, &name, depth + 1, max_depth)?;

            Ok(Step::Node(CodeNode::Element(ElementNode {
                constructor,
                tag_literal: literal,
                markup,
                children,
            })))
        }
        Token::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Ok(Step::Nothing)
            } else {
                Ok(Step::Node(CodeNode::Text(trimmed.to_string())))
            }
        }
        Token::EndTag { name, .. } => Ok(Step::Close(name)),
        Token::EndOfInput => Ok(Step::End),
    }
}

/// Collect child nodes until the end tag closing `parent`.
fn children<S: TokenSource>(
    source: &mut S,
    parent: &str,
    depth: usize,
    max_depth: usize,
) -> Result<Vec<CodeNode>, TranslateError> {
    let mut nodes = Vec::new();
    loop {
        match step(source, depth, max_depth)? {
            Step::Node(node) => nodes.push(node),
            Step::Nothing => {}
            Step::Close(_) => return Ok(nodes),
            Step::End => {
                return Err(TokenError::UnclosedElement {
                    name: parent.to_string(),
                }
                .into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use html2vecty_core::{
        Attribute, ClassifiedAttribute, ErrorKind, Package, QualifiedName, TokenBuffer,
    };
    use html2vecty_parser::Tokenizer;

    fn build(markup: &str) -> Result<Document, TranslateError> {
        build_document(Tokenizer::new(markup))
    }

    fn element(node: &CodeNode) -> &ElementNode {
        node.as_element().expect("Expected element node")
    }

    #[test]
    fn test_build_nested() {
        let doc = build("<div><p>Hello</p></div>").unwrap();
        assert_eq!(doc.roots.len(), 1);

        let div = element(&doc.roots[0]);
        assert_eq!(div.constructor, QualifiedName::new(Package::Elem, "Div"));
        assert_eq!(div.children.len(), 1);

        let p = element(&div.children[0]);
        assert_eq!(p.constructor.name, "Paragraph");
        assert_eq!(p.children, vec![CodeNode::Text("Hello".into())]);
    }

    #[test]
    fn test_whitespace_text_dropped() {
        let doc = build("<p>  </p>").unwrap();
        assert!(element(&doc.roots[0]).children.is_empty());
    }

    #[test]
    fn test_text_is_trimmed() {
        let doc = build("<p>\n\t Enter HTML here \n</p>").unwrap();
        assert_eq!(
            element(&doc.roots[0]).children,
            vec![CodeNode::Text("Enter HTML here".into())]
        );
    }

    #[test]
    fn test_multiple_roots() {
        let doc = build("<p>A</p><p>B</p>").unwrap();
        assert_eq!(doc.roots.len(), 2);
        assert_eq!(
            element(&doc.roots[1]).children,
            vec![CodeNode::Text("B".into())]
        );
    }

    #[test]
    fn test_root_text_is_a_root() {
        let doc = build("hello <br/> world").unwrap();
        assert_eq!(doc.roots.len(), 3);
        assert_eq!(doc.roots[0], CodeNode::Text("hello".into()));
        assert_eq!(doc.roots[2], CodeNode::Text("world".into()));
    }

    #[test]
    fn test_empty_input() {
        assert!(build("").unwrap().is_empty());
        assert!(build("  \n ").unwrap().is_empty());
    }

    #[test]
    fn test_stray_root_close_tag_ignored() {
        let doc = build("</div><p>A</p></span><p>B</p>").unwrap();
        assert_eq!(doc.roots.len(), 2);
    }

    #[test]
    fn test_unknown_tag_keeps_literal() {
        let doc = build("<custom-widget></custom-widget>").unwrap();
        let node = element(&doc.roots[0]);
        assert_eq!(node.constructor, QualifiedName::new(Package::Vecty, "Tag"));
        assert_eq!(node.tag_literal.as_deref(), Some("custom-widget"));
    }

    #[test]
    fn test_attributes_classified_in_order() {
        let doc = build(r#"<a href="h" data-x="1" class="c d">Link</a>"#).unwrap();
        let markup = &element(&doc.roots[0]).markup;
        assert_eq!(markup.len(), 3);
        assert!(matches!(markup[0], ClassifiedAttribute::StringProp { .. }));
        assert!(matches!(markup[1], ClassifiedAttribute::Data { .. }));
        assert!(matches!(markup[2], ClassifiedAttribute::ClassList(_)));
    }

    #[test]
    fn test_style_error_aborts_build() {
        let err = build(r#"<p>ok</p><div><p style="color: red; invalid">x</p></div>"#)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StyleSyntax);
    }

    #[test]
    fn test_unclosed_element() {
        let err = build("<div><p>text</p>").unwrap_err();
        match err {
            TranslateError::Token(TokenError::UnclosedElement { name }) => {
                assert_eq!(name, "div")
            }
            other => panic!("Expected unclosed element, got {:?}", other),
        }
    }

    #[test]
    fn test_token_error_propagates() {
        let err = build("<div><p class=oops></p></div>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TokenStream);
    }

    #[test]
    fn test_depth_limit() {
        let markup = "<div>".repeat(5) + &"</div>".repeat(5);
        assert!(build_document_with_limit(Tokenizer::new(&markup), 5).is_ok());

        let err = build_document_with_limit(Tokenizer::new(&markup), 4).unwrap_err();
        assert!(matches!(err, TranslateError::MaxDepthExceeded { depth: 4 }));
    }

    #[test]
    fn test_from_token_buffer() {
        let tokens = TokenBuffer::new(vec![
            Token::start("ul", vec![Attribute::new("id", "list")]),
            Token::start("li", vec![]),
            Token::text(" one "),
            Token::end("li"),
            Token::end("ul"),
        ]);
        let doc = build_document(tokens).unwrap();
        let ul = element(&doc.roots[0]);
        assert_eq!(ul.constructor.name, "UnorderedList");
        assert_eq!(ul.children[0].element_depth(), 1);
        assert_eq!(
            element(&ul.children[0]).children,
            vec![CodeNode::Text("one".into())]
        );
    }
}
