//! Inline style declaration parser.
//!
//! Parses the value of a `style` attribute (`color: red; margin: 0 !important`)
//! into an ordered list of declarations. Any malformed declaration fails the
//! whole value; no partial result is returned.

use html2vecty_core::{StyleDeclaration, StyleError};
use nom::character::complete::char;

use crate::lexer::{css_identifier, skip_whitespace};

/// Parse a semicolon-separated declaration list.
///
/// # Example
///
/// ```ignore
/// use html2vecty_parser::parse_declarations;
///
/// let decls = parse_declarations("border: 2px; color: red!important;")?;
/// assert_eq!(decls[1].forwarded_value(), "red!important");
/// ```
pub fn parse_declarations(input: &str) -> Result<Vec<StyleDeclaration>, StyleError> {
    split_declarations(input)?
        .into_iter()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(parse_declaration)
        .collect()
}

/// Split on top-level `;`, leaving separators inside quotes or parentheses alone.
fn split_declarations(input: &str) -> Result<Vec<&str>, StyleError> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote = None;
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (_, '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                parts.push(&input[start..i]);
                start = i + 1;
            }
            (None, _) => {}
        }
    }

    if quote.is_some() {
        return Err(StyleError::Unterminated {
            construct: "string",
            input: input.to_string(),
        });
    }
    if depth > 0 {
        return Err(StyleError::Unterminated {
            construct: "parenthesis",
            input: input.to_string(),
        });
    }

    parts.push(&input[start..]);
    Ok(parts)
}

fn parse_declaration(text: &str) -> Result<StyleDeclaration, StyleError> {
    let (rest, property) = css_identifier(text).map_err(|_| StyleError::InvalidProperty {
        declaration: text.to_string(),
    })?;

    let rest = skip_whitespace(rest);
    let (rest, _) = char::<_, nom::error::Error<&str>>(':')(rest).map_err(|_| {
        if rest.contains(':') {
            StyleError::InvalidProperty {
                declaration: text.to_string(),
            }
        } else {
            StyleError::MissingColon {
                declaration: text.to_string(),
            }
        }
    })?;

    let (value, important) = split_important(rest.trim());
    if value.is_empty() {
        return Err(StyleError::EmptyValue {
            declaration: text.to_string(),
        });
    }

    Ok(StyleDeclaration::new(property, value, important))
}

/// Strip a trailing `!important` marker, case-insensitively.
fn split_important(value: &str) -> (&str, bool) {
    if let Some(bang) = value.rfind('!') {
        if value[bang + 1..].trim().eq_ignore_ascii_case("important") {
            return (value[..bang].trim_end(), true);
        }
    }
    (value, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let decls = parse_declarations("border: 2px; color: red").unwrap();
        assert_eq!(
            decls,
            vec![
                StyleDeclaration::new("border", "2px", false),
                StyleDeclaration::new("color", "red", false),
            ]
        );
    }

    #[test]
    fn test_parse_important() {
        let decls = parse_declarations("color:red!important").unwrap();
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].value, "red");
        assert!(decls[0].important);
        assert!(decls[0].forwarded_value().ends_with("!important"));

        let decls = parse_declarations("margin: 0 ! IMPORTANT").unwrap();
        assert_eq!(decls[0].value, "0");
        assert!(decls[0].important);
    }

    #[test]
    fn test_trailing_and_empty_separators() {
        let decls = parse_declarations(" ; border: 2px;; color: red!important; ").unwrap();
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[1].forwarded_value(), "red!important");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_declarations("").unwrap().is_empty());
        assert!(parse_declarations("   ").unwrap().is_empty());
    }

    #[test]
    fn test_semicolon_inside_url() {
        let decls =
            parse_declarations("background: url('data:image/png;base64,AAAA'); float: left")
                .unwrap();
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].value, "url('data:image/png;base64,AAAA')");
        assert_eq!(decls[1].property, "float");
    }

    #[test]
    fn test_vendor_and_custom_properties() {
        let decls = parse_declarations("-webkit-box-sizing: border-box; --gap: 4px").unwrap();
        assert_eq!(decls[0].property, "-webkit-box-sizing");
        assert_eq!(decls[1].property, "--gap");
    }

    #[test]
    fn test_missing_colon() {
        let err = parse_declarations("color: red; invalid").unwrap_err();
        assert_eq!(
            err,
            StyleError::MissingColon {
                declaration: "invalid".into()
            }
        );
    }

    #[test]
    fn test_invalid_property() {
        assert!(matches!(
            parse_declarations("2px: red"),
            Err(StyleError::InvalidProperty { .. })
        ));
        assert!(matches!(
            parse_declarations("col or: red"),
            Err(StyleError::InvalidProperty { .. })
        ));
    }

    #[test]
    fn test_empty_value() {
        assert!(matches!(
            parse_declarations("color: ;"),
            Err(StyleError::EmptyValue { .. })
        ));
        assert!(matches!(
            parse_declarations("color: !important"),
            Err(StyleError::EmptyValue { .. })
        ));
    }

    #[test]
    fn test_unterminated() {
        assert!(matches!(
            parse_declarations("content: \"abc"),
            Err(StyleError::Unterminated {
                construct: "string",
                ..
            })
        ));
        assert!(matches!(
            parse_declarations("background: url(x"),
            Err(StyleError::Unterminated {
                construct: "parenthesis",
                ..
            })
        ));
    }
}
