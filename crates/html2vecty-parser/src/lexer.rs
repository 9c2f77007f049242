//! Lexical building blocks shared by the markup tokenizer and the style parser.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, multispace0},
    combinator::{opt, recognize},
    sequence::{delimited, pair, tuple},
    IResult,
};

/// Parse a markup name (tag or attribute), including any `prefix:` part.
pub fn name(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(|c: char| c.is_alphabetic() || c == '_' || c == ':'),
        take_while(|c: char| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | ':')),
    ))(input)
}

/// Parse a single- or double-quoted attribute value, returning the raw contents.
pub fn quoted(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('"'), take_while(|c: char| c != '"'), char('"')),
        delimited(char('\''), take_while(|c: char| c != '\''), char('\'')),
    ))(input)
}

/// Parse a CSS property name, including vendor prefixes and custom properties.
pub fn css_identifier(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(pair(
            tag("--"),
            take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_'),
        )),
        recognize(tuple((
            opt(char('-')),
            take_while1(|c: char| c.is_alphabetic() || c == '_'),
            take_while(|c: char| c.is_alphanumeric() || c == '-' || c == '_'),
        ))),
    ))(input)
}

/// Skip any leading whitespace.
pub fn skip_whitespace(input: &str) -> &str {
    match multispace0::<_, nom::error::Error<&str>>(input) {
        Ok((rest, _)) => rest,
        Err(_) => input,
    }
}

/// Strip a namespace prefix: `xlink:href` becomes `href`.
///
/// A colon in first or last position is not treated as a separator.
pub fn local_name(name: &str) -> &str {
    match name.find(':') {
        Some(i) if i >= 1 && i + 1 < name.len() => &name[i + 1..],
        _ => name,
    }
}

/// Normalise `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(input: &str) -> String {
    if !input.contains('\r') {
        return input.to_string();
    }
    input.replace("\r\n", "\n").replace('\r', "\n")
}

/// An entity reference that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadEntity {
    /// The reference text between `&` and `;` (or what was found instead).
    pub entity: String,
    /// Byte offset of the `&` within the decoded input.
    pub offset: usize,
}

/// Decode character references in text or an attribute value.
///
/// Only the five predefined entities and numeric references are known.
pub fn decode_text(raw: &str) -> Result<String, BadEntity> {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(amp) = rest.find('&') {
        out.push_str(&normalize_newlines(&rest[..amp]));
        let offset = raw.len() - rest.len() + amp;
        let after = &rest[amp + 1..];
        let len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '#'))
            .unwrap_or(after.len());
        let reference = &after[..len];

        match (after[len..].starts_with(';'), resolve_entity(reference)) {
            (true, Some(c)) => {
                out.push(c);
                rest = &after[len + 1..];
            }
            _ => {
                return Err(BadEntity {
                    entity: reference.to_string(),
                    offset,
                })
            }
        }
    }

    out.push_str(&normalize_newlines(rest));
    Ok(out)
}

fn resolve_entity(reference: &str) -> Option<char> {
    match reference {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        "apos" => Some('\''),
        "quot" => Some('"'),
        _ => {
            let number = reference.strip_prefix('#')?;
            let code = match number.strip_prefix('x') {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}

/// Compute the 1-based line and column of a byte offset.
pub fn position(input: &str, offset: usize) -> (u32, u32) {
    let before = &input[..offset.min(input.len())];
    let line = before.matches('\n').count() + 1;
    let column = before.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
    (line as u32, column as u32)
}
