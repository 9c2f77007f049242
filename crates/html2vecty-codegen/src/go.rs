//! A minimal Go source builder.
//!
//! Expressions are assembled as [`Code`] values referring to package-qualified
//! identifiers. Rendering a [`GoFile`] records which packages were actually
//! referenced and emits an import block for exactly those, sorted by path,
//! with gofmt-style layout.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use html2vecty_core::{EmitError, Package, QualifiedName};
use indexmap::IndexMap;

/// A Go literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Str(String),
    Bool(bool),
}

/// A Go expression or type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Code {
    /// `alias.Name`
    Qual(QualifiedName),
    Lit(Literal),
    /// `f(a, b)` or, when `multiline`, one argument per line.
    Call {
        func: Box<Code>,
        args: Vec<Code>,
        multiline: bool,
    },
    /// `T{a, b}` or, when `multiline`, one item per line.
    Composite {
        ty: Box<Code>,
        items: Vec<Code>,
        multiline: bool,
    },
    /// `[]T`
    Slice(Box<Code>),
    /// `*T`
    Pointer(Box<Code>),
}

impl Code {
    pub fn qual(package: Package, name: impl Into<String>) -> Self {
        Code::Qual(QualifiedName::new(package, name))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Code::Lit(Literal::Str(value.into()))
    }

    pub fn bool(value: bool) -> Self {
        Code::Lit(Literal::Bool(value))
    }

    /// Call with arguments on a single line.
    pub fn call(self, args: Vec<Code>) -> Self {
        Code::Call {
            func: Box::new(self),
            args,
            multiline: false,
        }
    }

    /// Call with one argument per line.
    pub fn call_multiline(self, args: Vec<Code>) -> Self {
        Code::Call {
            func: Box::new(self),
            args,
            multiline: true,
        }
    }

    pub fn slice(self) -> Self {
        Code::Slice(Box::new(self))
    }

    pub fn pointer(self) -> Self {
        Code::Pointer(Box::new(self))
    }

    /// Composite literal of this type with one item per line.
    pub fn values(self, items: Vec<Code>) -> Self {
        Code::Composite {
            ty: Box::new(self),
            items,
            multiline: true,
        }
    }
}

/// A top-level `var` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDecl {
    pub name: String,
    pub value: Code,
}

/// A Go source file under construction.
#[derive(Debug, Clone)]
pub struct GoFile {
    package: String,
    /// Import path -> alias.
    aliases: IndexMap<String, String>,
    decls: Vec<VarDecl>,
}

impl GoFile {
    /// Create an empty file with the given package clause.
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            aliases: IndexMap::new(),
            decls: Vec::new(),
        }
    }

    /// Register import aliases (path -> alias). Unused entries are never emitted.
    pub fn import_names(&mut self, names: impl IntoIterator<Item = (String, String)>) {
        self.aliases.extend(names);
    }

    /// Add `var name = value`.
    pub fn var(&mut self, name: impl Into<String>, value: Code) {
        self.decls.push(VarDecl {
            name: name.into(),
            value,
        });
    }

    pub fn decls(&self) -> &[VarDecl] {
        &self.decls
    }

    /// Render the file to source text.
    pub fn render(&self) -> Result<String, EmitError> {
        check_identifier(&self.package, "package name")?;

        let mut renderer = Renderer {
            aliases: &self.aliases,
            used: BTreeMap::new(),
        };
        let mut body = String::new();
        for decl in &self.decls {
            check_identifier(&decl.name, "declaration name")?;
            body.push('\n');
            let _ = write!(body, "var {} = ", decl.name);
            renderer.render(&decl.value, 0, &mut body)?;
            body.push('\n');
        }
        for decl in &self.decls {
            if let Some((path, _)) = renderer.used.iter().find(|(_, alias)| **alias == decl.name) {
                return Err(EmitError::ShadowedImport {
                    name: decl.name.clone(),
                    path: path.to_string(),
                });
            }
        }

        let mut out = format!("package {}\n", self.package);
        match renderer.used.len() {
            0 => {}
            1 => {
                out.push('\n');
                for (path, alias) in &renderer.used {
                    let _ = writeln!(out, "import {}", import_spec(path, alias));
                }
            }
            _ => {
                out.push_str("\nimport (\n");
                for (path, alias) in &renderer.used {
                    let _ = writeln!(out, "\t{}", import_spec(path, alias));
                }
                out.push_str(")\n");
            }
        }
        out.push_str(&body);
        Ok(out)
    }
}

struct Renderer<'a> {
    aliases: &'a IndexMap<String, String>,
    /// Referenced import paths and their aliases, sorted by path.
    used: BTreeMap<&'a str, &'a str>,
}

impl<'a> Renderer<'a> {
    fn alias(&mut self, package: Package) -> Result<&'a str, EmitError> {
        let aliases = self.aliases;
        let path = package.import_path();
        let (path, alias) = aliases
            .get_key_value(path)
            .ok_or_else(|| EmitError::MissingImport {
                path: path.to_string(),
            })?;
        check_identifier(alias, "import alias")?;
        if let Some((other, _)) = self
            .used
            .iter()
            .find(|(used, used_alias)| **used != path.as_str() && **used_alias == alias.as_str())
        {
            return Err(EmitError::AliasConflict {
                alias: alias.clone(),
                first: other.to_string(),
                second: path.clone(),
            });
        }
        self.used.insert(path.as_str(), alias.as_str());
        Ok(alias.as_str())
    }

    fn render(&mut self, code: &Code, indent: usize, out: &mut String) -> Result<(), EmitError> {
        match code {
            Code::Qual(name) => {
                let alias = self.alias(name.package)?;
                let _ = write!(out, "{}.{}", alias, name.name);
            }
            Code::Lit(Literal::Str(value)) => out.push_str(&quote(value)),
            Code::Lit(Literal::Bool(value)) => {
                let _ = write!(out, "{}", value);
            }
            Code::Call {
                func,
                args,
                multiline,
            } => {
                self.render(func, indent, out)?;
                self.render_list(args, ('(', ')'), *multiline, indent, out)?;
            }
            Code::Composite {
                ty,
                items,
                multiline,
            } => {
                self.render(ty, indent, out)?;
                self.render_list(items, ('{', '}'), *multiline, indent, out)?;
            }
            Code::Slice(inner) => {
                out.push_str("[]");
                self.render(inner, indent, out)?;
            }
            Code::Pointer(inner) => {
                out.push('*');
                self.render(inner, indent, out)?;
            }
        }
        Ok(())
    }

    fn render_list(
        &mut self,
        items: &[Code],
        (open, close): (char, char),
        multiline: bool,
        indent: usize,
        out: &mut String,
    ) -> Result<(), EmitError> {
        out.push(open);
        if multiline && !items.is_empty() {
            out.push('\n');
            for item in items {
                push_tabs(out, indent + 1);
                self.render(item, indent + 1, out)?;
                out.push_str(",\n");
            }
            push_tabs(out, indent);
        } else {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                self.render(item, indent, out)?;
            }
        }
        out.push(close);
        Ok(())
    }
}

fn push_tabs(out: &mut String, count: usize) {
    out.extend(std::iter::repeat('\t').take(count));
}

fn import_spec(path: &str, alias: &str) -> String {
    let declared = path.rsplit('/').next().unwrap_or(path);
    if declared == alias {
        quote(path)
    } else {
        format!("{} {}", alias, quote(path))
    }
}

const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Whether `name` is a valid, non-keyword Go identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
        && !GO_KEYWORDS.contains(&name)
}

fn check_identifier(name: &str, context: &'static str) -> Result<(), EmitError> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(EmitError::InvalidIdentifier {
            name: name.to_string(),
            context,
        })
    }
}

/// Quote a string as a Go interpreted string literal.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0B}' => out.push_str("\\v"),
            c if c.is_control() && (c as u32) < 0x80 => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c if c.is_control() || !is_printable(c) => {
                if (c as u32) < 0x10000 {
                    let _ = write!(out, "\\u{:04x}", c as u32);
                } else {
                    let _ = write!(out, "\\U{:08x}", c as u32);
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// False for format characters and for spacing other than U+0020, which
/// Go string literals must carry as escapes.
fn is_printable(c: char) -> bool {
    !matches!(
        c as u32,
        0x00A0
            | 0x00AD
            | 0x0600..=0x0605
            | 0x061C
            | 0x06DD
            | 0x070F
            | 0x08E2
            | 0x1680
            | 0x180E
            | 0x2000..=0x200F
            | 0x2028..=0x202F
            | 0x205F..=0x2064
            | 0x2066..=0x206F
            | 0x3000
            | 0xFEFF
            | 0xFFF9..=0xFFFB
            | 0x110BD
            | 0x110CD
            | 0x13430..=0x1343F
            | 0x1BCA0..=0x1BCA3
            | 0x1D173..=0x1D17A
            | 0xE0001
            | 0xE0020..=0xE007F
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vecty_aliases() -> Vec<(String, String)> {
        Package::ALL
            .iter()
            .map(|p| (p.import_path().to_string(), p.default_alias().to_string()))
            .collect()
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote("a\\b"), "\"a\\\\b\"");
        assert_eq!(quote("tab\tnew\nline"), "\"tab\\tnew\\nline\"");
        assert_eq!(quote("\u{1}"), "\"\\x01\"");
        assert_eq!(quote("\u{85}"), "\"\\u0085\"");
        assert_eq!(quote("héllo ✓"), "\"héllo ✓\"");
        assert_eq!(quote("a\u{feff}b"), "\"a\\ufeffb\"");
        assert_eq!(quote("zero\u{200b}width"), "\"zero\\u200bwidth\"");
        assert_eq!(quote("nb\u{a0}sp"), "\"nb\\u00a0sp\"");
        assert_eq!(quote("\u{e0041}"), "\"\\U000e0041\"");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("Element"));
        assert!(is_identifier("_x1"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1x"));
        assert!(!is_identifier("my-var"));
        assert!(!is_identifier("var"));
    }

    #[test]
    fn test_render_empty_file() {
        let mut file = GoFile::new("main");
        file.import_names(vecty_aliases());
        assert_eq!(file.render().unwrap(), "package main\n");
    }

    #[test]
    fn test_render_single_import() {
        let mut file = GoFile::new("main");
        file.import_names(vecty_aliases());
        file.var("Element", Code::qual(Package::Elem, "Break").call_multiline(vec![]));
        assert_eq!(
            file.render().unwrap(),
            "package main\n\nimport \"github.com/gopherjs/vecty/elem\"\n\nvar Element = elem.Break()\n"
        );
    }

    #[test]
    fn test_render_nested_multiline() {
        let mut file = GoFile::new("main");
        file.import_names(vecty_aliases());
        file.var(
            "Element",
            Code::qual(Package::Elem, "Div").call_multiline(vec![
                Code::qual(Package::Vecty, "Markup").call_multiline(vec![
                    Code::qual(Package::Vecty, "Class")
                        .call(vec![Code::string("a"), Code::string("b")]),
                    Code::qual(Package::Prop, "Checked").call(vec![Code::bool(true)]),
                ]),
                Code::qual(Package::Vecty, "Text").call(vec![Code::string("hi")]),
            ]),
        );
        let expected = "package main

import (
\t\"github.com/gopherjs/vecty\"
\t\"github.com/gopherjs/vecty/elem\"
\t\"github.com/gopherjs/vecty/prop\"
)

var Element = elem.Div(
\tvecty.Markup(
\t\tvecty.Class(\"a\", \"b\"),
\t\tprop.Checked(true),
\t),
\tvecty.Text(\"hi\"),
)
";
        assert_eq!(file.render().unwrap(), expected);
    }

    #[test]
    fn test_render_custom_alias() {
        let mut file = GoFile::new("views");
        file.import_names(vec![(
            "github.com/gopherjs/vecty".to_string(),
            "v".to_string(),
        )]);
        file.var(
            "Element",
            Code::qual(Package::Vecty, "Text").call(vec![Code::string("x")]),
        );
        let out = file.render().unwrap();
        assert!(out.contains("import v \"github.com/gopherjs/vecty\"\n"));
        assert!(out.contains("var Element = v.Text(\"x\")\n"));
    }

    #[test]
    fn test_render_slice_composite() {
        let mut file = GoFile::new("main");
        file.import_names(vecty_aliases());
        file.var(
            "Elements",
            Code::qual(Package::Vecty, "HTML").pointer().slice().values(vec![
                Code::qual(Package::Vecty, "Text").call(vec![Code::string("a")]),
            ]),
        );
        let out = file.render().unwrap();
        assert!(out.ends_with("var Elements = []*vecty.HTML{\n\tvecty.Text(\"a\"),\n}\n"));
    }

    #[test]
    fn test_missing_import_is_error() {
        let mut file = GoFile::new("main");
        file.var("Element", Code::qual(Package::Elem, "Div").call(vec![]));
        assert_eq!(
            file.render().unwrap_err(),
            EmitError::MissingImport {
                path: "github.com/gopherjs/vecty/elem".into()
            }
        );
    }

    #[test]
    fn test_invalid_names_rejected() {
        let file = GoFile::new("my-package");
        assert!(matches!(
            file.render(),
            Err(EmitError::InvalidIdentifier {
                context: "package name",
                ..
            })
        ));

        let mut file = GoFile::new("main");
        file.import_names(vecty_aliases());
        file.var("func", Code::bool(true));
        assert!(matches!(
            file.render(),
            Err(EmitError::InvalidIdentifier {
                context: "declaration name",
                ..
            })
        ));
    }
}
